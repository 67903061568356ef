//! FFI tests for swipekey-core

use std::ffi::CStr;
use std::os::raw::c_int;
use std::ptr;
use swipekey_core::ffi::*;

unsafe fn read_state(handle: *mut SessionHandle) -> (String, String, String) {
    let mut state = SessionStateFfi {
        composing: ptr::null_mut(),
        committed: ptr::null_mut(),
        display: ptr::null_mut(),
    };
    assert_eq!(swipekey_session_get_state(handle, &mut state), SwipekeyResult::Success);
    let texts = (
        CStr::from_ptr(state.composing).to_str().unwrap().to_string(),
        CStr::from_ptr(state.committed).to_str().unwrap().to_string(),
        CStr::from_ptr(state.display).to_str().unwrap().to_string(),
    );
    swipekey_free_state(&mut state);
    assert!(state.display.is_null());
    texts
}

unsafe fn push(handle: *mut SessionHandle, keys: &str) {
    for ch in keys.chars() {
        let result = swipekey_session_push_key(handle, ch as u32, ptr::null_mut());
        assert_eq!(result, SwipekeyResult::Success);
    }
}

#[test]
fn test_session_lifecycle() {
    unsafe {
        let handle = swipekey_session_new();
        assert!(!handle.is_null());
        swipekey_session_free(handle);
        swipekey_session_free(ptr::null_mut());
    }
}

#[test]
fn test_version() {
    unsafe {
        let version = swipekey_get_version();
        assert!(!version.is_null());
        let version_str = CStr::from_ptr(version).to_str().unwrap();
        assert!(!version_str.is_empty());
    }
}

#[test]
fn test_push_and_state() {
    unsafe {
        let handle = swipekey_session_new();
        push(handle, "rkfk");

        let (composing, committed, display) = read_state(handle);
        assert_eq!(composing, "라");
        assert_eq!(committed, "가");
        assert_eq!(display, "가라");

        swipekey_session_free(handle);
    }
}

#[test]
fn test_push_reports_drop_and_rejects_unknown_keys() {
    unsafe {
        let handle = swipekey_session_new();
        push(handle, "dk");

        let mut dropped: c_int = -1;
        let result = swipekey_session_push_key(handle, 'W' as u32, &mut dropped);
        assert_eq!(result, SwipekeyResult::Success);
        assert_eq!(dropped, 1);

        let result = swipekey_session_push_key(handle, '!' as u32, &mut dropped);
        assert_eq!(result, SwipekeyResult::ErrorUnrecognizedKey);

        // lone surrogate is not a scalar value
        let result = swipekey_session_push_key(handle, 0xD800, ptr::null_mut());
        assert_eq!(result, SwipekeyResult::ErrorInvalidParameter);

        let result = swipekey_session_push_key(ptr::null_mut(), 'r' as u32, ptr::null_mut());
        assert_eq!(result, SwipekeyResult::ErrorInvalidHandle);

        swipekey_session_free(handle);
    }
}

#[test]
fn test_backspace() {
    unsafe {
        let handle = swipekey_session_new();
        push(handle, "rkfk");

        let mut removed: c_int = 0;
        let mut popped: u32 = 0;
        let result = swipekey_session_backspace(handle, &mut removed, &mut popped);
        assert_eq!(result, SwipekeyResult::Success);
        assert_eq!(removed, 1);
        assert_eq!(popped, 'k' as u32);
        assert_eq!(read_state(handle).2, "갈");

        swipekey_session_reset(handle);
        let result = swipekey_session_backspace(handle, &mut removed, &mut popped);
        assert_eq!(result, SwipekeyResult::Success);
        assert_eq!(removed, 0);
        assert_eq!(popped, 0);

        let result = swipekey_session_backspace(handle, ptr::null_mut(), ptr::null_mut());
        assert_eq!(result, SwipekeyResult::ErrorInvalidParameter);

        swipekey_session_free(handle);
    }
}

#[test]
fn test_flush_and_commit() {
    unsafe {
        let handle = swipekey_session_new();
        push(handle, "gksrmf");

        assert_eq!(swipekey_session_flush(handle), SwipekeyResult::Success);
        let (composing, committed, _) = read_state(handle);
        assert_eq!(composing, "");
        assert_eq!(committed, "한글");

        let word = swipekey_session_commit(handle);
        assert_eq!(CStr::from_ptr(word).to_str().unwrap(), "한글");
        swipekey_free_string(word);

        assert_eq!(read_state(handle).2, "");
        assert!(swipekey_session_commit(ptr::null_mut()).is_null());

        swipekey_session_free(handle);
    }
}

#[test]
fn test_decompose() {
    let mut triple = JamoTriple::default();
    assert_eq!(swipekey_decompose('닭' as u32, &mut triple), 1);
    assert_eq!(
        triple,
        JamoTriple {
            initial: 'ㄷ' as u32,
            medial: 'ㅏ' as u32,
            last: 'ㄺ' as u32,
        }
    );

    assert_eq!(swipekey_decompose('가' as u32, &mut triple), 1);
    assert_eq!(triple.last, 0);

    assert_eq!(swipekey_decompose('a' as u32, &mut triple), 0);
    assert_eq!(swipekey_decompose('가' as u32, ptr::null_mut()), 0);
}
