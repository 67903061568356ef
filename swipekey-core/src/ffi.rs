//! Foreign Function Interface for Swipekey Core
//!
//! This module provides a C-compatible API for keyboard hosts (e.g. an iOS
//! keyboard extension) that own the text field and the on-screen layout.
//!
//! A session handle must only be used from one thread at a time; the handle
//! carries no lock.

use crate::engine::{InputSession, KeyOutcome};
use crate::keyboard::KeyCode;
use crate::unicode;
use std::ffi::CString;
use std::os::raw::{c_char, c_int};
use std::ptr;

/// Opaque handle to an input session
pub struct SessionHandle {
    session: InputSession,
}

/// Result codes for FFI functions
#[repr(C)]
#[derive(Debug, PartialEq)]
pub enum SwipekeyResult {
    Success = 0,
    ErrorInvalidHandle = -1,
    ErrorInvalidParameter = -2,
    ErrorUnrecognizedKey = -3,
}

/// Text snapshot of a session. Strings are UTF-8, null-terminated, and must
/// be released with `swipekey_free_state`.
#[repr(C)]
pub struct SessionStateFfi {
    pub composing: *mut c_char,
    pub committed: *mut c_char,
    pub display: *mut c_char,
}

/// Jamo of a decomposed syllable as Unicode scalars; 0 means empty
#[repr(C)]
#[derive(Debug, Default, PartialEq)]
pub struct JamoTriple {
    pub initial: u32,
    pub medial: u32,
    pub last: u32,
}

fn to_c_string(text: &str) -> *mut c_char {
    match CString::new(text) {
        Ok(c_string) => c_string.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Creates a new session
#[no_mangle]
pub extern "C" fn swipekey_session_new() -> *mut SessionHandle {
    let handle = Box::new(SessionHandle {
        session: InputSession::new(),
    });
    Box::into_raw(handle)
}

/// Frees a session
#[no_mangle]
pub extern "C" fn swipekey_session_free(handle: *mut SessionHandle) {
    if !handle.is_null() {
        unsafe {
            let _ = Box::from_raw(handle);
        }
    }
}

/// Pushes one key code (a Unicode scalar such as 'r' or 'R').
///
/// `dropped` may be null; when given it is set to 1 if the key was recorded
/// without changing the text.
#[no_mangle]
pub extern "C" fn swipekey_session_push_key(
    handle: *mut SessionHandle,
    key: u32,
    dropped: *mut c_int,
) -> SwipekeyResult {
    if handle.is_null() {
        return SwipekeyResult::ErrorInvalidHandle;
    }
    let ch = match char::from_u32(key) {
        Some(ch) => ch,
        None => return SwipekeyResult::ErrorInvalidParameter,
    };

    let handle = unsafe { &mut *handle };
    match handle.session.push_key(KeyCode(ch)) {
        Ok(outcome) => {
            if !dropped.is_null() {
                unsafe {
                    *dropped = (outcome == KeyOutcome::Dropped) as c_int;
                }
            }
            SwipekeyResult::Success
        }
        Err(_) => SwipekeyResult::ErrorUnrecognizedKey,
    }
}

/// Removes the last key of the current word.
///
/// `removed` is set to 0 when the history was empty and the host should
/// delete from its own document instead. `popped` (nullable) receives the
/// removed key, or 0.
#[no_mangle]
pub extern "C" fn swipekey_session_backspace(
    handle: *mut SessionHandle,
    removed: *mut c_int,
    popped: *mut u32,
) -> SwipekeyResult {
    if handle.is_null() {
        return SwipekeyResult::ErrorInvalidHandle;
    }
    if removed.is_null() {
        return SwipekeyResult::ErrorInvalidParameter;
    }

    let handle = unsafe { &mut *handle };
    let key = handle.session.backspace();
    unsafe {
        *removed = key.is_some() as c_int;
        if !popped.is_null() {
            *popped = key.map(|k| k.as_char() as u32).unwrap_or(0);
        }
    }
    SwipekeyResult::Success
}

/// Moves the open syllable to committed text
#[no_mangle]
pub extern "C" fn swipekey_session_flush(handle: *mut SessionHandle) -> SwipekeyResult {
    if handle.is_null() {
        return SwipekeyResult::ErrorInvalidHandle;
    }
    let handle = unsafe { &mut *handle };
    handle.session.flush();
    SwipekeyResult::Success
}

/// Clears the session
#[no_mangle]
pub extern "C" fn swipekey_session_reset(handle: *mut SessionHandle) -> SwipekeyResult {
    if handle.is_null() {
        return SwipekeyResult::ErrorInvalidHandle;
    }
    let handle = unsafe { &mut *handle };
    handle.session.reset();
    SwipekeyResult::Success
}

/// Flushes, returns the finished word and resets the session.
/// Free the result with `swipekey_free_string`.
#[no_mangle]
pub extern "C" fn swipekey_session_commit(handle: *mut SessionHandle) -> *mut c_char {
    if handle.is_null() {
        return ptr::null_mut();
    }
    let handle = unsafe { &mut *handle };
    to_c_string(&handle.session.commit())
}

/// Fills `output` with the current text
#[no_mangle]
pub extern "C" fn swipekey_session_get_state(
    handle: *mut SessionHandle,
    output: *mut SessionStateFfi,
) -> SwipekeyResult {
    if handle.is_null() {
        return SwipekeyResult::ErrorInvalidHandle;
    }
    if output.is_null() {
        return SwipekeyResult::ErrorInvalidParameter;
    }

    let handle = unsafe { &*handle };
    let state = handle.session.state();
    let output = unsafe { &mut *output };
    output.composing = to_c_string(&state.composing);
    output.committed = to_c_string(&state.committed);
    output.display = to_c_string(&state.display);
    SwipekeyResult::Success
}

/// Frees a string allocated by the engine
#[no_mangle]
pub extern "C" fn swipekey_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

/// Frees the strings held by a state snapshot
#[no_mangle]
pub extern "C" fn swipekey_free_state(state: *mut SessionStateFfi) {
    if state.is_null() {
        return;
    }
    let state = unsafe { &mut *state };
    for field in [&mut state.composing, &mut state.committed, &mut state.display] {
        swipekey_free_string(*field);
        *field = ptr::null_mut();
    }
}

/// Splits a precomposed syllable into jamo.
/// Returns 1 on success, 0 when `syllable` is outside the Hangul block.
#[no_mangle]
pub extern "C" fn swipekey_decompose(syllable: u32, output: *mut JamoTriple) -> c_int {
    if output.is_null() {
        return 0;
    }
    let comp = match char::from_u32(syllable).and_then(unicode::decompose) {
        Some(comp) => comp,
        None => return 0,
    };

    let output = unsafe { &mut *output };
    output.initial = comp.initial_jamo().map(|c| c as u32).unwrap_or(0);
    output.medial = comp.medial_jamo().map(|c| c as u32).unwrap_or(0);
    output.last = comp.final_jamo().map(|c| c as u32).unwrap_or(0);
    1
}

/// Get library version
#[no_mangle]
pub extern "C" fn swipekey_get_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
