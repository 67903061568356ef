//! Backspace replays the remaining key history

use pretty_assertions::assert_eq;
use swipekey_core::{InputSession, KeyCode, SessionState};

mod common;
use common::*;

#[test]
fn test_backspace_reverts_resyllabification() {
    let mut session = session_with("rkfk");
    assert_eq!(session.state().display, "가라");

    assert_eq!(session.backspace(), Some(KeyCode('k')));
    assert_eq!(texts(&session), ("".to_string(), "갈".to_string()));
}

#[test]
fn test_backspace_restores_compound_final() {
    let mut session = session_with("ekfrk");
    assert_eq!(session.state().display, "달가");

    session.backspace();
    assert_eq!(texts(&session), ("".to_string(), "닭".to_string()));
    session.backspace();
    assert_eq!(texts(&session), ("".to_string(), "달".to_string()));
}

#[test]
fn test_backspace_on_empty_history() {
    let mut session = InputSession::new();
    assert_eq!(session.backspace(), None);
    assert_eq!(session.state(), SessionState::default());
}

#[test]
fn test_backspace_until_empty() {
    let mut session = session_with("rk");
    assert_eq!(session.backspace(), Some(KeyCode('k')));
    assert_eq!(session.composing_text(), "ㄱ");
    assert_eq!(session.backspace(), Some(KeyCode('r')));
    assert_eq!(session.composing_text(), "");
    assert_eq!(session.backspace(), None);
}

#[test]
fn test_backspace_is_left_inverse_of_push() {
    let words = [
        "rkfk",
        "gksrmf",
        "dkssudgktpdy",
        "ekfrdl",
        "rkqtdmf",
        "rrkRrk",
        "rhkdnjsdml",
        "dkWrk",
        "krkrs",
        "qnfrdmsTkf",
    ];

    for word in words {
        let mut session = InputSession::new();
        let mut states = vec![session.state()];
        for ch in word.chars() {
            session.push_key(KeyCode(ch)).unwrap();
            states.push(session.state());
        }

        states.pop();
        while let Some(expected) = states.pop() {
            assert!(session.backspace().is_some());
            assert_eq!(session.state(), expected, "word {:?}", word);
        }
        assert!(session.is_empty());
    }
}

#[test]
fn test_backspace_pops_dropped_key_without_changing_text() {
    let mut session = session_with("dkW");
    assert_eq!(session.backspace(), Some(KeyCode('W')));
    assert_eq!(session.composing_text(), "아");
    assert_eq!(session.key_history().len(), 2);
}

#[test]
fn test_backspace_after_flush_keeps_flush() {
    let mut session = session_with("rkf");
    session.flush();
    session.push_key(KeyCode('k')).unwrap();
    assert_eq!(texts(&session), ("갈".to_string(), "ㅏ".to_string()));

    session.backspace();
    assert_eq!(texts(&session), ("갈".to_string(), "".to_string()));

    // removing a key typed before the flush undoes the flush too
    session.backspace();
    assert_eq!(texts(&session), ("".to_string(), "가".to_string()));

    session.push_key(KeyCode('f')).unwrap();
    session.push_key(KeyCode('k')).unwrap();
    assert_eq!(session.state().display, "가라");
}

#[test]
fn test_history_cleared_on_commit() {
    let mut session = session_with("gks");
    assert_eq!(session.commit(), "한");
    assert_eq!(session.backspace(), None);

    type_keys(&mut session, "rmf");
    session.backspace();
    assert_eq!(session.state().display, "그");
}
