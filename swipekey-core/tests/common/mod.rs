//! Shared helpers for session tests

#![allow(dead_code)]

use swipekey_core::{InputSession, KeyCode, KeyOutcome};

/// Create a session that has already typed `keys`
pub fn session_with(keys: &str) -> InputSession {
    let mut session = InputSession::new();
    type_keys(&mut session, keys);
    session
}

/// Type every character of `keys`, panicking on unrecognized keys
pub fn type_keys(session: &mut InputSession, keys: &str) -> Vec<KeyOutcome> {
    keys.chars()
        .map(|ch| {
            session
                .push_key(KeyCode(ch))
                .unwrap_or_else(|e| panic!("key {:?} rejected: {}", ch, e))
        })
        .collect()
}

/// (committed, composing) pair for compact assertions
pub fn texts(session: &InputSession) -> (String, String) {
    let state = session.state();
    (state.committed, state.composing)
}

/// Display text of a fresh session after typing `keys`
pub fn display_of(keys: &str) -> String {
    session_with(keys).state().display
}
