//! Key history and pending buffer

use std::collections::VecDeque;

use crate::keyboard::KeyCode;

/// Every key accepted for the current word.
///
/// This is the only source of truth for a session; committed and composing
/// text are rebuilt from it on backspace. Flush boundaries are stored as
/// history lengths so a replay can reproduce them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyHistory {
    keys: Vec<KeyCode>,
    flushes: Vec<usize>,
}

impl KeyHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: KeyCode) {
        self.keys.push(key);
    }

    /// Removes the last key, forgetting flushes recorded after it
    pub fn pop(&mut self) -> Option<KeyCode> {
        let key = self.keys.pop()?;
        let len = self.keys.len();
        self.flushes.retain(|&mark| mark <= len);
        Some(key)
    }

    /// Records a flush after the current last key
    pub fn mark_flush(&mut self) {
        let len = self.keys.len();
        if self.flushes.last() != Some(&len) {
            self.flushes.push(len);
        }
    }

    /// True if a flush was recorded once `len` keys had been typed
    pub fn flushed_at(&self, len: usize) -> bool {
        self.flushes.contains(&len)
    }

    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.flushes.clear();
    }
}

/// Keys not yet folded into committed text.
///
/// Only ever appended at the back and popped from the front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingKeys {
    keys: VecDeque<KeyCode>,
}

impl PendingKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: KeyCode) {
        self.keys.push_back(key);
    }

    /// Pops `count` keys from the front
    pub fn consume(&mut self, count: usize) {
        let count = count.min(self.keys.len());
        self.keys.drain(..count);
    }

    pub fn iter(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.keys.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
