use log::debug;

use super::automaton;
use super::composition::Composition;
use super::output::{KeyOutcome, SessionState};
use super::state::{KeyHistory, PendingKeys};
use crate::keyboard::{classify, KeyCode, KeyKind};
use crate::unicode::compose;
use crate::{Error, Result};

/// Sequences automaton passes into committed and composing text for one word.
///
/// Committed and composing text are derived from the key history. Backspace
/// truncates the history and replays it from scratch, since moving a final
/// consonant between syllables makes undo non-local.
///
/// A session is driven from a single input thread; it holds no locks.
#[derive(Debug, Clone, Default)]
pub struct InputSession {
    /// Keys accepted for the current word
    history: KeyHistory,
    /// Keys not yet part of committed text
    pending: PendingKeys,
    /// Open syllable built from `pending`
    composition: Composition,
    committed: String,
    composing: String,
}

impl InputSession {
    /// Create a new empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one key.
    ///
    /// Unrecognized keys are rejected and leave the session untouched; the
    /// caller is expected to route them to the host directly.
    pub fn push_key(&mut self, key: KeyCode) -> Result<KeyOutcome> {
        if classify(key) == KeyKind::Unrecognized {
            return Err(Error::UnrecognizedKey(key.as_char()));
        }

        self.history.push(key);
        let outcome = self.feed(key);
        self.refresh_composing();

        debug!(
            "key '{}' -> committed '{}' composing '{}'",
            key, self.committed, self.composing
        );
        Ok(outcome)
    }

    /// Process each character of `keys` in order.
    ///
    /// Stops at the first unrecognized key; keys before it stay applied.
    pub fn push_keys(&mut self, keys: &str) -> Result<()> {
        for ch in keys.chars() {
            self.push_key(KeyCode(ch))?;
        }
        Ok(())
    }

    /// Remove the last key and recompute everything from the remaining history.
    ///
    /// Returns `None` when there was nothing to remove, in which case the
    /// deletion belongs to the host document.
    pub fn backspace(&mut self) -> Option<KeyCode> {
        let popped = self.history.pop()?;
        debug!("backspace removed '{}', replaying {} key(s)", popped, self.history.len());
        self.replay();
        Some(popped)
    }

    /// Treat the open syllable as finished and move it to committed text.
    ///
    /// History is kept; call [`reset`](Self::reset) to start a new word.
    pub fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        self.history.mark_flush();
        self.flush_pending();
        self.refresh_composing();
    }

    /// Flush, hand back the finished word and start a new one
    pub fn commit(&mut self) -> String {
        self.flush();
        let word = std::mem::take(&mut self.committed);
        self.reset();
        debug!("committed word '{}'", word);
        word
    }

    /// Clear history and all derived text
    pub fn reset(&mut self) {
        self.history.clear();
        self.clear_derived();
    }

    /// Snapshot of the current text
    pub fn state(&self) -> SessionState {
        SessionState::new(self.composing.clone(), self.committed.clone())
    }

    pub fn composing_text(&self) -> &str {
        &self.composing
    }

    pub fn committed_text(&self) -> &str {
        &self.committed
    }

    /// The open syllable
    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn key_history(&self) -> &[KeyCode] {
        self.history.keys()
    }

    /// Keys not yet folded into committed text
    pub fn pending_keys(&self) -> Vec<KeyCode> {
        self.pending.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Run a key through the automaton without touching history
    fn feed(&mut self, key: KeyCode) -> KeyOutcome {
        if classify(key) == KeyKind::Initial && self.composition.jungsung.is_some() {
            debug!("'{}' has no final form, dropped", key);
            return KeyOutcome::Dropped;
        }

        self.pending.push(key);
        loop {
            let step = automaton::step(self.pending.iter());
            if !step.is_complete() {
                self.composition = step.composition;
                break;
            }
            debug_assert!(step.consumed > 0);
            self.commit_composition(&step.composition);
            self.pending.consume(step.consumed);
        }
        KeyOutcome::Composed
    }

    fn replay(&mut self) {
        self.clear_derived();
        let keys = self.history.keys().to_vec();
        for (index, key) in keys.into_iter().enumerate() {
            self.feed(key);
            if self.history.flushed_at(index + 1) {
                self.flush_pending();
            }
        }
        self.refresh_composing();
        debug!(
            "replay done: committed '{}' composing '{}'",
            self.committed, self.composing
        );
    }

    fn flush_pending(&mut self) {
        let comp = std::mem::take(&mut self.composition);
        self.commit_composition(&comp);
        self.pending.clear();
    }

    fn commit_composition(&mut self, comp: &Composition) {
        if comp.is_empty() {
            return;
        }
        let text = compose(comp);
        debug!("commit '{}'", text);
        self.committed.push_str(&text);
    }

    fn refresh_composing(&mut self) {
        self.composing = compose(&self.composition);
    }

    fn clear_derived(&mut self) {
        self.pending.clear();
        self.composition = Composition::default();
        self.committed.clear();
        self.composing.clear();
    }
}
