//! Output representation for the Swipekey engine

/// Text the host should show for the current word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// The open syllable, still subject to change
    pub composing: String,
    /// Finished syllables
    pub committed: String,
    /// `committed` followed by `composing`
    pub display: String,
}

impl SessionState {
    pub fn new(composing: String, committed: String) -> Self {
        let display = format!("{}{}", committed, composing);
        Self {
            composing,
            committed,
            display,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }
}

/// What happened to a key handed to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key entered composition
    Composed,
    /// ㄸ, ㅃ or ㅉ arrived while a vowel was held; it has no final form and
    /// was recorded in history without changing the text
    Dropped,
}
