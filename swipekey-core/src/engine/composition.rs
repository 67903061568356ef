//! In-progress syllable state

use crate::keyboard::{double_initial, fuse_final, fuse_vowel};

/// Jamo held by one syllable slot, one jamo per keystroke.
///
/// A `Pair` is an unresolved combination (ㄱ+ㄱ, ㅗ+ㅏ, ㄹ+ㄱ) that the codec
/// collapses into its single canonical jamo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cluster {
    Single(char),
    Pair(char, char),
}

impl Cluster {
    /// Number of keystrokes in this cluster
    pub fn len(self) -> usize {
        match self {
            Cluster::Single(_) => 1,
            Cluster::Pair(..) => 2,
        }
    }

    /// First jamo of the cluster
    pub fn first(self) -> char {
        match self {
            Cluster::Single(c) | Cluster::Pair(c, _) => c,
        }
    }

    /// Collapses the cluster to one jamo using `fuse` for pairs
    pub fn resolve(self, fuse: impl Fn(char, char) -> Option<char>) -> Option<char> {
        match self {
            Cluster::Single(c) => Some(c),
            Cluster::Pair(a, b) => fuse(a, b),
        }
    }

    /// Raw jamo text, pairs left uncombined
    pub fn raw(self) -> String {
        match self {
            Cluster::Single(c) => c.to_string(),
            Cluster::Pair(a, b) => [a, b].iter().collect(),
        }
    }
}

/// A syllable being assembled by the automaton.
///
/// `jongsung` is only ever set while `jungsung` is set. Once `complete` is
/// true the composition is final and must be flushed to committed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    /// Initial consonant (chosung)
    pub chosung: Option<Cluster>,
    /// Vowel or diphthong (jungsung)
    pub jungsung: Option<Cluster>,
    /// Final consonant or compound final (jongsung)
    pub jongsung: Option<Cluster>,
    /// The syllable is finished
    pub complete: bool,
    pub(crate) dropped: usize,
}

impl Composition {
    /// Creates an open composition from single jamo
    pub fn from_jamo(chosung: Option<char>, jungsung: Option<char>, jongsung: Option<char>) -> Self {
        Self {
            chosung: chosung.map(Cluster::Single),
            jungsung: jungsung.map(Cluster::Single),
            jongsung: jongsung.map(Cluster::Single),
            complete: false,
            dropped: 0,
        }
    }

    /// Jamo count across all slots, which is also the keystroke count
    pub fn size(&self) -> usize {
        [self.chosung, self.jungsung, self.jongsung]
            .iter()
            .flatten()
            .map(|c| c.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Keys passed over without filling a slot.
    ///
    /// This counts ㄸ/ㅃ/ㅉ keys that arrived after the vowel (they have no
    /// final form and are dropped) and any unrecognized keys.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Keys this composition accounts for, from the front of the buffer
    pub fn consumed(&self) -> usize {
        self.size() + self.dropped
    }

    /// Canonical initial jamo, doubling resolved
    pub fn initial_jamo(&self) -> Option<char> {
        self.chosung.and_then(|c| c.resolve(double_initial))
    }

    /// Canonical vowel jamo, diphthong resolved
    pub fn medial_jamo(&self) -> Option<char> {
        self.jungsung.and_then(|c| c.resolve(fuse_vowel))
    }

    /// Canonical final jamo, compound resolved
    pub fn final_jamo(&self) -> Option<char> {
        self.jongsung.and_then(|c| c.resolve(fuse_final))
    }
}
