//! Dubeolsik (two-set) key table
//!
//! Maps Latin key codes to compatibility jamo and holds the three fixed
//! combination tables: tense doubling, diphthong fusion and compound finals.

use std::fmt;

/// A single logical keystroke.
///
/// Case is significant: `r` is ㄱ while `R` is ㄲ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode(pub char);

impl KeyCode {
    /// Gets the raw key character
    pub fn as_char(self) -> char {
        self.0
    }

    /// Classifies this key against the dubeolsik table
    pub fn kind(self) -> KeyKind {
        classify(self)
    }
}

impl From<char> for KeyCode {
    fn from(ch: char) -> Self {
        Self(ch)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role a key can play in a syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Consonant with no final form (ㄸ, ㅃ, ㅉ)
    Initial,
    /// Vowel
    Medial,
    /// Consonant usable as either initial or final
    Final,
    /// Not part of the layout (digits, punctuation, ...)
    Unrecognized,
}

impl KeyKind {
    pub fn is_consonant(self) -> bool {
        matches!(self, KeyKind::Initial | KeyKind::Final)
    }
}

/// Tense consonants reachable by pressing a base consonant twice
const TENSE_PAIRS: [(char, char); 5] = [
    ('ㄱ', 'ㄲ'),
    ('ㄷ', 'ㄸ'),
    ('ㅂ', 'ㅃ'),
    ('ㅅ', 'ㅆ'),
    ('ㅈ', 'ㅉ'),
];

const DIPHTHONGS: [(char, char, char); 7] = [
    ('ㅗ', 'ㅏ', 'ㅘ'),
    ('ㅗ', 'ㅐ', 'ㅙ'),
    ('ㅗ', 'ㅣ', 'ㅚ'),
    ('ㅜ', 'ㅓ', 'ㅝ'),
    ('ㅜ', 'ㅔ', 'ㅞ'),
    ('ㅜ', 'ㅣ', 'ㅟ'),
    ('ㅡ', 'ㅣ', 'ㅢ'),
];

const COMPOUND_FINALS: [(char, char, char); 11] = [
    ('ㄱ', 'ㅅ', 'ㄳ'),
    ('ㄴ', 'ㅈ', 'ㄵ'),
    ('ㄴ', 'ㅎ', 'ㄶ'),
    ('ㄹ', 'ㄱ', 'ㄺ'),
    ('ㄹ', 'ㅁ', 'ㄻ'),
    ('ㄹ', 'ㅂ', 'ㄼ'),
    ('ㄹ', 'ㅅ', 'ㄽ'),
    ('ㄹ', 'ㅌ', 'ㄾ'),
    ('ㄹ', 'ㅍ', 'ㄿ'),
    ('ㄹ', 'ㅎ', 'ㅀ'),
    ('ㅂ', 'ㅅ', 'ㅄ'),
];

/// Jamo a key produces in initial position
pub fn initial_jamo(key: KeyCode) -> Option<char> {
    let jamo = match key.0 {
        'r' => 'ㄱ',
        'R' => 'ㄲ',
        's' => 'ㄴ',
        'e' => 'ㄷ',
        'E' => 'ㄸ',
        'f' => 'ㄹ',
        'a' => 'ㅁ',
        'q' => 'ㅂ',
        'Q' => 'ㅃ',
        't' => 'ㅅ',
        'T' => 'ㅆ',
        'd' => 'ㅇ',
        'w' => 'ㅈ',
        'W' => 'ㅉ',
        'c' => 'ㅊ',
        'z' => 'ㅋ',
        'x' => 'ㅌ',
        'v' => 'ㅍ',
        'g' => 'ㅎ',
        _ => return None,
    };
    Some(jamo)
}

/// Jamo a key produces as a vowel
pub fn medial_jamo(key: KeyCode) -> Option<char> {
    let jamo = match key.0 {
        'k' => 'ㅏ',
        'o' => 'ㅐ',
        'i' => 'ㅑ',
        'O' => 'ㅒ',
        'j' => 'ㅓ',
        'p' => 'ㅔ',
        'u' => 'ㅕ',
        'P' => 'ㅖ',
        'h' => 'ㅗ',
        'y' => 'ㅛ',
        'n' => 'ㅜ',
        'b' => 'ㅠ',
        'm' => 'ㅡ',
        'l' => 'ㅣ',
        _ => return None,
    };
    Some(jamo)
}

/// Jamo a key produces in final position.
///
/// `E`, `Q` and `W` have no entry: ㄸ, ㅃ and ㅉ never close a syllable.
pub fn final_jamo(key: KeyCode) -> Option<char> {
    match key.0 {
        'E' | 'Q' | 'W' => None,
        _ => initial_jamo(key),
    }
}

/// Classifies a key
pub fn classify(key: KeyCode) -> KeyKind {
    if medial_jamo(key).is_some() {
        KeyKind::Medial
    } else if final_jamo(key).is_some() {
        KeyKind::Final
    } else if initial_jamo(key).is_some() {
        KeyKind::Initial
    } else {
        KeyKind::Unrecognized
    }
}

/// Returns the tense consonant formed by pressing `a` then `b` in initial position
pub fn double_initial(a: char, b: char) -> Option<char> {
    if a != b {
        return None;
    }
    TENSE_PAIRS
        .iter()
        .find(|(base, _)| *base == a)
        .map(|&(_, tense)| tense)
}

/// True when two identical initials double into a tense consonant
pub fn doubleable(a: char, b: char) -> bool {
    double_initial(a, b).is_some()
}

/// Diphthong formed by two vowels, in order
pub fn fuse_vowel(a: char, b: char) -> Option<char> {
    DIPHTHONGS
        .iter()
        .find(|(x, y, _)| *x == a && *y == b)
        .map(|&(_, _, fused)| fused)
}

/// Compound final formed by two consonants, in order
pub fn fuse_final(a: char, b: char) -> Option<char> {
    COMPOUND_FINALS
        .iter()
        .find(|(x, y, _)| *x == a && *y == b)
        .map(|&(_, _, fused)| fused)
}
