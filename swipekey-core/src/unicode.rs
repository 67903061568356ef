//! Hangul syllable codec
//!
//! Converts between a [`Composition`] and a precomposed syllable in the
//! U+AC00..=U+D7A3 block using the standard arithmetic formula:
//!
//! `SYLLABLE_BASE + initial * 588 + medial * 28 + final`

use crate::engine::{Cluster, Composition};
use crate::error::{Error, Result};
use crate::keyboard::{double_initial, fuse_final, fuse_vowel};

/// First precomposed syllable (가)
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Last precomposed syllable (힣)
pub const SYLLABLE_LAST: u32 = 0xD7A3;

const MEDIAL_COUNT: u32 = 21;
const FINAL_COUNT: u32 = 28;
/// Syllables sharing one initial
const INITIAL_SPAN: u32 = MEDIAL_COUNT * FINAL_COUNT; // 588

/// Initial consonants in block order
pub const INITIAL_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ',
    'ㅍ', 'ㅎ',
];

/// Vowels in block order
pub const MEDIAL_JAMO: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ',
    'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Finals in block order; index 0 is "no final"
pub const FINAL_JAMO: [Option<char>; 28] = [
    None,
    Some('ㄱ'),
    Some('ㄲ'),
    Some('ㄳ'),
    Some('ㄴ'),
    Some('ㄵ'),
    Some('ㄶ'),
    Some('ㄷ'),
    Some('ㄹ'),
    Some('ㄺ'),
    Some('ㄻ'),
    Some('ㄼ'),
    Some('ㄽ'),
    Some('ㄾ'),
    Some('ㄿ'),
    Some('ㅀ'),
    Some('ㅁ'),
    Some('ㅂ'),
    Some('ㅄ'),
    Some('ㅅ'),
    Some('ㅆ'),
    Some('ㅇ'),
    Some('ㅈ'),
    Some('ㅊ'),
    Some('ㅋ'),
    Some('ㅌ'),
    Some('ㅍ'),
    Some('ㅎ'),
];

/// True for code points inside the precomposed syllable block
pub fn is_syllable(ch: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(ch as u32))
}

/// Builds a syllable from block indices
pub fn compose_indices(initial: usize, medial: usize, last: usize) -> Option<char> {
    if initial >= INITIAL_JAMO.len() || medial >= MEDIAL_JAMO.len() || last >= FINAL_JAMO.len() {
        return None;
    }
    let code = SYLLABLE_BASE
        + initial as u32 * INITIAL_SPAN
        + medial as u32 * FINAL_COUNT
        + last as u32;
    char::from_u32(code)
}

/// Splits a syllable into block indices
pub fn decompose_indices(ch: char) -> Option<(usize, usize, usize)> {
    if !is_syllable(ch) {
        return None;
    }
    let offset = ch as u32 - SYLLABLE_BASE;
    let initial = offset / INITIAL_SPAN;
    let medial = (offset % INITIAL_SPAN) / FINAL_COUNT;
    let last = offset % FINAL_COUNT;
    Some((initial as usize, medial as usize, last as usize))
}

/// Builds a syllable from canonical jamo
pub fn syllable_of(initial: char, medial: char, last: Option<char>) -> Option<char> {
    let i = INITIAL_JAMO.iter().position(|&j| j == initial)?;
    let m = MEDIAL_JAMO.iter().position(|&j| j == medial)?;
    let f = FINAL_JAMO.iter().position(|&j| j == last)?;
    compose_indices(i, m, f)
}

fn slot_text(cluster: Option<Cluster>, fuse: fn(char, char) -> Option<char>) -> String {
    match cluster {
        None => String::new(),
        Some(c) => match c.resolve(fuse) {
            Some(jamo) => jamo.to_string(),
            None => c.raw(),
        },
    }
}

/// Renders a composition as text.
///
/// Without a vowel the bare jamo are returned. Without an initial the
/// resolved vowel and final are concatenated. A pair that has no entry in
/// its fusion table degrades to raw jamo rather than a wrong syllable.
pub fn compose(comp: &Composition) -> String {
    let initial = slot_text(comp.chosung, double_initial);
    let medial = slot_text(comp.jungsung, fuse_vowel);
    let last = slot_text(comp.jongsung, fuse_final);

    if comp.jungsung.is_none() {
        return initial + &last;
    }
    if comp.chosung.is_none() {
        return medial + &last;
    }

    let syllable = match (comp.initial_jamo(), comp.medial_jamo()) {
        (Some(i), Some(m)) => match comp.jongsung {
            None => syllable_of(i, m, None),
            Some(_) => comp.final_jamo().and_then(|f| syllable_of(i, m, Some(f))),
        },
        _ => None,
    };

    match syllable {
        Some(ch) => ch.to_string(),
        None => {
            log::debug!("cannot encode {:?}, falling back to jamo", comp);
            initial + &medial + &last
        }
    }
}

/// Splits a precomposed syllable into an open composition
pub fn decompose(ch: char) -> Option<Composition> {
    let (i, m, f) = decompose_indices(ch)?;
    Some(Composition::from_jamo(
        Some(INITIAL_JAMO[i]),
        Some(MEDIAL_JAMO[m]),
        FINAL_JAMO[f],
    ))
}

/// Decomposes the first character of `text`
pub fn decompose_str(text: &str) -> Result<Composition> {
    let ch = text.chars().next().ok_or(Error::EmptyInput)?;
    decompose(ch).ok_or(Error::InvalidSyllable(ch))
}
