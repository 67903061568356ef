//! Jamo composition automaton
//!
//! A single pass reads pending keys from the front and builds at most one
//! syllable. The pass stops as soon as the syllable is complete; the key
//! that forced completion is not consumed and opens the next pass.

use log::trace;

use super::composition::{Cluster, Composition};
use crate::keyboard::{
    classify, double_initial, final_jamo, fuse_final, fuse_vowel, initial_jamo, medial_jamo,
    KeyCode, KeyKind,
};

/// Result of one automaton pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// The syllable built by this pass
    pub composition: Composition,
    /// Keys the caller must pop from the front of the buffer.
    ///
    /// Zero while the composition is still open.
    pub consumed: usize,
}

impl Step {
    pub fn is_complete(&self) -> bool {
        self.composition.complete
    }
}

/// Runs one pass over `keys`.
///
/// Keys beyond `consumed` are never looked at as part of the finished
/// syllable; they stay queued for the next pass. Dropped keys count as
/// consumed, so callers should keep ㄸ/ㅃ/ㅉ keys that follow a vowel out of
/// the buffer when exact positions matter.
pub fn step<I>(keys: I) -> Step
where
    I: IntoIterator<Item = KeyCode>,
{
    let mut comp = Composition::default();

    for key in keys {
        match classify(key) {
            KeyKind::Medial => {
                if let Some(jamo) = medial_jamo(key) {
                    trace!("'{}' -> medial {}", key, jamo);
                    apply_medial(&mut comp, jamo);
                }
            }
            KeyKind::Initial | KeyKind::Final if comp.jungsung.is_none() => {
                if let Some(jamo) = initial_jamo(key) {
                    trace!("'{}' -> initial {}", key, jamo);
                    apply_chosung(&mut comp, jamo);
                }
            }
            KeyKind::Initial | KeyKind::Final => match final_jamo(key) {
                Some(jamo) => {
                    trace!("'{}' -> final {}", key, jamo);
                    apply_jongsung(&mut comp, jamo);
                }
                None => {
                    trace!("'{}' has no final form, dropped", key);
                    comp.dropped += 1;
                }
            },
            KeyKind::Unrecognized => {
                trace!("'{}' is not a layout key, skipped", key);
                comp.dropped += 1;
            }
        }

        if comp.complete {
            break;
        }
    }

    let consumed = if comp.complete { comp.consumed() } else { 0 };
    if comp.complete {
        trace!("syllable complete, {} key(s) consumed", consumed);
    }

    Step {
        composition: comp,
        consumed,
    }
}

/// Initial slot. Doubling is the only way to revise a held initial.
fn apply_chosung(comp: &mut Composition, jamo: char) {
    match comp.chosung {
        None => comp.chosung = Some(Cluster::Single(jamo)),
        Some(Cluster::Single(held)) if double_initial(held, jamo).is_some() => {
            comp.chosung = Some(Cluster::Pair(held, jamo));
        }
        Some(_) => comp.complete = true,
    }
}

fn apply_medial(comp: &mut Composition, jamo: char) {
    match (comp.jungsung, comp.jongsung) {
        (None, _) => comp.jungsung = Some(Cluster::Single(jamo)),
        (Some(_), Some(jong)) => {
            // The final moves to the syllable this vowel starts. A compound
            // keeps its first jamo; the released keys stay in the buffer.
            trace!("re-syllabifying final {}", jong.raw());
            comp.jongsung = match jong {
                Cluster::Pair(first, _) => Some(Cluster::Single(first)),
                Cluster::Single(_) => None,
            };
            comp.complete = true;
        }
        (Some(Cluster::Single(held)), None) if fuse_vowel(held, jamo).is_some() => {
            comp.jungsung = Some(Cluster::Pair(held, jamo));
        }
        (Some(_), None) => comp.complete = true,
    }
}

fn apply_jongsung(comp: &mut Composition, jamo: char) {
    match comp.jongsung {
        None => comp.jongsung = Some(Cluster::Single(jamo)),
        Some(Cluster::Single(held)) if fuse_final(held, jamo).is_some() => {
            comp.jongsung = Some(Cluster::Pair(held, jamo));
        }
        Some(_) => comp.complete = true,
    }
}
