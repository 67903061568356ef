//! Swipekey Engine - Hangul composition
//!
//! The automaton turns a queue of key codes into syllables one pass at a
//! time; the session sequences those passes into committed and composing
//! text for the current word.

pub mod automaton;
mod composition;
mod output;
mod session;
mod state;

pub use automaton::{step, Step};
pub use composition::{Cluster, Composition};
pub use output::{KeyOutcome, SessionState};
pub use session::InputSession;
pub use state::{KeyHistory, PendingKeys};

// Re-export error types
pub use crate::error::{Error, Result};
