pub mod error;
pub mod keyboard;
pub mod unicode;
pub mod engine;
pub mod ffi;

// Re-export commonly used types
pub use error::{Error, Result};
pub use keyboard::{KeyCode, KeyKind};
pub use engine::{Cluster, Composition, InputSession, KeyOutcome, SessionState};
pub use unicode::{compose, decompose, decompose_str};
