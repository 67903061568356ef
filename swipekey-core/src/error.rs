//! Error types for the Swipekey engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unrecognized key: {0:?}")]
    UnrecognizedKey(char),

    #[error("Not a precomposed Hangul syllable: {0:?}")]
    InvalidSyllable(char),

    #[error("Empty input")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, Error>;
