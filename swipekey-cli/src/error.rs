use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("Unexpected token at byte {position}: '{text}'")]
    UnexpectedToken { position: usize, text: String },

    #[error("Unknown command: <{0}>")]
    UnknownCommand(String),
}
