pub mod error;
pub mod lexer;
pub mod script;

pub use error::ScriptError;
pub use script::{run_script, ScriptOutput, ScriptRunner, TraceStep};
