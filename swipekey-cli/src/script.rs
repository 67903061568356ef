//! Key-script replay
//!
//! Plays a lexed script against an [`InputSession`] the way a keyboard
//! extension would, keeping a stand-in for the host's text field.

use log::{debug, warn};
use swipekey_core::{InputSession, KeyCode, KeyOutcome, SessionState};

use crate::lexer::{Lexer, Token};
use crate::ScriptError;

/// Host text after one token
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    pub token: Token,
    pub state: SessionState,
    /// Finished words plus the session display
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptOutput {
    pub text: String,
    pub trace: Vec<TraceStep>,
}

/// Drives a session and owns the document it types into
#[derive(Debug, Default)]
pub struct ScriptRunner {
    session: InputSession,
    /// Text already handed to the host
    document: String,
    trace: Vec<TraceStep>,
    record: bool,
}

impl ScriptRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a [`TraceStep`] for every applied token
    pub fn with_trace(mut self) -> Self {
        self.record = true;
        self
    }

    pub fn apply(&mut self, token: &Token) {
        match token {
            Token::Key(ch) => match self.session.push_key(KeyCode(*ch)) {
                Ok(KeyOutcome::Dropped) => debug!("'{}' dropped by the engine", ch),
                Ok(KeyOutcome::Composed) => {}
                Err(e) => {
                    debug!("{}, typing it verbatim", e);
                    self.end_word();
                    self.document.push(*ch);
                }
            },
            Token::Backspace => {
                if self.session.backspace().is_none() {
                    self.document.pop();
                }
            }
            Token::Space => {
                self.end_word();
                self.document.push(' ');
            }
            Token::Newline => {
                self.end_word();
                self.document.push('\n');
            }
            Token::Literal(ch) => {
                self.end_word();
                self.document.push(*ch);
            }
            Token::Flush => self.session.flush(),
            Token::Reset => self.session.reset(),
            Token::Command(name) => warn!("ignoring unknown command <{}>", name),
            Token::Ignored => {}
        }

        if self.record {
            self.trace.push(TraceStep {
                token: token.clone(),
                state: self.session.state(),
                text: self.text(),
            });
        }
    }

    /// Text the host would currently show
    pub fn text(&self) -> String {
        format!("{}{}", self.document, self.session.state().display)
    }

    pub fn session(&self) -> &InputSession {
        &self.session
    }

    /// Commits the open word and returns the final document
    pub fn finish(mut self) -> ScriptOutput {
        self.end_word();
        ScriptOutput {
            text: self.document,
            trace: self.trace,
        }
    }

    fn end_word(&mut self) {
        let word = self.session.commit();
        self.document.push_str(&word);
    }
}

/// Lexes and plays `script`, returning the final document
pub fn run_script(script: &str, trace: bool) -> Result<ScriptOutput, ScriptError> {
    let tokens = Lexer::new(script).collect_all()?;
    debug!("playing {} token(s)", tokens.len());

    let mut runner = ScriptRunner::new();
    if trace {
        runner = runner.with_trace();
    }
    for token in &tokens {
        runner.apply(token);
    }
    Ok(runner.finish())
}
