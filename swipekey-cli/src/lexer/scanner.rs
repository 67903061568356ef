use logos::{Lexer as LogosLexer, Logos};

use super::Token;
use crate::ScriptError;

/// A token with its byte offset in the script
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
    pub input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
            input,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Spanned>, ScriptError> {
        match self.inner.next() {
            Some(Ok(Token::Command(name))) => Err(ScriptError::UnknownCommand(name)),
            Some(Ok(token)) => Ok(Some(Spanned {
                token,
                position: self.inner.span().start,
            })),
            Some(Err(_)) => {
                let span = self.inner.span();
                Err(ScriptError::UnexpectedToken {
                    position: span.start,
                    text: self.input[span.start..span.end].to_string(),
                })
            }
            None => Ok(None),
        }
    }

    pub fn collect_all(mut self) -> Result<Vec<Token>, ScriptError> {
        let mut tokens = Vec::new();
        while let Some(spanned) = self.next_token()? {
            tokens.push(spanned.token);
        }
        Ok(tokens)
    }
}
