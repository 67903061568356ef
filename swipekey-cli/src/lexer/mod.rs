mod scanner;
mod token;

pub use scanner::{Lexer, Spanned};
pub use token::Token;
