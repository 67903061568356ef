use logos::Logos;
use std::fmt;

#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Tabs and stray carriage returns carry no key
    #[regex(r"[\t\r]+", logos::skip)]
    Ignored,

    // Named keys
    #[token("<BS>")]
    Backspace,

    #[token("<SP>")]
    #[token(" ")]
    Space,

    #[token("<CR>")]
    #[regex(r"\r?\n")]
    Newline,

    #[token("<FLUSH>")]
    Flush,

    #[token("<RESET>")]
    Reset,

    // Any other <NAME>; rejected by the lexer wrapper
    #[regex(r"<[A-Za-z]+>", |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    Command(String),

    // One letter is one key press
    #[regex(r"[a-zA-Z]", |lex| lex.slice().chars().next())]
    Key(char),

    // Punctuation, digits and everything else goes straight to the document
    #[regex(r"[^a-zA-Z \t\r\n]", |lex| lex.slice().chars().next())]
    Literal(char),
}

impl Token {
    /// True for tokens that end the word being composed
    pub fn ends_word(&self) -> bool {
        matches!(self, Token::Space | Token::Newline | Token::Literal(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ignored => Ok(()),
            Token::Backspace => write!(f, "<BS>"),
            Token::Space => write!(f, "<SP>"),
            Token::Newline => write!(f, "<CR>"),
            Token::Flush => write!(f, "<FLUSH>"),
            Token::Reset => write!(f, "<RESET>"),
            Token::Command(name) => write!(f, "<{}>", name),
            Token::Key(ch) | Token::Literal(ch) => write!(f, "{}", ch),
        }
    }
}
