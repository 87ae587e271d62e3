use std::fmt;

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{parser::core::ParseResult, value::Number},
};

/// Represents a lexical token in the source input.
///
/// Most variants are produced directly by the derived `logos` lexer.
/// `Function` and `EndOfInput` are produced by [`Tokenizer`], which adds the
/// one-character lookahead and the end-of-input marker on top of it.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", lex_number)]
    Number(Number),
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; variable names such as `x` or `total2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// An identifier immediately followed by `(`, such as `avg` in `avg(1, 2)`.
    Function(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Line feeds only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// Marks the end of the input. Returned indefinitely once reached.
    EndOfInput,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "'{n}'"),
            Self::Identifier(name) | Self::Function(name) => write!(f, "'{name}'"),
            Self::Print => write!(f, "'print'"),
            Self::Return => write!(f, "'return'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Equals => write!(f, "'='"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::Comma => write!(f, "','"),
            Self::Colon => write!(f, "':'"),
            Self::Semicolon => write!(f, "';'"),
            Self::NewLine => write!(f, "new line"),
            Self::Ignored => write!(f, "whitespace"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// What went wrong inside the derived lexer.
///
/// The default variant is what `logos` reports for input that matches no
/// token. [`Tokenizer`] turns these into [`ParseError`]s with context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token starts with the current character.
    #[default]
    IllegalCharacter,
    /// A number literal is directly followed by another `.`.
    MultipleDecimalPoints,
    /// The literal text could not be classified as a number.
    InvalidNumber,
}

/// Scans a number literal and classifies it as integer or float.
///
/// The regex admits at most one decimal point, so a `.` right after the
/// match means the source literal had a second one.
fn lex_number(lex: &mut logos::Lexer<Token>) -> Result<Number, LexErrorKind> {
    if lex.remainder().starts_with('.') {
        return Err(LexErrorKind::MultipleDecimalPoints);
    }
    Number::parse(lex.slice(), lex.extras.line).map_err(|_| LexErrorKind::InvalidNumber)
}

/// Cursor over source text that yields one token per call.
///
/// # Example
/// ```
/// use spl::interpreter::{lexer::{Token, Tokenizer}, value::Number};
///
/// let mut tokenizer = Tokenizer::new("avg(x) print");
///
/// assert_eq!(tokenizer.next_token().unwrap().0, Token::Function("avg".into()));
/// assert_eq!(tokenizer.next_token().unwrap().0, Token::LParen);
/// assert_eq!(tokenizer.next_token().unwrap().0, Token::Identifier("x".into()));
/// assert_eq!(tokenizer.next_token().unwrap().0, Token::RParen);
/// assert_eq!(tokenizer.next_token().unwrap().0, Token::Print);
/// assert_eq!(tokenizer.next_token().unwrap().0, Token::EndOfInput);
/// assert_eq!(tokenizer.next_token().unwrap().0, Token::EndOfInput);
/// ```
pub struct Tokenizer<'src> {
    lexer: logos::Lexer<'src, Token>,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer: Token::lexer_with_extras(source, LexerExtras { line: 1 }), }
    }

    /// The line the cursor is currently on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.lexer.extras.line
    }

    /// Returns the next token together with the line it starts on.
    ///
    /// Whitespace is skipped first. A word directly followed by `(` becomes
    /// a `Token::Function`, even when it is spelled like a keyword. Once the
    /// input is exhausted, every call returns `Token::EndOfInput`.
    ///
    /// # Errors
    /// - `ParseError::IllegalCharacter` for a character that starts no token.
    /// - `ParseError::MultipleDecimalPoints` for literals such as `1.2.3`.
    pub fn next_token(&mut self) -> ParseResult<(Token, usize)> {
        let Some(result) = self.lexer.next() else {
            return Ok((Token::EndOfInput, self.line()));
        };
        let line = self.line();

        match result {
            Ok(Token::Identifier(_) | Token::Print | Token::Return)
                if self.lexer.remainder().starts_with('(') =>
            {
                Ok((Token::Function(self.lexer.slice().to_string()), line))
            },
            Ok(token) => Ok((token, line)),
            Err(LexErrorKind::IllegalCharacter) => {
                Err(ParseError::IllegalCharacter { character: self.lexer
                                                                   .slice()
                                                                   .chars()
                                                                   .next()
                                                                   .unwrap_or_default(),
                                                   line })
            },
            Err(LexErrorKind::MultipleDecimalPoints) => {
                Err(ParseError::MultipleDecimalPoints { literal: self.lexer.slice().to_string(),
                                                        line })
            },
            Err(LexErrorKind::InvalidNumber) => {
                Err(ParseError::InvalidNumber { literal: self.lexer.slice().to_string(),
                                                line })
            },
        }
    }
}

/// Tokenizes a whole source text.
///
/// The returned sequence always ends with exactly one `Token::EndOfInput`.
/// Each token is paired with its source line.
///
/// # Errors
/// Returns the first lexing failure; no partial sequence is produced.
///
/// # Example
/// ```
/// use spl::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1;\ny = x;").unwrap();
///
/// assert_eq!(tokens.len(), 9);
/// assert_eq!(tokens[4], (Token::Identifier("y".into()), 2));
/// assert_eq!(tokens.last().unwrap().0, Token::EndOfInput);
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();

    loop {
        let (token, line) = tokenizer.next_token()?;
        let done = token == Token::EndOfInput;
        tokens.push((token, line));
        if done {
            return Ok(tokens);
        }
    }
}
