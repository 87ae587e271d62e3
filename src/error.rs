/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: illegal characters, malformed number literals, missing terminators
/// and every other grammar violation. These are fatal; a program that fails
/// to parse is never evaluated.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// undefined names, arity mismatches and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::{OperandSide, RuntimeError};

/// Any failure of the interpreter pipeline.
///
/// Keeps the fatal tier (`Parse`) distinguishable from the recoverable tier
/// (`Runtime`) so the embedding application can choose how to exit.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Lexing or parsing failed; nothing was executed.
    Parse(ParseError),
    /// Evaluation stopped at a failing statement.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns `true` for lexing and parsing failures.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
