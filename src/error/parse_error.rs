#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant is fatal: the program is rejected as a whole and nothing is
/// evaluated.
pub enum ParseError {
    /// A character that starts no token.
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A number literal followed by a second decimal point, as in `1.2.3`.
    MultipleDecimalPoints {
        /// The literal scanned before the second point.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A number literal that could not be classified.
    InvalidNumber {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A statement was not followed by `;`.
    MissingTerminator {
        /// Kind of the statement that was left unterminated.
        statement: &'static str,
        /// The token found instead.
        found:     String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A `(` without its closing `)`.
    UnmatchedParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function definition listed something other than an identifier as a
    /// parameter.
    NonIdentifierParameter {
        /// The function being defined.
        function: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No factor rule matches the current token.
    ExpectedFactor {
        /// The token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// No statement rule matches the current token.
    ExpectedStatement {
        /// The token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `return` used outside a function body.
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The input ended inside a `{ ... }` block.
    UnclosedBlock {
        /// The line of the opening brace.
        line: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// Description of what was expected and what was found.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, line } => {
                write!(f, "Error on line {line}: Illegal character '{character}'.")
            },
            Self::MultipleDecimalPoints { literal, line } => write!(f,
                                                                    "Error on line {line}: Number literal '{literal}' is followed by a second decimal point."),
            Self::InvalidNumber { literal, line } => {
                write!(f, "Error on line {line}: Invalid number literal '{literal}'.")
            },
            Self::MissingTerminator { statement, found, line } => write!(f,
                                                                         "Error on line {line}: Expected terminator ';' after {statement}, found {found}."),
            Self::UnmatchedParen { line } => write!(f,
                                                    "Error on line {line}: Expected closing parenthesis ')' but none found."),
            Self::NonIdentifierParameter { function, line } => write!(f,
                                                                      "Error on line {line}: Parameters of '{function}' must be identifiers, not expressions."),
            Self::ExpectedFactor { found, line } => {
                write!(f, "Error on line {line}: Expected factor, found {found}.")
            },
            Self::ExpectedStatement { found, line } => {
                write!(f, "Error on line {line}: Expected statement, found {found}.")
            },
            Self::ReturnOutsideFunction { line } => write!(f,
                                                           "Error on line {line}: 'return' is only allowed inside a function body."),
            Self::UnclosedBlock { line } => {
                write!(f, "Error on line {line}: Block opened here is never closed.")
            },
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
