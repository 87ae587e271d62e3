use std::fmt;

/// Which side of a binary operation an operand failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSide {
    /// The left-hand operand.
    Left,
    /// The right-hand operand.
    Right,
}

impl fmt::Display for OperandSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation and runtime.
///
/// Runtime errors halt the statement queue being executed but are returned
/// to the caller rather than terminating the process.
pub enum RuntimeError {
    /// Tried to use an undefined variable.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called an unknown function.
    UndefinedFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operand was not a number.
    InvalidOperands {
        /// Details about the rejected operand.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An operator symbol outside `+ - * /`.
    UnknownOperator {
        /// The operator symbol.
        operator: char,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An arithmetic result does not fit its number type.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function with a block body finished without reaching `return`.
    MissingReturn {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to leave the root scope.
    ExitRootScope,
    /// Writing printed output failed.
    Output {
        /// Description of the I/O failure.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Evaluating one operand of a binary operation failed.
    Operand {
        /// The operand that failed.
        side:   OperandSide,
        /// The failure itself.
        source: Box<RuntimeError>,
    },
}

impl RuntimeError {
    /// Unwraps `Operand` layers and returns the error that actually occurred.
    ///
    /// # Example
    /// ```
    /// use spl::error::{OperandSide, RuntimeError};
    ///
    /// let inner = RuntimeError::DivisionByZero { line: 3 };
    /// let wrapped = RuntimeError::Operand { side:   OperandSide::Left,
    ///                                       source: Box::new(inner.clone()), };
    ///
    /// assert_eq!(wrapped.root_cause(), &inner);
    /// ```
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        let mut error = self;
        while let Self::Operand { source, .. } = error {
            error = source;
        }
        error
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is not defined.")
            },
            Self::UndefinedFunction { name, line } => {
                write!(f, "Error on line {line}: Function '{name}' is not defined.")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  line, } => write!(f,
                                                    "Error on line {line}: Function '{name}' takes {expected} argument(s) but {found} were given."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::InvalidOperands { details, line } => {
                write!(f, "Error on line {line}: Invalid operands: {details}.")
            },
            Self::UnknownOperator { operator, line } => {
                write!(f, "Error on line {line}: Unknown operator '{operator}'.")
            },
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Numeric overflow while trying to compute result."),
            Self::MissingReturn { name, line } => write!(f,
                                                         "Error on line {line}: Function '{name}' finished without returning a value."),
            Self::ExitRootScope => write!(f, "Error: Attempt to exit the global scope."),
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
            Self::Operand { side, source } => write!(f, "{source} (in {side} operand)"),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Operand { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
