use std::fmt;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// A runtime value.
///
/// Every value in the language is a number. Whether it is an integer or a
/// float is decided once, when a literal is scanned or when an arithmetic
/// result is produced, and carried along from then on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point number.
    Float(f64),
}

impl Number {
    /// Classifies decimal text as a number.
    ///
    /// An integer parse is attempted first and a float parse second, so
    /// `"42"` is an integer, `"4.2"` and `"2."` are floats, and an integer
    /// literal too large for `i64` falls back to a float.
    ///
    /// # Errors
    /// Returns `RuntimeError::InvalidOperands` if the text is neither, or if
    /// it is too large even for an `f64`.
    ///
    /// # Example
    /// ```
    /// use spl::interpreter::value::Number;
    ///
    /// assert_eq!(Number::parse("42", 1).unwrap(), Number::Integer(42));
    /// assert_eq!(Number::parse("2.", 1).unwrap(), Number::Float(2.0));
    /// assert!(Number::parse("two", 1).is_err());
    /// assert!(Number::parse(&"9".repeat(400), 1).is_err());
    /// ```
    pub fn parse(text: &str, line: usize) -> EvalResult<Self> {
        if let Ok(n) = text.parse::<i64>() {
            return Ok(Self::Integer(n));
        }
        match text.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Self::Float(x)),
            Ok(_) => Err(RuntimeError::InvalidOperands { details: format!("'{text}' is out of range"),
                                                         line }),
            Err(_) => Err(RuntimeError::InvalidOperands { details: format!("'{text}' is not a number"),
                                                          line }),
        }
    }

    /// Returns the value as an `f64`, promoting integers.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_float(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Float(x) => x,
        }
    }
}

/// Integers print plainly. Integral floats print with exactly one
/// fractional digit, other floats with the shortest round-trip digits.
///
/// ```
/// use spl::interpreter::value::Number;
///
/// assert_eq!(Number::Integer(-7).to_string(), "-7");
/// assert_eq!(Number::Float(6.0).to_string(), "6.0");
/// assert_eq!(Number::Float(6.5).to_string(), "6.5");
/// assert_eq!(Number::Float(0.1 + 0.2).to_string(), "0.30000000000000004");
/// ```
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}
