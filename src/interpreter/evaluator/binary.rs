use std::io::Write;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Number,
    },
};

impl<W: Write> Interpreter<W> {
    /// Applies an arithmetic operator to two evaluated operands.
    ///
    /// Two integers stay integers: the operation is checked and division
    /// truncates toward zero. If either side is a float, both are promoted
    /// to `f64`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Errors
    /// - `DivisionByZero` for a zero divisor of either kind.
    /// - `Overflow` when an integer result does not fit in `i64`, or a
    ///   float result is no longer finite.
    ///
    /// # Example
    /// ```
    /// use spl::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Interpreter, value::Number},
    /// };
    ///
    /// type Repl = Interpreter<Vec<u8>>;
    ///
    /// let half = Repl::apply_operator(BinaryOperator::Div,
    ///                                 Number::Integer(3),
    ///                                 Number::Float(2.0),
    ///                                 1);
    /// assert_eq!(half, Ok(Number::Float(1.5)));
    ///
    /// let err = Repl::apply_operator(BinaryOperator::Div,
    ///                                Number::Integer(1),
    ///                                Number::Integer(0),
    ///                                4);
    /// assert_eq!(err, Err(RuntimeError::DivisionByZero { line: 4 }));
    /// ```
    pub fn apply_operator(op: BinaryOperator,
                          left: Number,
                          right: Number,
                          line: usize)
                          -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        match (left, right) {
            (Number::Integer(a), Number::Integer(b)) => {
                let result = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    Div => {
                        if b == 0 {
                            return Err(RuntimeError::DivisionByZero { line });
                        }
                        a.checked_div(b)
                    },
                };
                result.map(Number::Integer)
                      .ok_or(RuntimeError::Overflow { line })
            },
            _ => {
                let (a, b) = (left.as_float(), right.as_float());
                let result = match op {
                    Add => a + b,
                    Sub => a - b,
                    Mul => a * b,
                    Div => {
                        if b == 0.0 {
                            return Err(RuntimeError::DivisionByZero { line });
                        }
                        a / b
                    },
                };
                if !result.is_finite() {
                    return Err(RuntimeError::Overflow { line });
                }
                Ok(Number::Float(result))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Interp = Interpreter<Vec<u8>>;

    #[test]
    fn integer_arithmetic_stays_integral() {
        assert_eq!(Interp::apply_operator(BinaryOperator::Sub, Number::Integer(2), Number::Integer(5), 1),
                   Ok(Number::Integer(-3)));
        assert_eq!(Interp::apply_operator(BinaryOperator::Div, Number::Integer(-7), Number::Integer(2), 1),
                   Ok(Number::Integer(-3)));
    }

    #[test]
    fn mixed_operands_promote_to_float() {
        assert_eq!(Interp::apply_operator(BinaryOperator::Mul, Number::Integer(2), Number::Float(2.5), 1),
                   Ok(Number::Float(5.0)));
        assert_eq!(Interp::apply_operator(BinaryOperator::Add, Number::Float(0.5), Number::Integer(1), 1),
                   Ok(Number::Float(1.5)));
    }

    #[test]
    fn float_division_by_zero_is_rejected() {
        assert_eq!(Interp::apply_operator(BinaryOperator::Div, Number::Integer(1), Number::Float(0.0), 9),
                   Err(RuntimeError::DivisionByZero { line: 9 }));
    }

    #[test]
    fn float_overflow_is_reported() {
        assert_eq!(Interp::apply_operator(BinaryOperator::Mul, Number::Float(f64::MAX), Number::Integer(10), 5),
                   Err(RuntimeError::Overflow { line: 5 }));
        assert_eq!(Interp::apply_operator(BinaryOperator::Sub, Number::Float(-f64::MAX), Number::Float(f64::MAX), 6),
                   Err(RuntimeError::Overflow { line: 6 }));
    }

    #[test]
    fn integer_overflow_is_reported() {
        assert_eq!(Interp::apply_operator(BinaryOperator::Add, Number::Integer(i64::MAX), Number::Integer(1), 2),
                   Err(RuntimeError::Overflow { line: 2 }));
        assert_eq!(Interp::apply_operator(BinaryOperator::Div, Number::Integer(i64::MIN), Number::Integer(-1), 3),
                   Err(RuntimeError::Overflow { line: 3 }));
    }
}
