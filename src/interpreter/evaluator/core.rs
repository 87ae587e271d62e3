use std::io::{self, Write};

use crate::{
    ast::Expr,
    error::{OperandSide, RuntimeError},
    interpreter::{scope::ScopeChain, value::Number},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime state of a running program.
///
/// The interpreter owns the scope chain and the sink that `print` writes to.
/// It is created once and reused for every statement of a program; state
/// carries over between successive calls to
/// [`execute`](Interpreter::execute).
///
/// ## Usage
///
/// `Interpreter::new()` prints to stdout. Any other `Write` implementation,
/// such as a `Vec<u8>` in tests, can be plugged in with
/// [`with_output`](Interpreter::with_output).
pub struct Interpreter<W: Write = io::Stdout> {
    pub(in crate::interpreter::evaluator) scopes: ScopeChain,
    pub(in crate::interpreter::evaluator) out:    W,
}

impl Interpreter<io::Stdout> {
    /// Creates an interpreter that prints to stdout, with an empty root
    /// scope.
    #[must_use]
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for Interpreter<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter that prints to `out`, with an empty root scope.
    pub fn with_output(out: W) -> Self {
        Self { scopes: ScopeChain::new(),
               out }
    }

    /// The live scope chain.
    #[must_use]
    pub const fn scopes(&self) -> &ScopeChain {
        &self.scopes
    }

    /// Consumes the interpreter and hands back its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Evaluates an expression and returns the resulting number.
    ///
    /// Literals evaluate to themselves, identifiers resolve through the
    /// scope chain, binary operations evaluate left before right, and calls
    /// go through [`call_function`](Interpreter::call_function).
    ///
    /// # Errors
    /// - `UndefinedVariable` for an unbound identifier.
    /// - `Operand` wrapping any failure inside a binary operand.
    /// - Arithmetic and call failures.
    ///
    /// # Example
    /// ```
    /// use spl::{
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{evaluator::core::Interpreter, value::Number},
    /// };
    ///
    /// let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    /// let expr = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: Number::Integer(7),
    ///                                                             line:  1, }),
    ///                             op:    BinaryOperator::Div,
    ///                             right: Box::new(Expr::Literal { value: Number::Integer(2),
    ///                                                             line:  1, }),
    ///                             line:  1, };
    ///
    /// assert_eq!(interpreter.evaluate(&expr), Ok(Number::Integer(3)));
    /// ```
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Number> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, line } => {
                self.scopes
                    .lookup(name)
                    .copied()
                    .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone(),
                                                                     line: *line, })
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.evaluate_operand(left, OperandSide::Left)?;
                let right = self.evaluate_operand(right, OperandSide::Right)?;
                Self::apply_operator(*op, left, right, *line)
            },
            Expr::FunctionCall { name,
                                 arguments,
                                 line, } => self.call_function(name, arguments, *line),
        }
    }

    fn evaluate_operand(&mut self, expr: &Expr, side: OperandSide) -> EvalResult<Number> {
        self.evaluate(expr)
            .map_err(|source| RuntimeError::Operand { side,
                                                      source: Box::new(source) })
    }
}
