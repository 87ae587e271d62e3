use std::io::Write;

use crate::{
    ast::{Expr, FunctionBody, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Number,
    },
};

impl<W: Write> Interpreter<W> {
    /// Evaluates a call to a user-defined function.
    ///
    /// Calls do not get a scope of their own. The current scope's bindings
    /// are saved, each argument is evaluated in turn and bound under its
    /// parameter name in the current scope (so later arguments can see
    /// earlier parameters), the body is evaluated, and the saved bindings
    /// are put back. The restore also happens when the call fails.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    /// - `line`: Line number of the call.
    ///
    /// # Errors
    /// - `UndefinedFunction` if no scope defines `name`.
    /// - `ArityMismatch` if the argument count differs from the parameter
    ///   count.
    /// - `MissingReturn` if a block body finishes without `return`.
    /// - Any failure from the arguments or the body.
    ///
    /// # Example
    /// ```
    /// use spl::{interpreter::evaluator::core::Interpreter, parse};
    ///
    /// let mut program = parse("f(a, b): a + b; a = 10; print f(1, a); print a;").unwrap();
    /// let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    /// interpreter.execute(&mut program).unwrap();
    ///
    /// // `b` is bound after `a` was rebound to 1, and `a` is restored afterwards.
    /// assert_eq!(interpreter.into_output(), b"2\n10\n");
    /// ```
    pub fn call_function(&mut self,
                         name: &str,
                         arguments: &[Expr],
                         line: usize)
                         -> EvalResult<Number> {
        let def = self.scopes
                      .lookup_function(name)
                      .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string(),
                                                                       line })?;

        if def.params.len() != arguments.len() {
            return Err(RuntimeError::ArityMismatch { name: name.to_string(),
                                                     expected: def.params.len(),
                                                     found: arguments.len(),
                                                     line });
        }

        let saved = self.scopes.snapshot();
        let result = self.bind_and_invoke(&def, arguments, line);
        self.scopes.restore(saved);

        result
    }

    fn bind_and_invoke(&mut self,
                       def: &FunctionDef,
                       arguments: &[Expr],
                       line: usize)
                       -> EvalResult<Number> {
        for (param, argument) in def.params.iter().zip(arguments) {
            let value = self.evaluate(argument)?;
            self.scopes.assign(param, value);
        }

        match &def.body {
            FunctionBody::Expression(expr) => self.evaluate(expr),
            FunctionBody::Block(statements) => {
                // The definition stays reusable; each call consumes its own copy.
                let mut body = statements.clone();

                self.scopes.enter();
                let returned = self.run_queue(&mut body);
                self.scopes.exit()?;

                returned?.ok_or_else(|| RuntimeError::MissingReturn { name: def.name.clone(),
                                                                     line })
            },
        }
    }
}
