use std::{collections::VecDeque, io::Write, rc::Rc};

use crate::{
    ast::{Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Number,
    },
};

impl<W: Write> Interpreter<W> {
    /// Executes a program, consuming its statements front to back.
    ///
    /// Statements that ran successfully are removed from the program. When a
    /// statement fails it stays at the front of the queue and its error is
    /// returned; everything after it is left unexecuted.
    ///
    /// # Example
    /// ```
    /// use spl::{interpreter::evaluator::core::Interpreter, parse};
    ///
    /// let mut program = parse("x = 2; print x * 3;").unwrap();
    /// let mut interpreter = Interpreter::with_output(Vec::<u8>::new());
    ///
    /// interpreter.execute(&mut program).unwrap();
    ///
    /// assert!(program.is_empty());
    /// assert_eq!(interpreter.into_output(), b"6\n");
    /// ```
    pub fn execute(&mut self, program: &mut Program) -> EvalResult<()> {
        self.run_queue(&mut program.statements)?;
        Ok(())
    }

    /// Runs a statement queue until it is empty or a `return` fires.
    ///
    /// # Returns
    /// `Some(value)` when a `return` statement was executed, `None` when the
    /// queue ran out.
    pub(in crate::interpreter::evaluator) fn run_queue(&mut self,
                                                        queue: &mut VecDeque<Statement>)
                                                        -> EvalResult<Option<Number>> {
        while let Some(statement) = queue.front_mut() {
            let returned = self.execute_statement(statement)?;
            queue.pop_front();

            if returned.is_some() {
                return Ok(returned);
            }
        }
        Ok(None)
    }

    /// Executes a single statement.
    ///
    /// Assignments bind in the current scope, definitions register in the
    /// current scope's function table, and blocks run inside a child scope
    /// that is dropped again even if the block fails.
    ///
    /// # Returns
    /// `Some(value)` only for a `return` statement, including one reached
    /// inside a nested block.
    fn execute_statement(&mut self, statement: &mut Statement) -> EvalResult<Option<Number>> {
        match statement {
            Statement::Assignment { name, value, .. } => {
                let value = self.evaluate(value)?;
                self.scopes.assign(name, value);
                Ok(None)
            },
            Statement::Print { expr: Some(expr),
                               line, } => {
                let value = self.evaluate(expr)?;
                writeln!(self.out, "{value}").map_err(|e| output_error(&e, *line))?;
                Ok(None)
            },
            Statement::Print { expr: None, line } => {
                for (name, value) in self.scopes.bindings() {
                    writeln!(self.out, "{name}: {value}").map_err(|e| output_error(&e, *line))?;
                }
                Ok(None)
            },
            Statement::FunctionDefinition(def) => {
                self.scopes.assign_function(Rc::clone(def));
                Ok(None)
            },
            Statement::Block { statements, .. } => {
                self.scopes.enter();
                let result = self.run_queue(statements);
                self.scopes.exit()?;
                result
            },
            Statement::Return { value, .. } => self.evaluate(value).map(Some),
            Statement::Expression { expr, .. } => {
                self.evaluate(expr)?;
                Ok(None)
            },
        }
    }
}

fn output_error(e: &std::io::Error, line: usize) -> RuntimeError {
    RuntimeError::Output { details: e.to_string(),
                           line }
}
