//! # spl
//!
//! spl is an interpreter for a small arithmetic scripting language written in
//! Rust. Programs are made of assignments, `print` statements, function
//! definitions and calls, and nested blocks, over integer and floating-point
//! numbers.
//!
//! ```text
//! avg(a, b): (a + b) / 2.0;
//! x = 3;
//! { y = avg(x, 4); print y; }
//! print;
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Program,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Interpreter, lexer::tokenize, parser::core::parse_program},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent the syntactic structure of a program as a tree. The AST is
/// built by the parser and consumed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. Parse errors are fatal; runtime errors stop the
/// program at the failing statement.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, values and evaluation
/// to provide a complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, scopes and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Tokenizes and parses a program without running it.
///
/// # Example
/// ```
/// use spl::{error::ParseError, parse};
///
/// assert_eq!(parse("x = 1; print x;").unwrap().len(), 2);
/// assert!(matches!(parse("x = 1"), Err(ParseError::MissingTerminator { .. })));
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    parse_program(&tokens)
}

/// Runs a program, printing to stdout.
///
/// # Errors
/// Returns `Error::Parse` if the program is rejected before anything runs,
/// or `Error::Runtime` for the statement that failed.
///
/// # Examples
/// ```
/// use spl::run;
///
/// assert!(run("x = 2 + 2; print x;").is_ok());
///
/// // 'y' is not defined
/// let err = run("x = y + 1;").unwrap_err();
/// assert!(!err.is_fatal());
/// ```
pub fn run(source: &str) -> Result<(), Error> {
    let mut program = parse(source)?;
    Interpreter::new().execute(&mut program)?;
    Ok(())
}

/// Runs a program, writing printed lines to `out`.
///
/// Output written before a runtime failure stays in `out`.
///
/// # Example
/// ```
/// use spl::run_with_output;
///
/// let mut out = Vec::new();
/// run_with_output("a = 7 / 2; b = 7 / 2.0; print;", &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "a: 3\nb: 3.5\n");
/// ```
pub fn run_with_output<W: Write>(source: &str, out: &mut W) -> Result<(), Error> {
    let mut program = parse(source)?;
    Interpreter::with_output(out).execute(&mut program)?;
    Ok(())
}
