/// Program entry point and the expression grammar.
///
/// Holds `parse_program` and the precedence levels `expression`, `term` and
/// `factor`.
pub mod core;

/// Statement parsing.
///
/// Assignments, prints, function definitions and calls, returns and bare
/// expression statements.
pub mod statement;

/// Statement lists and braced blocks, including the `;` termination rule.
pub mod block;

/// Small shared helpers such as argument lists.
pub mod utils;
