/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator consumes statement queues, evaluates expressions, performs
/// arithmetic, manages the scope chain across blocks and function calls, and
/// writes printed output.
///
/// # Responsibilities
/// - Executes statements and evaluates expressions.
/// - Handles user-defined functions and nested blocks.
/// - Reports runtime errors such as division by zero or undefined names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// tagged with the line it starts on. Identifiers immediately followed by `(`
/// come out as function identifiers.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Classifies number literals as integers or floats.
/// - Reports lexical errors for illegal characters and malformed numbers.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser over the token stream. It enforces operator
/// precedence, statement termination and the placement rules for `return`.
pub mod parser;
/// Binding environments for variables and functions.
///
/// A stack of scopes searched from the innermost outward, with the root
/// scope at the bottom.
pub mod scope;
/// The value module defines the runtime number type.
///
/// Every runtime value is an integer or a float. This module holds their
/// classification from literal text, promotion and output format.
pub mod value;
