/// Core evaluation logic and the interpreter state.
///
/// Contains the `Interpreter` itself, the output sink and expression
/// evaluation with operand error wrapping.
pub mod core;

/// Statement execution.
///
/// Consumes statement queues front to back, manages block scopes and writes
/// printed output.
pub mod statement;

/// Binary operator evaluation logic.
///
/// Integer and float arithmetic for `+ - * /`, with promotion, checked
/// integer overflow and division-by-zero detection.
pub mod binary;

/// Function evaluation.
///
/// Handles user-defined function calls: lookup, arity checking, argument
/// binding and restoring the caller's bindings afterwards.
pub mod function;
