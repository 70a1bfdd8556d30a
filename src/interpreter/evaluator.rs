/// Core evaluation logic and context management.
///
/// Contains the evaluation context, the expression dispatcher and statement
/// execution.
pub mod core;

/// Statement-list execution.
///
/// Runs bodies of programs, functions, branches and loops, and routes the
/// `break`, `pass` and `return` signals according to the body's kind.
pub mod body;

/// Binary operator evaluation logic.
///
/// Arithmetic, comparisons and the boolean connectives.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Logical NOT and the in-place `++` / `--` operators.
pub mod unary;

/// Evaluation of `while` and `for` loops.
pub mod loops;

/// Utility functions for evaluation.
///
/// Identifiers, assignments, object literals, member access and `if`
/// statements.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and native function calls and defines the native
/// function table.
pub mod function;
