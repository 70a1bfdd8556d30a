/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include unrecognized characters, unterminated strings,
/// unexpected tokens and malformed constructs detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution:
/// scope violations, type mismatches, misplaced control-flow statements,
/// division by zero and resource exhaustion.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running a program.
///
/// This is what [`crate::run_source`] and [`crate::Session::run`] return, so
/// callers can report parse and runtime failures uniformly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source failed to tokenize or parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The program failed while being evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
