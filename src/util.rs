/// Numeric conversion helpers.
///
/// Converts the interpreter's `f64` numbers to host integer types without
/// silent truncation.
pub mod num;
/// Host stack management for deeply nested evaluation.
pub mod stack;
