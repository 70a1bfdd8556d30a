/// Arithmetic operators and the binary dispatcher.
pub mod core;
/// Ordering and equality comparisons.
pub mod comparison;
/// The `and` / `or` connectives.
pub mod logic;
