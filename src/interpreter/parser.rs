/// Parser entry points.
///
/// Turns source text into a [`Program`](crate::ast::Program) and holds the
/// assignment and object-literal tiers of the expression grammar.
pub mod core;

/// Statement parsing.
///
/// Declarations, control constructs and the `break`/`pass`/`return`
/// statements.
pub mod statement;

/// Brace-delimited statement lists shared by functions, branches and loops.
pub mod block;

/// Binary operator parsing.
///
/// The `or`, `and`, comparison, additive and multiplicative tiers.
pub mod binary;

/// Prefix operators, member/call chains and primary expressions.
pub mod unary;

/// Small token-stream helpers used by the other parser modules.
pub mod utils;
