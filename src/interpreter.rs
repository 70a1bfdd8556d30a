/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a vector of
/// tokens, each paired with the line it was found on. Whitespace and `#`
/// comments are dropped here. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Recognizes keywords, identifiers, number and string literals.
/// - Reports unterminated strings and unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one function per precedence
/// tier. It consumes the token vector produced by the lexer and returns a
/// single [`Program`](crate::ast::Program), or the first syntax error.
pub mod parser;
/// Lexical scopes.
///
/// An [`Environment`](environment::Environment) maps names to values and
/// links to the scope it was created in.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values a program can produce and hold: null,
/// numbers, strings, booleans, objects and functions. It also declares the
/// control-flow signals used internally to route `break`, `pass` and
/// `return` through nested bodies.
pub mod value;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST directly, evaluating expressions and
/// executing statements against an environment chain. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every AST node kind.
/// - Routes control-flow signals through loops, branches and calls.
/// - Reports runtime errors such as division by zero or invalid operations.
pub mod evaluator;
