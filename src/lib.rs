//! # laika
//!
//! LAIka is a small dynamically typed scripting language with a tree-walking
//! interpreter written in Rust. It has numbers, strings, booleans, objects,
//! first-class functions with closures, `while`/`for` loops and
//! `break`/`pass`/`return` control flow.
//!
//! ```
//! use laika::{Outcome, Session, interpreter::value::core::RuntimeValue};
//!
//! let mut session = Session::new();
//! session.run("fn square(x) { return x * x; }").unwrap();
//!
//! let result = session.run("square(7)").unwrap();
//! assert_eq!(result, Outcome::Value(RuntimeValue::Number(49.0)));
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

use crate::{
    error::{Error, RuntimeError},
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::Context,
        value::core::RuntimeValue,
    },
    util::num::f64_to_exit_status,
};

pub use crate::interpreter::parser::core::parse_program;

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Defines the operator enums shared by the parser and evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. Parse errors carry the line they occurred on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Wraps both in one crate-level [`Error`](error::Error).
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scoping, values and evaluation
/// to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment, evaluator
///   and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities.
///
/// Safe numeric conversions and host stack management used by several
/// modules.
pub mod util;

/// What running a program produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The value of the last top-level statement (Null for an empty
    /// program).
    Value(RuntimeValue),
    /// A top-level `return` asked to end the program with this exit status.
    Exit(i32),
}

/// A persistent interpreter.
///
/// Every call to [`Session::run`] executes in the same global scope, so
/// declarations made by one input are visible to the next. This is what the
/// REPL uses.
pub struct Session {
    env:     Env,
    context: Context,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with a fresh global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { env:     Environment::global(),
               context: Context::new(), }
    }

    /// The global scope of this session.
    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    /// Parses and executes `source` in this session.
    ///
    /// # Returns
    /// - `Outcome::Value` with the value of the last statement.
    /// - `Outcome::Exit` when a top-level `return` yields a valid exit
    ///   status.
    ///
    /// # Errors
    /// Returns an error if parsing or evaluation fails, or if a top-level
    /// `return` yields something other than an integral Number in the `i32`
    /// range. Bindings declared before the failure remain in the session.
    ///
    /// # Examples
    /// ```
    /// use laika::{Outcome, Session};
    ///
    /// let mut session = Session::new();
    /// assert!(session.run("mut x = 1").is_ok());
    ///
    /// // 'x' already exists in the global scope.
    /// assert!(session.run("mut x = 2").is_err());
    ///
    /// assert_eq!(session.run("return x + 1").unwrap(), Outcome::Exit(2));
    /// ```
    pub fn run(&mut self, source: &str) -> Result<Outcome, Error> {
        let program = parse_program(source)?;
        tracing::debug!(statements = program.body.len(), "program parsed");

        match self.context.eval_program(&program, &self.env)? {
            RuntimeValue::Return(value) => match *value {
                RuntimeValue::Number(n) => Ok(Outcome::Exit(f64_to_exit_status(n)?)),
                other => {
                    Err(RuntimeError::ReturnOutsideFunction { type_name: other.type_name() }.into())
                },
            },
            value => Ok(Outcome::Value(value)),
        }
    }
}

impl Drop for Session {
    /// Frees the global scope along with the closures that refer back to it.
    fn drop(&mut self) {
        Environment::release(std::mem::replace(&mut self.env, Environment::new(None)));
    }
}

/// Runs `source` once in a fresh interpreter.
///
/// # Errors
/// Returns an error if parsing or evaluation fails; see [`Session::run`].
///
/// # Examples
/// ```
/// use laika::{Outcome, error::{Error, RuntimeError}, interpreter::value::core::RuntimeValue, run_source};
///
/// let result = run_source("1 + 2 * 3").unwrap();
/// assert_eq!(result, Outcome::Value(RuntimeValue::Number(7.0)));
///
/// // Arithmetic on non-numbers is lenient.
/// let result = run_source("1 + \"a\"").unwrap();
/// assert_eq!(result, Outcome::Value(RuntimeValue::Null));
///
/// let err = run_source("1 / 0").unwrap_err();
/// assert!(matches!(err, Error::Runtime(RuntimeError::DivisionByZero)));
/// ```
pub fn run_source(source: &str) -> Result<Outcome, Error> {
    Session::new().run(source)
}
