/// Represents all errors that can occur during evaluation and runtime.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to declare a name that already exists in the same scope.
    #[error("Cannot declare variable '{name}', as it already exists.")]
    Redeclaration {
        /// The name of the variable.
        name: String,
    },
    /// A name could not be resolved in any enclosing scope.
    #[error("Cannot resolve '{name}' in the current scope.")]
    UnresolvedName {
        /// The name of the variable.
        name: String,
    },
    /// Tried to assign to a binding declared with `keep`.
    #[error("Cannot reassign to constant variable '{name}'.")]
    ConstantReassignment {
        /// The name of the constant.
        name: String,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Type error: {details}.")]
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// Tried to call something that is neither a function nor a native.
    #[error("Cannot call value that is not a function: {type_name}.")]
    NotCallable {
        /// Type of the callee.
        type_name: &'static str,
    },
    /// The left side of `=` is not an identifier.
    #[error("Cannot assign value to element of kind {kind}.")]
    InvalidAssignmentTarget {
        /// The AST kind of the assignee.
        kind: &'static str,
    },
    /// Asked for the truthiness of a value that has none.
    #[error("Element of type {type_name} does not have a logical value.")]
    NoTruthValue {
        /// Type of the value.
        type_name: &'static str,
    },
    /// `break` or `pass` executed outside of any loop body.
    #[error("Cannot use {keyword} statement in non-loop body.")]
    BreakOutsideLoop {
        /// `break` or `pass`.
        keyword: &'static str,
    },
    /// A `return` reached the top level without a numeric exit status.
    #[error("Cannot use return statement in non-function body with a {type_name} value.")]
    ReturnOutsideFunction {
        /// Type of the returned value.
        type_name: &'static str,
    },
    /// A top-level `return` number that is not a valid exit status.
    #[error("Cannot exit with status {value}; expected an integer in the i32 range.")]
    InvalidExitStatus {
        /// The returned number.
        value: f64,
    },
    /// Attempted division by zero.
    #[error("Runtime error: Division by zero.")]
    DivisionByZero,
    /// The wrong number of arguments was supplied to a native function.
    #[error("Native function '{name}' expects {expected} arguments, found {found}.")]
    ArgumentCountMismatch {
        /// The function name.
        name:     &'static str,
        /// Description of the accepted argument counts.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
    },
    /// An `assert` call received a falsy value.
    #[error("Assertion failed.")]
    AssertionFailed,
    /// Function calls nested deeper than the interpreter allows.
    #[error("Maximum call depth of {depth} exceeded.")]
    StackOverflow {
        /// The call depth limit.
        depth: usize,
    },
    /// The system clock could not be read.
    #[error("Clock error: {details}.")]
    Clock {
        /// Details reported by the host.
        details: String,
    },
}
