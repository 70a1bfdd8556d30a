use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::{
            body::BodyContext,
            core::{Context, EvalResult, MAX_CALL_DEPTH},
            function::{assert, clock, print},
        },
        value::core::{FunctionValue, RuntimeValue},
    },
};

/// Type alias for native function handlers.
///
/// A native receives a slice of evaluated argument values and the scope of
/// the call site.
pub type NativeFn = fn(&[RuntimeValue], &Environment) -> EvalResult<RuntimeValue>;

/// Specifies the allowed number of arguments for a native function.
///
/// - `Exact(n)` means the native must receive exactly `n` arguments.
/// - `Variadic` means any number is accepted.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    Exact(usize),
    Variadic,
}

/// Defines native functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the native.
///
/// The macro produces:
/// - `NATIVE_TABLE` (static table seeded into every global scope),
/// - `NATIVE_FUNCTIONS` (public list of native names).
macro_rules! native_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub static NATIVE_TABLE: &[NativeDef] = &[
            $(
                NativeDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const NATIVE_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

/// A native function: its name, accepted arity and implementation.
pub struct NativeDef {
    pub name:  &'static str,
    pub arity: Arity,
    pub func:  NativeFn,
}

native_functions! {
    "println" => { arity: Arity::Variadic, func: print::println },
    "time"    => { arity: Arity::Exact(0), func: clock::time },
    "assert"  => { arity: Arity::Exact(1), func: assert::assert },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    ///
    /// Returns `true` if the count is permitted, `false` otherwise.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Variadic => true,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{n}"),
            Self::Variadic => write!(f, "any number of"),
        }
    }
}

impl NativeDef {
    /// Checks the argument count and runs the native.
    ///
    /// # Errors
    /// `ArgumentCountMismatch` if the arity does not allow `args.len()`,
    /// otherwise whatever the native returns.
    pub fn call(&self, args: &[RuntimeValue], env: &Environment) -> EvalResult<RuntimeValue> {
        if !self.arity.check(args.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { name:     self.name,
                                                             expected: self.arity.to_string(),
                                                             found:    args.len(), });
        }
        (self.func)(args, env)
    }
}

impl Context {
    /// Evaluates a call expression.
    ///
    /// Arguments are evaluated left to right in the caller's scope, then the
    /// callee expression is evaluated. Natives get the argument slice and the
    /// calling scope; user functions go through
    /// [`Context::call_function`].
    ///
    /// # Errors
    /// `NotCallable` if the callee is neither kind of function.
    pub(crate) fn eval_call(&mut self,
                            caller: &Expr,
                            arguments: &[Expr],
                            env: &Env)
                            -> EvalResult<RuntimeValue> {
        let args = arguments.iter()
                            .map(|argument| self.eval(argument, env))
                            .collect::<EvalResult<Vec<_>>>()?;

        match self.eval(caller, env)? {
            RuntimeValue::NativeFunction(native) => {
                tracing::trace!(name = native.name, args = args.len(), "calling native function");
                native.call(&args, env)
            },
            RuntimeValue::Function(function) => self.call_function(&function, args),
            other => Err(RuntimeError::NotCallable { type_name: other.type_name() }),
        }
    }

    /// Executes a user-defined function.
    ///
    /// A new scope is created as a child of the function's closure, not of
    /// the caller's scope. Parameters are declared in it positionally:
    /// extra arguments are ignored and missing ones bind Null. The body then
    /// runs as a function body, so a `return` ends it with its value.
    ///
    /// Afterwards the call scope is handed to [`Environment::release`], so
    /// functions declared in it that did not escape are freed with it.
    ///
    /// # Errors
    /// - `StackOverflow` once [`MAX_CALL_DEPTH`] calls are active.
    /// - `Redeclaration` if two parameters share a name.
    /// - Any error raised by the body.
    pub fn call_function(&mut self,
                         function: &FunctionValue,
                         args: Vec<RuntimeValue>)
                         -> EvalResult<RuntimeValue> {
        if self.call_depth >= MAX_CALL_DEPTH {
            return Err(RuntimeError::StackOverflow { depth: MAX_CALL_DEPTH });
        }

        tracing::debug!(name = function.name(),
                        args = args.len(),
                        depth = self.call_depth,
                        "calling function");

        let scope = Environment::new(Some(Rc::clone(&function.closure)));
        let mut args = args.into_iter();
        for parameter in &function.definition.parameters {
            scope.declare(parameter, args.next().unwrap_or(RuntimeValue::Null), false)?;
        }

        self.call_depth += 1;
        let result = self.execute_body(&function.definition.body, &scope, BodyContext::Function);
        self.call_depth -= 1;

        Environment::release(scope);
        result
    }
}
