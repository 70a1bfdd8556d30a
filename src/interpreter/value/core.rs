use std::{cell::RefCell, fmt, rc::Rc};

use crate::{
    ast::FunctionDef,
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::{core::EvalResult, function::core::NativeDef},
        value::object::Properties,
    },
    util::stack::ensure_sufficient_stack,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce, plus the two
/// control-flow signals ([`Self::Break`] and [`Self::Return`]) that statement
/// bodies route between each other. The signals never reach user code as
/// first-class values.
#[derive(Clone)]
pub enum RuntimeValue {
    /// The absence of a value. Also bound to missing arguments and to `mut`
    /// declarations without an initializer.
    Null,
    /// A double precision floating-point number.
    Number(f64),
    /// A string value.
    String(String),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// An object. Shared by reference: every copy sees the same properties.
    Object(Rc<RefCell<Properties>>),
    /// A user-defined function together with its captured scope.
    Function(Rc<FunctionValue>),
    /// A function provided by the host.
    NativeFunction(&'static NativeDef),
    /// A `break` or `pass` signal travelling to the enclosing loop.
    Break(LoopSignal),
    /// A `return` signal carrying its value to the enclosing function.
    Return(Box<Self>),
}

/// Which loop statement produced a [`RuntimeValue::Break`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopSignal {
    /// Leave the loop.
    Break,
    /// Skip to the next iteration.
    Pass,
}

/// A user-defined function value.
///
/// The definition is shared with the AST node it was declared by. `closure`
/// is the scope the declaration ran in; calls create their parameter scope
/// as a child of it.
pub struct FunctionValue {
    /// Name, parameters and body.
    pub definition: Rc<FunctionDef>,
    /// The declaring scope.
    pub closure:    Env,
}

impl FunctionValue {
    /// The declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.definition.name
    }
}

impl RuntimeValue {
    /// Returns the name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
            Self::NativeFunction(_) => "native function",
            Self::Break(LoopSignal::Break) => "break",
            Self::Break(LoopSignal::Pass) => "pass",
            Self::Return(_) => "return",
        }
    }

    /// Converts the value to `bool` for conditions and logical operators.
    ///
    /// - Null is false.
    /// - A Number is false only when it equals `0`.
    /// - A String is false only when it is empty.
    /// - A Boolean is its own value.
    ///
    /// # Errors
    /// `NoTruthValue` for objects, functions and signals.
    ///
    /// # Example
    /// ```
    /// use laika::interpreter::value::core::RuntimeValue;
    ///
    /// assert!(!RuntimeValue::Number(0.0).is_truthy().unwrap());
    /// assert!(RuntimeValue::Number(-2.0).is_truthy().unwrap());
    /// assert!(!RuntimeValue::String(String::new()).is_truthy().unwrap());
    /// assert!(!RuntimeValue::Null.is_truthy().unwrap());
    /// ```
    pub fn is_truthy(&self) -> EvalResult<bool> {
        match self {
            Self::Null => Ok(false),
            Self::Number(n) => Ok(*n != 0.0),
            Self::String(s) => Ok(!s.is_empty()),
            Self::Boolean(b) => Ok(*b),
            _ => Err(RuntimeError::NoTruthValue { type_name: self.type_name() }),
        }
    }

    /// Builds a fresh object value from its properties.
    #[must_use]
    pub fn object(properties: Properties) -> Self {
        Self::Object(Rc::new(RefCell::new(properties)))
    }

    /// Writes the value the way it appears nested inside an object, where
    /// strings are quoted.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "\"{s}\""),
            other => write!(f, "{other}"),
        }
    }
}

impl From<f64> for RuntimeValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for RuntimeValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for RuntimeValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for RuntimeValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl PartialEq for RuntimeValue {
    /// Objects and functions compare by identity; natives compare by name.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::NativeFunction(a), Self::NativeFunction(b)) => a.name == b.name,
            (Self::Break(a), Self::Break(b)) => a == b,
            (Self::Return(a), Self::Return(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for RuntimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Number(n) => write!(f, "Number({n:?})"),
            Self::String(s) => write!(f, "String({s:?})"),
            Self::Boolean(b) => write!(f, "Boolean({b})"),
            Self::Object(props) => match props.try_borrow() {
                Ok(props) => f.debug_map()
                              .entries(props.iter().map(|(k, v)| (k, v)))
                              .finish(),
                Err(_) => write!(f, "Object(<borrowed>)"),
            },
            Self::Function(func) => write!(f, "Function({})", func.name()),
            Self::NativeFunction(native) => write!(f, "NativeFunction({})", native.name),
            Self::Break(signal) => write!(f, "Break({signal:?})"),
            Self::Return(value) => write!(f, "Return({value:?})"),
        }
    }
}

impl fmt::Display for RuntimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null | Self::Break(_) => Ok(()),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Object(props) => {
                let props = props.borrow();
                if props.is_empty() {
                    return write!(f, "{{}}");
                }

                write!(f, "{{ ")?;
                for (index, (key, value)) in props.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{key}: ")?;
                    ensure_sufficient_stack(|| value.fmt_nested(f))?;
                }

                write!(f, " }}")
            },
            Self::Function(func) => write!(f, "Function {}", func.name()),
            Self::NativeFunction(native) => write!(f, "NativeFunction {}", native.name),
            Self::Return(value) => write!(f, "{value}"),
        }
    }
}
