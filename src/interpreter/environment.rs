use std::{
    cell::RefCell,
    collections::{HashMap, HashSet, hash_map::Entry},
    mem, ptr,
    rc::Rc,
};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::NATIVE_TABLE},
        value::{
            core::{FunctionValue, RuntimeValue},
            object::Properties,
        },
    },
};

/// Shared handle to a scope.
///
/// Function values keep their declaring scope alive through this handle, so
/// a closure outlives the call that created it.
pub type Env = Rc<Environment>;

/// One lexical scope.
///
/// Each scope owns its bindings and links to the scope it was created in.
/// Lookups and assignments walk outward through the parents until a scope
/// owning the name is found.
///
/// A name can be declared once per scope. Declaring it again in a nested
/// scope shadows the outer binding.
#[derive(Debug, Default)]
pub struct Environment {
    parent:    Option<Env>,
    variables: RefCell<HashMap<String, RuntimeValue>>,
    constants: RefCell<HashSet<String>>,
}

impl Environment {
    /// Creates an empty scope whose lookups fall back to `parent`.
    #[must_use]
    pub fn new(parent: Option<Env>) -> Env {
        Rc::new(Self { parent,
                       ..Self::default() })
    }

    /// Creates a fresh global scope.
    ///
    /// The scope is seeded with the constants `true`, `false` and `null` and
    /// with every native function. Each call builds an independent scope, so
    /// separate interpreters never share state.
    ///
    /// # Example
    /// ```
    /// use laika::interpreter::{environment::Environment, value::core::RuntimeValue};
    ///
    /// let global = Environment::global();
    /// assert_eq!(global.lookup("true").unwrap(), RuntimeValue::Boolean(true));
    /// assert!(global.assign("null", RuntimeValue::Number(1.0)).is_err());
    /// ```
    #[must_use]
    pub fn global() -> Env {
        let env = Self::new(None);
        {
            let mut variables = env.variables.borrow_mut();
            let mut constants = env.constants.borrow_mut();

            let seeds = [("true", RuntimeValue::Boolean(true)),
                         ("false", RuntimeValue::Boolean(false)),
                         ("null", RuntimeValue::Null)];
            let natives = NATIVE_TABLE.iter()
                                      .map(|native| (native.name, RuntimeValue::NativeFunction(native)));

            for (name, value) in seeds.into_iter().chain(natives) {
                variables.insert(name.to_string(), value);
                constants.insert(name.to_string());
            }
        }
        env
    }

    /// Declares `name` in this scope.
    ///
    /// # Parameters
    /// - `name`: The binding to create.
    /// - `value`: Its initial value.
    /// - `constant`: Whether later assignments are rejected.
    ///
    /// # Returns
    /// The declared value.
    ///
    /// # Errors
    /// `Redeclaration` if this exact scope already has `name`. Bindings in
    /// parent scopes do not count.
    pub fn declare(&self, name: &str, value: RuntimeValue, constant: bool) -> EvalResult<RuntimeValue> {
        let mut variables = self.variables.borrow_mut();
        if variables.contains_key(name) {
            return Err(RuntimeError::Redeclaration { name: name.to_string() });
        }

        variables.insert(name.to_string(), value.clone());
        if constant {
            self.constants.borrow_mut().insert(name.to_string());
        }

        Ok(value)
    }

    /// Assigns `value` to the nearest binding named `name`.
    ///
    /// # Errors
    /// - `UnresolvedName` if no scope in the chain owns `name`.
    /// - `ConstantReassignment` if the owning binding is a constant.
    pub fn assign(&self, name: &str, value: RuntimeValue) -> EvalResult<RuntimeValue> {
        let scope = self.resolve(name)?;
        if scope.constants.borrow().contains(name) {
            return Err(RuntimeError::ConstantReassignment { name: name.to_string() });
        }

        scope.variables
             .borrow_mut()
             .insert(name.to_string(), value.clone());
        Ok(value)
    }

    /// Returns a copy of the nearest binding named `name`.
    ///
    /// Objects and functions are shared, so the copy refers to the same
    /// object or function as the binding.
    ///
    /// # Errors
    /// `UnresolvedName` if no scope in the chain owns `name`.
    pub fn lookup(&self, name: &str) -> EvalResult<RuntimeValue> {
        let scope = self.resolve(name)?;
        scope.variables
             .borrow()
             .get(name)
             .cloned()
             .ok_or_else(|| RuntimeError::UnresolvedName { name: name.to_string() })
    }

    /// Finds the scope that owns `name`, starting here and walking outward.
    ///
    /// # Errors
    /// `UnresolvedName` if the root is passed without finding `name`.
    pub fn resolve(&self, name: &str) -> EvalResult<&Self> {
        let mut scope = self;
        loop {
            if scope.variables.borrow().contains_key(name) {
                return Ok(scope);
            }
            match scope.parent.as_deref() {
                Some(parent) => scope = parent,
                None => return Err(RuntimeError::UnresolvedName { name: name.to_string() }),
            }
        }
    }

    /// Adds `delta` to the Number bound to `name`, in place.
    ///
    /// Backs the `++` and `--` operators on identifiers.
    ///
    /// # Returns
    /// The updated number.
    ///
    /// # Errors
    /// - `UnresolvedName` if `name` is not bound.
    /// - `ConstantReassignment` if the binding is a constant.
    /// - `TypeError` if the bound value is not a Number.
    pub fn update_number(&self, name: &str, delta: f64) -> EvalResult<RuntimeValue> {
        let scope = self.resolve(name)?;
        if scope.constants.borrow().contains(name) {
            return Err(RuntimeError::ConstantReassignment { name: name.to_string() });
        }

        let mut variables = scope.variables.borrow_mut();
        match variables.get_mut(name) {
            Some(RuntimeValue::Number(n)) => {
                *n += delta;
                Ok(RuntimeValue::Number(*n))
            },
            Some(other) => {
                Err(RuntimeError::TypeError { details: format!("cannot increment or decrement a \
                                                                {} value",
                                                               other.type_name()) })
            },
            None => Err(RuntimeError::UnresolvedName { name: name.to_string() }),
        }
    }

    /// Gives up a handle to `scope`, clearing every scope that is kept alive
    /// only by reference cycles.
    ///
    /// A function stored in the scope it was declared in refers back to that
    /// scope, so plain reference counting never frees either. This runs a
    /// trial deletion over `scope` and the scopes nested inside it: a node
    /// referenced from anywhere outside that graph, or reachable from such a
    /// node, is kept. The bindings of every other scope are dropped, which
    /// breaks the cycles.
    ///
    /// Scopes outside `scope`'s subtree are never inspected, so the cost is
    /// bounded by what was created inside it.
    pub fn release(scope: Env) {
        if Rc::strong_count(&scope) == 1 {
            return;
        }

        let root = Rc::as_ptr(&scope);
        let mut nodes = HashMap::from([(root.addr(), Node::Scope(scope))]);
        let mut internal: HashMap<usize, usize> = HashMap::new();
        let mut queue = vec![root.addr()];

        while let Some(key) = queue.pop() {
            for edge in nodes[&key].edges(root) {
                let edge_key = edge.key();
                *internal.entry(edge_key).or_default() += 1;
                if let Entry::Vacant(slot) = nodes.entry(edge_key) {
                    slot.insert(edge);
                    queue.push(edge_key);
                }
            }
        }

        // The table holds one handle per node.
        let mut live: HashSet<usize> =
            nodes.iter()
                 .filter(|(key, node)| node.strong_count() > 1 + internal.get(*key).copied().unwrap_or(0))
                 .map(|(key, _)| *key)
                 .collect();
        let mut queue: Vec<usize> = live.iter().copied().collect();
        while let Some(key) = queue.pop() {
            for edge in nodes[&key].edges(root) {
                let edge_key = edge.key();
                if live.insert(edge_key) {
                    queue.push(edge_key);
                }
            }
        }

        let released: Vec<_> =
            nodes.iter()
                 .filter(|(key, _)| !live.contains(*key))
                 .filter_map(|(_, node)| match node {
                     Node::Scope(scope) => {
                         scope.constants.borrow_mut().clear();
                         Some(mem::take(&mut *scope.variables.borrow_mut()))
                     },
                     Node::Function(_) | Node::Object(_) => None,
                 })
                 .collect();

        tracing::trace!(scopes = released.len(), "released unreachable scopes");
    }

    /// Whether `root` is this scope or one of its ancestors.
    fn is_within(&self, root: *const Self) -> bool {
        let mut scope = Some(self);
        while let Some(current) = scope {
            if ptr::eq(current, root) {
                return true;
            }
            scope = current.parent.as_deref();
        }
        false
    }
}

/// A shared value visited by [`Environment::release`].
enum Node {
    Scope(Env),
    Function(Rc<FunctionValue>),
    Object(Rc<RefCell<Properties>>),
}

impl Node {
    fn key(&self) -> usize {
        match self {
            Self::Scope(scope) => Rc::as_ptr(scope).addr(),
            Self::Function(function) => Rc::as_ptr(function).addr(),
            Self::Object(object) => Rc::as_ptr(object).addr(),
        }
    }

    fn strong_count(&self) -> usize {
        match self {
            Self::Scope(scope) => Rc::strong_count(scope),
            Self::Function(function) => Rc::strong_count(function),
            Self::Object(object) => Rc::strong_count(object),
        }
    }

    /// The handles this node holds to other nodes inside `root`'s subtree.
    fn edges(&self, root: *const Environment) -> Vec<Self> {
        let mut edges = Vec::new();
        match self {
            Self::Scope(scope) => {
                edges.extend(scope.variables.borrow().values().filter_map(Self::from_value));
                if !ptr::eq(Rc::as_ptr(scope), root)
                   && let Some(parent) = &scope.parent
                {
                    edges.push(Self::Scope(Rc::clone(parent)));
                }
            },
            Self::Function(function) => {
                if function.closure.is_within(root) {
                    edges.push(Self::Scope(Rc::clone(&function.closure)));
                }
            },
            Self::Object(object) => {
                edges.extend(object.borrow().iter().filter_map(|(_, value)| Self::from_value(value)));
            },
        }
        edges
    }

    fn from_value(value: &RuntimeValue) -> Option<Self> {
        match value {
            RuntimeValue::Function(function) => Some(Self::Function(Rc::clone(function))),
            RuntimeValue::Object(object) => Some(Self::Object(Rc::clone(object))),
            _ => None,
        }
    }
}
