use std::{mem, rc::Rc};

use crate::interpreter::value::core::RuntimeValue;

/// The properties of an object value, kept in insertion order.
///
/// Objects are small in practice, so lookups scan the list. Inserting an
/// existing key replaces its value and keeps its original position.
///
/// # Example
/// ```
/// use laika::interpreter::value::{core::RuntimeValue, object::Properties};
///
/// let mut props = Properties::new();
/// props.insert("b".into(), RuntimeValue::Number(1.0));
/// props.insert("a".into(), RuntimeValue::Number(2.0));
/// props.insert("b".into(), RuntimeValue::Number(3.0));
///
/// let keys: Vec<_> = props.iter().map(|(k, _)| k.as_str()).collect();
/// assert_eq!(keys, ["b", "a"]);
/// assert_eq!(props.get("b"), Some(&RuntimeValue::Number(3.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    entries: Vec<(String, RuntimeValue)>,
}

impl Properties {
    /// Creates an empty property map.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RuntimeValue> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut RuntimeValue> {
        self.entries
            .iter_mut()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert(&mut self, key: String, value: RuntimeValue) {
        match self.get_mut(&key) {
            Some(slot) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Iterates over the properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, RuntimeValue)> {
        self.entries.iter()
    }

    /// Whether the object has no properties.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, RuntimeValue)> for Properties {
    fn from_iter<T: IntoIterator<Item = (String, RuntimeValue)>>(iter: T) -> Self {
        let mut props = Self::new();
        for (key, value) in iter {
            props.insert(key, value);
        }
        props
    }
}

// Objects nested through sole-owned values (`o = { o }` in a loop) are
// unwrapped onto a worklist instead of dropped recursively.
impl Drop for Properties {
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.entries);
        while let Some((_, value)) = pending.pop() {
            if let RuntimeValue::Object(object) = value
               && let Ok(cell) = Rc::try_unwrap(object)
            {
                pending.append(&mut cell.into_inner().entries);
            }
        }
    }
}
