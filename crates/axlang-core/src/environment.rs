//! Lexically scoped environments.
//!
//! An [`Env`] is a shared, interior-mutable handle: cloning an `Env`
//! never duplicates its bindings, it just adds a reference. This is
//! what lets a closure's `captured_env` observe a `set` performed
//! later through some other holder of the same environment (see the
//! closures-by-reference testable property).

use crate::error::AxError;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug)]
struct EnvData {
    bindings: HashMap<String, Value>,
    parent: Option<Env>,
}

/// A shared handle to an environment. Equality is by identity, not by
/// bindings content — two environments with the same bindings are
/// still different environments.
#[derive(Debug, Clone)]
pub struct Env(Rc<RefCell<EnvData>>);

impl Env {
    pub fn new_global() -> Self {
        Env(Rc::new(RefCell::new(EnvData {
            bindings: HashMap::new(),
            parent: None,
        })))
    }

    pub fn child_of(parent: &Env) -> Self {
        Env(Rc::new(RefCell::new(EnvData {
            bindings: HashMap::new(),
            parent: Some(parent.clone()),
        })))
    }

    /// Creates or overwrites the binding in this environment only.
    pub fn define(&self, name: &str, value: Value) -> Value {
        self.0
            .borrow_mut()
            .bindings
            .insert(normalize_name(name), value.clone());
        value
    }

    /// Returns the value bound to `name` in the nearest enclosing
    /// environment containing it.
    pub fn lookup(&self, name: &str) -> Result<Value, AxError> {
        self.resolve(name)
            .map(|owner| owner.0.borrow().bindings.get(&normalize_name(name)).cloned().unwrap())
    }

    /// Updates the binding in the nearest enclosing environment that
    /// already contains `name`. Never falls back to `define`.
    pub fn assign(&self, name: &str, value: Value) -> Result<(), AxError> {
        let owner = self.resolve(name)?;
        owner.0.borrow_mut().bindings.insert(normalize_name(name), value);
        Ok(())
    }

    /// Returns the environment that owns `name`, searching the parent
    /// chain. The only search operation; `lookup`/`assign` are thin
    /// wrappers over it.
    pub fn resolve(&self, name: &str) -> Result<Env, AxError> {
        let key = normalize_name(name);
        let data = self.0.borrow();
        if data.bindings.contains_key(&key) {
            return Ok(self.clone());
        }
        match &data.parent {
            Some(parent) => parent.resolve(name),
            None => {
                tracing::debug!(name, "no environment in the parent chain defines this name");
                Err(AxError::UndefinedVariable(name.to_string()))
            }
        }
    }

    pub fn contains_local(&self, name: &str) -> bool {
        self.0.borrow().bindings.contains_key(&normalize_name(name))
    }

    /// This environment's parent, if any. Used by `super` to walk up
    /// one level from a class environment.
    pub fn parent(&self) -> Option<Env> {
        self.0.borrow().parent.clone()
    }

    /// Identity comparison: true iff both handles point at the same
    /// underlying environment.
    pub fn is_same(&self, other: &Env) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A parsed `(prop ...)` form that ends up treated as a name has a
/// list-shaped textual form; coerce to its printed form so a
/// list-shaped key never accidentally matches a bound name (§4.2).
fn normalize_name(name: &str) -> String {
    name.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_is_local_only() {
        let parent = Env::new_global();
        let child = Env::child_of(&parent);
        child.define("x", Value::Integer(1));
        assert!(parent.resolve("x").is_err());
        assert!(child.resolve("x").is_ok());
    }

    #[test]
    fn lookup_walks_parent_chain() {
        let parent = Env::new_global();
        parent.define("x", Value::Integer(42));
        let child = Env::child_of(&parent);
        assert_eq!(child.lookup("x").unwrap(), Value::Integer(42));
    }

    #[test]
    fn assign_mutates_owning_ancestor_without_defining_locally() {
        let parent = Env::new_global();
        parent.define("x", Value::Integer(1));
        let child = Env::child_of(&parent);
        child.assign("x", Value::Integer(2)).unwrap();
        assert!(!child.contains_local("x"));
        assert_eq!(parent.lookup("x").unwrap(), Value::Integer(2));
    }

    #[test]
    fn assign_on_unbound_name_fails_and_never_falls_back_to_define() {
        let env = Env::new_global();
        assert!(env.assign("nope", Value::Null).is_err());
        assert!(env.resolve("nope").is_err());
    }

    #[test]
    fn shared_environment_observes_mutation_through_any_holder() {
        // Two "closures" capturing the same Env must see each other's writes.
        let env = Env::new_global();
        let closure_a = env.clone();
        let closure_b = env.clone();
        closure_a.define("x", Value::Integer(10));
        closure_b.define("x", Value::Integer(20));
        assert_eq!(closure_a.lookup("x").unwrap(), Value::Integer(20));
    }
}
