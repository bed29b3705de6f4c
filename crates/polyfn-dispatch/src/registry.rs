//! Scoped registry of overload sets.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use tracing::debug;

use polyfn_core::Value;

use crate::call::Call;
use crate::error::{DispatchError, Result};
use crate::set::OverloadSet;

/// Namespace key for overload sets.
///
/// Dispatch is local to the scope that declares a function: two scopes
/// declaring the same name get independent sets. Scopes are explicit values
/// owned by the application; there is no ambient discovery of the caller's
/// namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope(Arc<str>);

impl Scope {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Scope(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Scope {
    fn from(name: &str) -> Self {
        Scope::new(name)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps `(scope, name)` to its one overload set.
///
/// At most one set exists per key; every registration under an existing
/// name appends to that set, never replaces it.
#[derive(Debug, Default)]
pub struct Registry {
    sets: RwLock<HashMap<(Scope, Arc<str>), Arc<OverloadSet>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set registered under `(scope, name)`, creating it on
    /// first use. Repeated calls return the same set.
    pub fn overload(&self, scope: &Scope, name: &str) -> Arc<OverloadSet> {
        let mut sets = self.sets.write().unwrap();
        Arc::clone(
            sets.entry((scope.clone(), Arc::from(name)))
                .or_insert_with(|| {
                    debug!(%scope, name, "created overload set");
                    Arc::new(OverloadSet::new(name))
                }),
        )
    }

    /// Looks up a set without creating it.
    pub fn get(&self, scope: &Scope, name: &str) -> Option<Arc<OverloadSet>> {
        let sets = self.sets.read().unwrap();
        sets.get(&(scope.clone(), Arc::from(name))).cloned()
    }

    /// Dispatches through the set under `(scope, name)`.
    ///
    /// An unknown name behaves like a set with no matching entry.
    pub fn dispatch(&self, scope: &Scope, name: &str, call: &Call) -> Result<Value> {
        match self.get(scope, name) {
            Some(set) => set.dispatch(call),
            None => Err(DispatchError::NoMatch {
                name: Arc::from(name),
                call: call.clone(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.sets.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.read().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyfn_core::{Guard, Pred};
    use std::sync::Arc;

    #[test]
    fn test_auto_vivify_returns_same_set() {
        let registry = Registry::new();
        let scope = Scope::new("app");
        let a = registry.overload(&scope, "f");
        let b = registry.overload(&scope, "f");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registrations_accumulate() {
        let registry = Registry::new();
        let scope = Scope::new("app");
        registry
            .overload(&scope, "f")
            .register(vec![Guard::from(Pred::ge(0))], vec![], Arc::new(|_| Ok(Value::from("a"))));
        registry
            .overload(&scope, "f")
            .register(vec![], vec![], Arc::new(|_| Ok(Value::from("b"))));

        let set = registry.get(&scope, "f").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.call([-1]).unwrap().as_str(), Some("b"));
    }

    #[test]
    fn test_scopes_are_isolated() {
        let registry = Registry::new();
        let app = Scope::new("app");
        let plugin = Scope::new("plugin");
        registry
            .overload(&app, "f")
            .register(vec![], vec![], Arc::new(|_| Ok(Value::from("app"))));
        registry
            .overload(&plugin, "f")
            .register(vec![], vec![], Arc::new(|_| Ok(Value::from("plugin"))));

        assert_eq!(registry.len(), 2);
        let call = Call::new();
        assert_eq!(
            registry.dispatch(&app, "f", &call).unwrap().as_str(),
            Some("app")
        );
        assert_eq!(
            registry.dispatch(&plugin, "f", &call).unwrap().as_str(),
            Some("plugin")
        );
    }

    #[test]
    fn test_unknown_name_is_no_match() {
        let registry = Registry::new();
        let scope = Scope::new("app");
        assert!(matches!(
            registry.dispatch(&scope, "missing", &Call::new()),
            Err(DispatchError::NoMatch { .. })
        ));
        // Lookup alone does not create a set.
        assert!(registry.get(&scope, "missing").is_none());
        assert!(registry.is_empty());
    }
}
