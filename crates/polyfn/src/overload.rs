//! Fluent registration of guarded overloads.

use std::sync::Arc;

use polyfn_core::{Guard, Value};
use polyfn_dispatch::{Call, OverloadSet, Registry, Result, Scope};

/// A builder for attaching one guarded implementation to an overload set.
///
/// Three call shapes are supported: bare attachment (no guards, a
/// catch-all entry that always matches, typically registered last),
/// positional guards only, or positional and keyword guards together.
/// Attaching under an existing `(scope, name)` accumulates entries on the
/// one shared set; it never creates a fresh set per attachment.
#[derive(Debug, Clone, Default)]
pub struct Overload {
    guards: Vec<Guard>,
    kw_guards: Vec<(Arc<str>, Guard)>,
}

impl Overload {
    /// Starts a registration with no guards.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional guard: a bare type, a bare value, or a
    /// predicate.
    pub fn arg(mut self, guard: impl Into<Guard>) -> Self {
        self.guards.push(guard.into());
        self
    }

    /// Adds a keyword guard. The guard is evaluated on every dispatch,
    /// against the absent slot when the caller omits the keyword.
    pub fn kw(mut self, name: impl Into<Arc<str>>, guard: impl Into<Guard>) -> Self {
        self.kw_guards.push((name.into(), guard.into()));
        self
    }

    /// Attaches the implementation under `(scope, name)`, creating the
    /// overload set on first use, and returns the set's handle.
    pub fn attach<F>(
        self,
        registry: &Registry,
        scope: &Scope,
        name: &str,
        func: F,
    ) -> Arc<OverloadSet>
    where
        F: Fn(&Call) -> Result<Value> + Send + Sync + 'static,
    {
        let set = registry.overload(scope, name);
        set.register(self.guards, self.kw_guards, Arc::new(func));
        set
    }

    /// Attaches the implementation directly to an existing set.
    pub fn attach_to<F>(self, set: &OverloadSet, func: F)
    where
        F: Fn(&Call) -> Result<Value> + Send + Sync + 'static,
    {
        set.register(self.guards, self.kw_guards, Arc::new(func));
    }
}
