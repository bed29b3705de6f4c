//! Ordered overload sets with first-match dispatch.

use std::fmt;
use std::sync::{Arc, RwLock};

use tracing::{debug, trace};

use polyfn_core::{Guard, Value};

use crate::call::Call;
use crate::entry::{OverloadEntry, OverloadFn};
use crate::error::{DispatchError, Result};

/// A named, ordered, append-only collection of guarded implementations,
/// callable as a single logical function.
///
/// Registration order is the resolution order: dispatch invokes the first
/// entry whose guards all accept the call. Registrants order their entries
/// from most to least specific, exactly as in a guarded `if`/`else if`
/// chain; a bare catch-all entry typically goes last.
pub struct OverloadSet {
    name: Arc<str>,
    entries: RwLock<Vec<OverloadEntry>>,
}

impl OverloadSet {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            entries: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    /// Appends a guarded implementation.
    ///
    /// Entries accumulate; nothing is ever replaced or removed. Guard count
    /// is not checked against the implementation here: a mismatch is a
    /// non-match at call time, not a registration error.
    pub fn register(
        &self,
        guards: Vec<Guard>,
        kw_guards: Vec<(Arc<str>, Guard)>,
        func: OverloadFn,
    ) {
        let mut entries = self.entries.write().unwrap();
        entries.push(OverloadEntry::new(guards, kw_guards, func));
        debug!(name = %self.name, entries = entries.len(), "registered overload");
    }

    /// Resolves the call to the first matching entry and invokes it.
    ///
    /// The entry lock is released before invocation, so implementations may
    /// dispatch through this set again (recursive guarded functions go
    /// through the ordinary resolution algorithm on every call).
    pub fn dispatch(&self, call: &Call) -> Result<Value> {
        let func = self.resolve(call)?;
        func(call)
    }

    /// Positional-only sugar over [`OverloadSet::dispatch`].
    pub fn call(&self, args: impl IntoIterator<Item = impl Into<Value>>) -> Result<Value> {
        self.dispatch(&Call::positional(args))
    }

    fn resolve(&self, call: &Call) -> Result<OverloadFn> {
        let entries = self.entries.read().unwrap();
        for (index, entry) in entries.iter().enumerate() {
            if entry.matches(call)? {
                trace!(name = %self.name, index, "overload matched");
                return Ok(entry.func());
            }
        }
        trace!(name = %self.name, %call, "no overload matched");
        Err(DispatchError::NoMatch {
            name: Arc::clone(&self.name),
            call: call.clone(),
        })
    }
}

impl fmt::Debug for OverloadSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverloadSet")
            .field("name", &self.name)
            .field("entries", &self.len())
            .finish()
    }
}
