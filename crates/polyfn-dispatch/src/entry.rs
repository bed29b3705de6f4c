//! A single guarded implementation inside an overload set.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use polyfn_core::Guard;
use polyfn_core::Value;

use crate::call::Call;
use crate::error::Result;

/// Signature for registered implementations.
pub type OverloadFn = Arc<dyn Fn(&Call) -> Result<Value> + Send + Sync>;

type GuardVec = SmallVec<[Guard; 4]>;

/// One guarded implementation: positional guards, keyword guards, function.
///
/// Immutable once registered. Guard count is never validated against the
/// implementation's expectations; a mismatch surfaces as a non-match at call
/// time.
pub struct OverloadEntry {
    guards: GuardVec,
    kw_guards: Vec<(Arc<str>, Guard)>,
    func: OverloadFn,
}

impl OverloadEntry {
    pub(crate) fn new(
        guards: Vec<Guard>,
        kw_guards: Vec<(Arc<str>, Guard)>,
        func: OverloadFn,
    ) -> Self {
        Self {
            guards: GuardVec::from_vec(guards),
            kw_guards,
            func,
        }
    }

    pub fn guards(&self) -> &[Guard] {
        &self.guards
    }

    pub fn kw_guards(&self) -> &[(Arc<str>, Guard)] {
        &self.kw_guards
    }

    /// Whether every guard accepts the call.
    ///
    /// Supplying fewer positional arguments than there are guards is a
    /// non-match; extra trailing arguments are unconstrained. Keyword guards
    /// are evaluated even when the caller omitted the keyword; the guard
    /// then sees the absent slot. Guard evaluation errors propagate.
    pub(crate) fn matches(&self, call: &Call) -> polyfn_core::Result<bool> {
        if self.guards.len() > call.args().len() {
            return Ok(false);
        }
        for (guard, arg) in self.guards.iter().zip(call.args()) {
            if !guard.accepts(Some(arg))? {
                return Ok(false);
            }
        }
        for (name, guard) in &self.kw_guards {
            if !guard.accepts(call.kwarg(name))? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub(crate) fn func(&self) -> OverloadFn {
        Arc::clone(&self.func)
    }
}

impl fmt::Debug for OverloadEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverloadEntry")
            .field("guards", &self.guards)
            .field("kw_guards", &self.kw_guards)
            .finish()
    }
}
