//! Polyfn - Predicate-guarded multiple dispatch
//!
//! Register several implementations of one logical function, each behind
//! per-argument and per-keyword guards; every call resolves to the first
//! registered entry whose guards all accept the actual arguments.
//!
//! # Example
//!
//! ```rust
//! use polyfn::prelude::*;
//!
//! let registry = Registry::new();
//! let scope = Scope::new("docs");
//!
//! Overload::new()
//!     .arg(Pred::ge(0))
//!     .attach(&registry, &scope, "abs", |call| Ok(call.args()[0].clone()));
//! Overload::new()
//!     .attach(&registry, &scope, "abs", |call| {
//!         let n = call.args()[0].as_i64().unwrap();
//!         Ok(Value::from(-n))
//!     });
//!
//! let result = registry
//!     .dispatch(&scope, "abs", &Call::new().arg(-3))
//!     .unwrap();
//! assert_eq!(result.as_i64(), Some(3));
//! ```

mod action;
mod fallback;
mod overload;

// Value model and predicates
pub use polyfn_core::{compare_values, CmpOp, Guard, GuardError, Pred, PredFn, Value, ValueType};

// Overload sets, dispatch, and the scoped registry
pub use polyfn_dispatch::{
    Call, DispatchError, OverloadEntry, OverloadFn, OverloadSet, Registry, Result, Scope,
};

// Registration facade
pub use overload::Overload;

// Thin collaborators: command tables and fallback lookup
pub use action::{Action, ActionError, ActionFn, ActionSet};
pub use fallback::FallbackMap;

pub mod prelude {
    pub use super::{
        Call, DispatchError, Guard, Overload, OverloadSet, Pred, Registry, Scope, Value, ValueType,
    };
}
