//! Overload registry and first-match dispatcher.
//!
//! An [`OverloadSet`] holds an ordered list of guarded implementations of a
//! logically single function. Each dispatch walks the entries in
//! registration order and invokes the first one whose guards all accept the
//! call; ordering among entries is the whole resolution policy, there is no
//! specificity ranking. A [`Registry`] keys sets by `(scope, name)` so
//! unrelated code declaring the same name never merges overload sets.

mod call;
mod entry;
mod error;
mod registry;
mod set;

pub use call::Call;
pub use entry::{OverloadEntry, OverloadFn};
pub use error::{DispatchError, Result};
pub use registry::{Registry, Scope};
pub use set::OverloadSet;
