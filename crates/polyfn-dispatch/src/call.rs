//! Argument bundles passed to dispatch.

use std::fmt;
use std::sync::Arc;

use polyfn_core::Value;

/// The positional and keyword arguments of one dispatched call.
///
/// Keyword arguments keep insertion order; writing a name twice overwrites
/// the earlier value.
#[derive(Debug, Clone, Default)]
pub struct Call {
    args: Vec<Value>,
    kwargs: Vec<(Arc<str>, Value)>,
}

impl Call {
    pub fn new() -> Self {
        Self::default()
    }

    /// A call with only positional arguments.
    pub fn positional(args: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            kwargs: Vec::new(),
        }
    }

    /// Appends a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Sets a keyword argument.
    pub fn kw(mut self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.kwargs.iter().position(|(n, _)| *n == name) {
            Some(idx) => self.kwargs[idx].1 = value,
            None => self.kwargs.push((name, value)),
        }
        self
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Looks up a keyword argument; `None` means the caller never supplied it.
    pub fn kwarg(&self, name: &str) -> Option<&Value> {
        self.kwargs
            .iter()
            .find(|(n, _)| n.as_ref() == name)
            .map(|(_, v)| v)
    }

    pub fn kwargs(&self) -> &[(Arc<str>, Value)] {
        &self.kwargs
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        let mut first = true;
        for arg in &self.args {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
            first = false;
        }
        for (name, value) in &self.kwargs {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
            first = false;
        }
        f.write_str(")")
    }
}
