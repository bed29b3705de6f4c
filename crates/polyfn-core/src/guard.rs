//! Guards accepted at overload registration sites.

use crate::error::Result;
use crate::pred::Pred;
use crate::value::{Value, ValueType};

/// A guard attached to an argument position or keyword name.
///
/// Registration sites may pass a bare type, a predicate, or a bare value;
/// each resolves to one closed variant. The match arms in [`Guard::accepts`]
/// are ordered type check, predicate, equality: that arm order is the
/// resolution priority.
#[derive(Debug, Clone)]
pub enum Guard {
    /// Candidate is an instance of the type.
    Is(ValueType),
    /// Candidate is tested by the predicate.
    Where(Pred),
    /// Candidate equals the value.
    Equals(Value),
}

impl Guard {
    /// Whether this guard accepts the candidate; `None` is the absent slot.
    pub fn accepts(&self, candidate: Option<&Value>) -> Result<bool> {
        match self {
            Guard::Is(t) => Ok(candidate.is_some_and(|v| v.value_type() == *t)),
            Guard::Where(pred) => pred.eval(candidate),
            Guard::Equals(value) => Ok(candidate.is_some_and(|v| v == value)),
        }
    }
}

impl From<ValueType> for Guard {
    fn from(t: ValueType) -> Self {
        Guard::Is(t)
    }
}

impl From<Pred> for Guard {
    fn from(pred: Pred) -> Self {
        Guard::Where(pred)
    }
}

impl From<Value> for Guard {
    fn from(value: Value) -> Self {
        Guard::Equals(value)
    }
}

impl From<bool> for Guard {
    fn from(v: bool) -> Self {
        Guard::Equals(Value::from(v))
    }
}

impl From<i64> for Guard {
    fn from(v: i64) -> Self {
        Guard::Equals(Value::from(v))
    }
}

impl From<i32> for Guard {
    fn from(v: i32) -> Self {
        Guard::Equals(Value::from(v))
    }
}

impl From<f64> for Guard {
    fn from(v: f64) -> Self {
        Guard::Equals(Value::from(v))
    }
}

impl From<&str> for Guard {
    fn from(v: &str) -> Self {
        Guard::Equals(Value::from(v))
    }
}
