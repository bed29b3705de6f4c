//! Composable predicates over a single candidate value.
//!
//! A [`Pred`] is evaluated against `Option<&Value>`, where `None` stands for
//! an argument slot the caller never supplied. The absent slot is not a
//! [`Value`]: user code cannot construct a value that compares equal to it.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use crate::error::{GuardError, Result};
use crate::value::{compare_values, Value, ValueType};

/// Signature for user-supplied predicate functions.
///
/// Custom functions only ever see supplied values; an absent slot evaluates
/// to false without invoking the function. Use [`Pred::exists`] to test
/// presence.
pub type PredFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// Ordering and equality operators for relational predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

/// A predicate tree over one candidate value.
///
/// Predicates are pure and cheap to clone; the same predicate may back any
/// number of guards.
#[derive(Clone)]
pub enum Pred {
    /// Accepts everything, including the absent slot.
    Any,
    /// Accepts every supplied value; rejects only the absent slot.
    Exists,
    /// Relational comparison against a fixed bound.
    Cmp { op: CmpOp, bound: Value },
    /// Half-open range: `low <= candidate < high`.
    Between { low: Value, high: Value },
    /// Candidate equals one of the listed values.
    In(Vec<Value>),
    /// Candidate is a member of the container value.
    Has(Value),
    /// Candidate's type descriptor equals the given type.
    IsType(ValueType),
    And(Box<Pred>, Box<Pred>),
    Or(Box<Pred>, Box<Pred>),
    Not(Box<Pred>),
    /// User-supplied predicate function.
    Fn(PredFn),
}

fn ordering(candidate: Option<&Value>, bound: &Value) -> Result<Ordering> {
    let v = candidate.ok_or_else(|| {
        GuardError::incomparable("absent argument", bound.value_type().to_string())
    })?;
    compare_values(v, bound).ok_or_else(|| {
        GuardError::incomparable(v.value_type().to_string(), bound.value_type().to_string())
    })
}

impl Pred {
    pub fn any() -> Self {
        Pred::Any
    }

    pub fn exists() -> Self {
        Pred::Exists
    }

    pub fn lt(bound: impl Into<Value>) -> Self {
        Pred::Cmp {
            op: CmpOp::Lt,
            bound: bound.into(),
        }
    }

    pub fn le(bound: impl Into<Value>) -> Self {
        Pred::Cmp {
            op: CmpOp::Le,
            bound: bound.into(),
        }
    }

    pub fn gt(bound: impl Into<Value>) -> Self {
        Pred::Cmp {
            op: CmpOp::Gt,
            bound: bound.into(),
        }
    }

    pub fn ge(bound: impl Into<Value>) -> Self {
        Pred::Cmp {
            op: CmpOp::Ge,
            bound: bound.into(),
        }
    }

    pub fn eq(bound: impl Into<Value>) -> Self {
        Pred::Cmp {
            op: CmpOp::Eq,
            bound: bound.into(),
        }
    }

    pub fn ne(bound: impl Into<Value>) -> Self {
        Pred::Cmp {
            op: CmpOp::Ne,
            bound: bound.into(),
        }
    }

    /// Half-open range check; matches `low`, rejects `high`.
    pub fn between(low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Pred::Between {
            low: low.into(),
            high: high.into(),
        }
    }

    pub fn one_of(values: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        Pred::In(values.into_iter().map(Into::into).collect())
    }

    pub fn member_of(container: impl Into<Value>) -> Self {
        Pred::Has(container.into())
    }

    pub fn is_type(value_type: ValueType) -> Self {
        Pred::IsType(value_type)
    }

    pub fn func(f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Pred::Fn(Arc::new(f))
    }

    pub fn and(self, other: Pred) -> Self {
        Pred::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Pred) -> Self {
        Pred::Or(Box::new(self), Box::new(other))
    }

    pub fn negate(self) -> Self {
        Pred::Not(Box::new(self))
    }

    /// Evaluates the predicate; `None` is the absent argument slot.
    ///
    /// A relational test over operands that do not order fails with
    /// [`GuardError::Incomparable`] rather than returning false.
    pub fn eval(&self, candidate: Option<&Value>) -> Result<bool> {
        match self {
            Pred::Any => Ok(true),
            Pred::Exists => Ok(candidate.is_some()),
            Pred::Cmp { op, bound } => match op {
                CmpOp::Eq => Ok(candidate.is_some_and(|v| v == bound)),
                CmpOp::Ne => Ok(candidate.map_or(true, |v| v != bound)),
                CmpOp::Lt => Ok(ordering(candidate, bound)?.is_lt()),
                CmpOp::Le => Ok(ordering(candidate, bound)?.is_le()),
                CmpOp::Gt => Ok(ordering(candidate, bound)?.is_gt()),
                CmpOp::Ge => Ok(ordering(candidate, bound)?.is_ge()),
            },
            Pred::Between { low, high } => {
                if !ordering(candidate, low)?.is_ge() {
                    return Ok(false);
                }
                Ok(ordering(candidate, high)?.is_lt())
            }
            Pred::In(values) => Ok(candidate.is_some_and(|v| values.contains(v))),
            Pred::Has(container) => match container {
                Value::List(items) => Ok(candidate.is_some_and(|v| items.contains(v))),
                Value::Str(s) => match candidate {
                    Some(Value::Str(c)) => Ok(s.contains(c.as_ref())),
                    Some(other) => Err(GuardError::incomparable(
                        other.value_type().to_string(),
                        "str container",
                    )),
                    None => Err(GuardError::incomparable("absent argument", "str container")),
                },
                other => Err(GuardError::incomparable(
                    match candidate {
                        Some(v) => v.value_type().to_string(),
                        None => "absent argument".to_string(),
                    },
                    format!("{} container", other.value_type()),
                )),
            },
            Pred::IsType(t) => Ok(candidate.is_some_and(|v| v.value_type() == *t)),
            Pred::And(left, right) => {
                if !left.eval(candidate)? {
                    return Ok(false);
                }
                right.eval(candidate)
            }
            Pred::Or(left, right) => {
                if left.eval(candidate)? {
                    return Ok(true);
                }
                right.eval(candidate)
            }
            Pred::Not(inner) => Ok(!inner.eval(candidate)?),
            Pred::Fn(f) => Ok(candidate.is_some_and(|v| f(v))),
        }
    }
}

impl fmt::Debug for Pred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pred::Any => f.write_str("Any"),
            Pred::Exists => f.write_str("Exists"),
            Pred::Cmp { op, bound } => f
                .debug_struct("Cmp")
                .field("op", op)
                .field("bound", bound)
                .finish(),
            Pred::Between { low, high } => f
                .debug_struct("Between")
                .field("low", low)
                .field("high", high)
                .finish(),
            Pred::In(values) => f.debug_tuple("In").field(values).finish(),
            Pred::Has(container) => f.debug_tuple("Has").field(container).finish(),
            Pred::IsType(t) => f.debug_tuple("IsType").field(t).finish(),
            Pred::And(left, right) => f.debug_tuple("And").field(left).field(right).finish(),
            Pred::Or(left, right) => f.debug_tuple("Or").field(left).field(right).finish(),
            Pred::Not(inner) => f.debug_tuple("Not").field(inner).finish(),
            Pred::Fn(_) => f.write_str("Fn(..)"),
        }
    }
}

impl BitAnd for Pred {
    type Output = Pred;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for Pred {
    type Output = Pred;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Not for Pred {
    type Output = Pred;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn val(v: impl Into<Value>) -> Value {
        v.into()
    }

    #[test]
    fn test_any_accepts_everything() {
        assert_eq!(Pred::any().eval(Some(&val(0))), Ok(true));
        assert_eq!(Pred::any().eval(Some(&Value::Null)), Ok(true));
        assert_eq!(Pred::any().eval(None), Ok(true));
    }

    #[test]
    fn test_exists_rejects_only_absent() {
        assert_eq!(Pred::exists().eval(None), Ok(false));
        assert_eq!(Pred::exists().eval(Some(&Value::Null)), Ok(true));
        assert_eq!(Pred::exists().eval(Some(&val(0))), Ok(true));
        assert_eq!(Pred::exists().eval(Some(&val(false))), Ok(true));
        assert_eq!(Pred::exists().eval(Some(&val(""))), Ok(true));
        assert_eq!(Pred::exists().eval(Some(&Value::List(vec![]))), Ok(true));
    }

    #[test]
    fn test_relational() {
        assert_eq!(Pred::lt(5).eval(Some(&val(4))), Ok(true));
        assert_eq!(Pred::lt(5).eval(Some(&val(5))), Ok(false));
        assert_eq!(Pred::ge(5).eval(Some(&val(5))), Ok(true));
        assert_eq!(Pred::gt(5).eval(Some(&val(5.5))), Ok(true));
        assert_eq!(Pred::le("b").eval(Some(&val("a"))), Ok(true));
    }

    #[test]
    fn test_relational_incomparable_is_error() {
        let err = Pred::lt(5).eval(Some(&val("abc"))).unwrap_err();
        assert!(matches!(err, GuardError::Incomparable { .. }));
        // The absent slot does not order either.
        assert!(Pred::lt(5).eval(None).is_err());
        assert!(Pred::between(0, 10).eval(None).is_err());
    }

    #[test]
    fn test_eq_ne_on_absent() {
        assert_eq!(Pred::eq(5).eval(None), Ok(false));
        assert_eq!(Pred::ne(5).eval(None), Ok(true));
        assert_eq!(Pred::eq(5).eval(Some(&val(5))), Ok(true));
        assert_eq!(Pred::ne(5).eval(Some(&val(5))), Ok(false));
    }

    #[test]
    fn test_between_is_half_open() {
        let p = Pred::between(0, 10);
        assert_eq!(p.eval(Some(&val(0))), Ok(true));
        assert_eq!(p.eval(Some(&val(9))), Ok(true));
        assert_eq!(p.eval(Some(&val(10))), Ok(false));
        assert_eq!(p.eval(Some(&val(-1))), Ok(false));
    }

    #[test]
    fn test_one_of() {
        let p = Pred::one_of([1, 2, 3]);
        assert_eq!(p.eval(Some(&val(2))), Ok(true));
        assert_eq!(p.eval(Some(&val(4))), Ok(false));
        assert_eq!(p.eval(None), Ok(false));
    }

    #[test]
    fn test_member_of_list() {
        let p = Pred::member_of(vec![val(1), val("x")]);
        assert_eq!(p.eval(Some(&val("x"))), Ok(true));
        assert_eq!(p.eval(Some(&val(2))), Ok(false));
        assert_eq!(p.eval(None), Ok(false));
    }

    #[test]
    fn test_member_of_string() {
        let p = Pred::member_of("haystack");
        assert_eq!(p.eval(Some(&val("hay"))), Ok(true));
        assert_eq!(p.eval(Some(&val("needle"))), Ok(false));
        assert!(p.eval(Some(&val(5))).is_err());
        assert!(p.eval(None).is_err());
    }

    #[test]
    fn test_member_of_non_container_is_error() {
        let p = Pred::member_of(5);
        assert!(p.eval(Some(&val(5))).is_err());
    }

    #[test]
    fn test_is_type() {
        let p = Pred::is_type(ValueType::I64);
        assert_eq!(p.eval(Some(&val(3))), Ok(true));
        assert_eq!(p.eval(Some(&val(3.0))), Ok(false));
        assert_eq!(p.eval(None), Ok(false));
    }

    #[test]
    fn test_func() {
        let p = Pred::func(|v| v.as_i64().map_or(false, |n| n % 2 == 0));
        assert_eq!(p.eval(Some(&val(4))), Ok(true));
        assert_eq!(p.eval(Some(&val(5))), Ok(false));
        assert_eq!(p.eval(None), Ok(false));
    }

    #[test]
    fn test_contradiction_and_tautology() {
        let p = Pred::ge(0);
        let contradiction = p.clone() & p.clone().negate();
        let tautology = p.clone() | p.negate();
        for n in [-3_i64, 0, 7] {
            let v = val(n);
            assert_eq!(contradiction.eval(Some(&v)), Ok(false));
            assert_eq!(tautology.eval(Some(&v)), Ok(true));
        }
    }

    #[test]
    fn test_not_operator() {
        let p = !Pred::exists();
        assert_eq!(p.eval(None), Ok(true));
        assert_eq!(p.eval(Some(&Value::Null)), Ok(false));
    }

    #[test]
    fn test_eval_is_idempotent() {
        let p = Pred::between(0, 10).and(Pred::ne(5));
        let v = val(3);
        assert_eq!(p.eval(Some(&v)), p.eval(Some(&v)));
    }
}
