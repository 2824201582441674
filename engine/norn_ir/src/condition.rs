//! The condition side of the rule DSL.
//!
//! A condition is a declarative tree that, evaluated against a subject,
//! produces a boolean verdict (possibly pending on unloaded data). The
//! evaluator lives in `norn_eval`; this module only defines the shape.

use crate::{Atom, PathRef, Value};

/// A declarative condition tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    /// Literal match by equality against the current subject. Records of
    /// the subject's own type match through the type's `compare` capability
    /// when one is present.
    Equals(Value),
    /// A predicate name, resolved on the subject and required to yield
    /// `true`.
    Pred(Atom),
    /// Conjunction over field entries: each key is resolved on the subject,
    /// then the sub-condition is evaluated against the resolved value.
    /// Entries are visited in declaration order.
    Fields(Vec<(Atom, Condition)>),
    /// Disjunction over alternatives.
    AnyOf(Vec<Condition>),
    /// Logical negation of the inner condition's verdict.
    Not(Box<Condition>),
    /// Resolve the path against the root subject or argument bag, then use
    /// the resolved value as a sub-condition against the current subject.
    Ref(PathRef),
    /// Evaluate the inner condition; when it holds, record
    /// `key -> current subject` into the carried bindings.
    Bind(Atom, Box<Condition>),
    /// Switch the subject to the argument bag. Only meaningful while the
    /// current subject is the root subject; otherwise the condition fails
    /// without error.
    WithArgs(Box<Condition>),
}

impl Condition {
    /// Negation.
    pub fn not(inner: Condition) -> Condition {
        Condition::Not(Box::new(inner))
    }

    /// Capture the current subject under `key` when `inner` holds.
    pub fn bind(key: impl Into<Atom>, inner: Condition) -> Condition {
        Condition::Bind(key.into(), Box::new(inner))
    }

    /// Evaluate `inner` against the argument bag.
    pub fn with_args(inner: Condition) -> Condition {
        Condition::WithArgs(Box::new(inner))
    }

    /// Conjunction over field entries, in order.
    pub fn fields<A: Into<Atom>>(entries: impl IntoIterator<Item = (A, Condition)>) -> Condition {
        Condition::Fields(
            entries
                .into_iter()
                .map(|(k, c)| (k.into(), c))
                .collect(),
        )
    }

    /// Reinterpret a resolved value as a condition.
    ///
    /// `Ref` conditions re-enter evaluation with whatever value the path
    /// resolved to: an atom becomes a predicate reference, anything else a
    /// literal match. This preserves the dynamic re-dispatch of the rule
    /// DSL in the typed tree.
    pub fn from_value(value: Value) -> Condition {
        match value {
            Value::Atom(name) => Condition::Pred(name),
            other => Condition::Equals(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_atom_becomes_predicate() {
        assert_eq!(
            Condition::from_value(Value::atom("adult")),
            Condition::Pred(Atom::new("adult"))
        );
    }

    #[test]
    fn test_from_value_other_becomes_literal() {
        assert_eq!(
            Condition::from_value(Value::Bool(true)),
            Condition::Equals(Value::Bool(true))
        );
        assert_eq!(
            Condition::from_value(Value::int(3)),
            Condition::Equals(Value::int(3))
        );
    }
}
