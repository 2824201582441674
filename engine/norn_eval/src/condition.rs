//! Condition evaluation.
//!
//! Reduces a condition tree against a subject to a bindings-carrying
//! boolean verdict. Dispatch is by the shape of the condition, except
//! that subject shape is checked first: a list subject is a disjunction
//! over its elements no matter what the condition looks like, which is
//! the tie-break that keeps "list subject" and "list condition" from
//! colliding.

use std::cmp::Ordering;

use norn_ir::{Condition, Value};

use crate::algebra::{all_hold, any_holds};
use crate::context::{DataLoader, Evaluation};
use crate::outcome::{bind, then, transform, Outcome, Partial, Truth};
use crate::resolve::{resolve, resolve_ref};

/// Evaluate `cond` against `subject`.
pub fn evaluate_condition<L: DataLoader>(
    cond: &Condition,
    subject: &Value,
    cx: &Evaluation<'_, L>,
) -> Outcome<Truth> {
    // Subject shape first: any element matching suffices.
    if let Value::List(elements) = subject {
        return any_holds(
            elements
                .iter()
                .map(|element| evaluate_condition(cond, element, cx)),
        );
    }

    match cond {
        Condition::AnyOf(options) => any_holds(
            options
                .iter()
                .map(|option| evaluate_condition(option, subject, cx)),
        ),
        Condition::Fields(entries) => all_hold(entries.iter().map(|(key, sub)| {
            then(resolve(key, subject, cx), |resolved| {
                evaluate_condition(sub, &resolved, cx)
            })
        })),
        Condition::Not(inner) => match evaluate_condition(inner, subject, cx)? {
            // Negation drops any captures made in the negated subtree.
            Partial::Done(verdict) => Ok(Partial::Done(Truth::from_bool(!verdict.as_bool()))),
            pending @ Partial::Pending(_) => Ok(pending),
        },
        Condition::Ref(path) => then(resolve_ref(path, cx), |resolved| {
            evaluate_condition(&Condition::from_value(resolved), subject, cx)
        }),
        Condition::Bind(key, inner) => {
            bind(evaluate_condition(inner, subject, cx), key, subject)
        }
        Condition::WithArgs(inner) => {
            if *subject == cx.root {
                let args = cx.args.clone();
                evaluate_condition(inner, &args, cx)
            } else {
                // Off-root, the switch silently fails to match.
                Ok(Partial::Done(Truth::Fails))
            }
        }
        Condition::Pred(name) => transform(resolve(name, subject, cx), |resolved| {
            Truth::from_bool(resolved.is_true())
        }),
        Condition::Equals(expected) => Ok(Partial::Done(Truth::from_bool(values_match(
            subject, expected,
        )))),
    }
}

/// Literal match. Records of the same type use the type's `compare`
/// capability when one is present; everything else is structural equality.
fn values_match(subject: &Value, expected: &Value) -> bool {
    if let (Value::Record(a), Value::Record(b)) = (subject, expected) {
        if a.same_type(b) {
            if let Some(compare) = a.ty().compare {
                return compare(a, b) == Ordering::Equal;
            }
        }
    }
    subject == expected
}
