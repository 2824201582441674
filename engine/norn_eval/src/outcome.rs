//! The three-valued result type threading every evaluation.
//!
//! An evaluation step is determined (`Done`), blocked on data
//! (`Pending`), or failed. Failure rides the outer `Result`, so `?` gives
//! error absorption for free: once an error is produced, accumulated
//! requests are dropped and nothing downstream runs.

use norn_ir::{Atom, EvalError, Value};
use rustc_hash::FxHashMap;

use crate::request::{DataRequest, Requests};

/// Bindings captured by `Bind` conditions and consumed by `Bound`
/// templates. Local to a single rule attempt.
pub type Bindings = FxHashMap<Atom, Value>;

/// A value that is either fully determined or blocked on unloaded data.
#[derive(Clone, Debug, PartialEq)]
pub enum Partial<T> {
    /// A determined value.
    Done(T),
    /// Evaluation cannot finish without the carried data requests.
    ///
    /// An empty request set is legal but denotes "stuck without known
    /// reason"; the engine never produces one itself.
    Pending(Requests),
}

/// Result of one evaluation step.
pub type Outcome<T> = Result<Partial<T>, EvalError>;

impl<T> Partial<T> {
    /// A pending result blocked on a single request.
    pub fn blocked_on(request: DataRequest) -> Partial<T> {
        let mut requests = Requests::new();
        requests.push(request);
        Partial::Pending(requests)
    }

    /// Map the determined payload.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Partial<U> {
        match self {
            Partial::Done(value) => Partial::Done(f(value)),
            Partial::Pending(requests) => Partial::Pending(requests),
        }
    }

    /// Whether this result is still blocked.
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Partial::Pending(_))
    }
}

/// Map the determined payload of an outcome; `Pending` and errors pass
/// through.
pub fn transform<T, U>(outcome: Outcome<T>, f: impl FnOnce(T) -> U) -> Outcome<U> {
    Ok(outcome?.map(f))
}

/// Monadic bind: feed a determined payload into the next step; `Pending`
/// and errors pass through.
pub fn then<T, U>(outcome: Outcome<T>, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
    match outcome? {
        Partial::Done(value) => f(value),
        Partial::Pending(requests) => Ok(Partial::Pending(requests)),
    }
}

/// Attach a capture to a holding verdict: when `outcome` determines a
/// hold, record `key -> subject` into the bindings it carries. Failing,
/// pending, and failed outcomes pass through untouched.
pub fn bind(outcome: Outcome<Truth>, key: &Atom, subject: &Value) -> Outcome<Truth> {
    match outcome? {
        Partial::Done(Truth::Holds(mut bindings)) => {
            bindings.insert(key.clone(), subject.clone());
            Ok(Partial::Done(Truth::Holds(bindings)))
        }
        other => Ok(other),
    }
}

/// A condition verdict: holds (carrying the bindings captured on the way)
/// or fails.
///
/// Bindings travel inside the result rather than through shared state, so
/// captures made while trying one rule can never leak into the next.
#[derive(Clone, Debug, PartialEq)]
pub enum Truth {
    Holds(Bindings),
    Fails,
}

impl Truth {
    /// A holding verdict with no captures.
    pub fn holds() -> Truth {
        Truth::Holds(Bindings::default())
    }

    /// `true` becomes an empty-capture hold, `false` a failure.
    pub fn from_bool(holds: bool) -> Truth {
        if holds {
            Truth::holds()
        } else {
            Truth::Fails
        }
    }

    /// The bare boolean, captures dropped.
    #[inline]
    pub fn as_bool(&self) -> bool {
        matches!(self, Truth::Holds(_))
    }
}

#[cfg(test)]
mod tests {
    use norn_ir::errors;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_transform_maps_done_only() {
        let done: Outcome<i64> = Ok(Partial::Done(2));
        assert_eq!(transform(done, |n| n == 2), Ok(Partial::Done(true)));

        let pending: Outcome<i64> = Ok(Partial::Pending(Requests::new()));
        assert_eq!(
            transform(pending, |n| n == 2),
            Ok(Partial::Pending(Requests::new()))
        );
    }

    #[test]
    fn test_then_chains_done_only() {
        let done: Outcome<i64> = Ok(Partial::Done(2));
        assert_eq!(
            then(done, |n| Ok(Partial::Done(n == 2))),
            Ok(Partial::Done(true))
        );

        let err: Outcome<i64> = Err(errors::loader_failed("down"));
        assert_eq!(
            then(err, |n| Ok(Partial::Done(n == 2))),
            Err(errors::loader_failed("down"))
        );
    }

    #[test]
    fn test_truth_round_trip() {
        assert!(Truth::from_bool(true).as_bool());
        assert!(!Truth::from_bool(false).as_bool());
    }

    #[test]
    fn test_bind_attaches_only_to_holds() {
        let key = Atom::new("it");
        let subject = Value::int(7);

        let held = bind(Ok(Partial::Done(Truth::holds())), &key, &subject);
        match held {
            Ok(Partial::Done(Truth::Holds(bindings))) => {
                assert_eq!(bindings.get("it"), Some(&Value::int(7)));
            }
            other => panic!("expected hold, got {other:?}"),
        }

        let failed = bind(Ok(Partial::Done(Truth::Fails)), &key, &subject);
        assert_eq!(failed, Ok(Partial::Done(Truth::Fails)));
    }
}
