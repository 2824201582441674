//! Reducers over sequences of three-valued outcomes.
//!
//! All sequence reducers are expressed through one primitive, `combine`,
//! which folds an accumulator against the next outcome under a `Mode`:
//!
//! - `All`: a determined `false` conclusively fixes the conjunction, even
//!   past accumulated requests (they can no longer change the outcome and
//!   are dropped). A determined `true` keeps going.
//! - `Any`: the dual: a determined `true` halts and drops requests.
//! - `First`: first-match selection. A determined `true` after accumulated
//!   requests does NOT win: an earlier pending element may still resolve
//!   true first, so the reduction halts with the gathered requests.
//!
//! Errors are absorbing in every mode and discard gathered requests.

use std::ops::ControlFlow;

use norn_ir::Atom;

use crate::outcome::{transform, Bindings, Outcome, Partial, Truth};
use crate::request::Requests;

/// Reduction mode for `combine`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Conjunction (`all?`).
    All,
    /// Disjunction (`any?`).
    Any,
    /// First-match selection; pending elements block later matches.
    First,
}

/// One step of the shared reduction primitive.
///
/// `acc` is the reduction state so far: `Done(_)` while everything has
/// been determined, `Pending(reqs)` once requests have accumulated. An
/// error never becomes the accumulator; it halts immediately.
pub fn combine(
    acc: Partial<bool>,
    next: Outcome<bool>,
    mode: Mode,
) -> ControlFlow<Outcome<bool>, Partial<bool>> {
    let next = match next {
        Ok(partial) => partial,
        Err(e) => return ControlFlow::Break(Err(e)),
    };
    match next {
        Partial::Pending(more) => {
            let requests = match acc {
                Partial::Done(_) => more,
                Partial::Pending(mut gathered) => {
                    gathered.extend(more);
                    gathered
                }
            };
            ControlFlow::Continue(Partial::Pending(requests))
        }
        Partial::Done(determined) => match mode {
            Mode::All => {
                if determined {
                    ControlFlow::Continue(acc)
                } else {
                    ControlFlow::Break(Ok(Partial::Done(false)))
                }
            }
            Mode::Any => {
                if determined {
                    ControlFlow::Break(Ok(Partial::Done(true)))
                } else {
                    ControlFlow::Continue(acc)
                }
            }
            Mode::First => {
                if determined {
                    match acc {
                        Partial::Done(_) => ControlFlow::Break(Ok(Partial::Done(true))),
                        Partial::Pending(gathered) => {
                            ControlFlow::Break(Ok(Partial::Pending(gathered)))
                        }
                    }
                } else {
                    ControlFlow::Continue(acc)
                }
            }
        },
    }
}

/// Conjunction over a sequence of boolean outcomes.
pub fn all(outcomes: impl IntoIterator<Item = Outcome<bool>>) -> Outcome<bool> {
    let mut acc = Partial::Done(true);
    for outcome in outcomes {
        match combine(acc, outcome, Mode::All) {
            ControlFlow::Continue(next) => acc = next,
            ControlFlow::Break(result) => return result,
        }
    }
    Ok(acc)
}

/// Disjunction over a sequence of boolean outcomes.
pub fn any(outcomes: impl IntoIterator<Item = Outcome<bool>>) -> Outcome<bool> {
    let mut acc = Partial::Done(false);
    for outcome in outcomes {
        match combine(acc, outcome, Mode::Any) {
            ControlFlow::Continue(next) => acc = next,
            ControlFlow::Break(result) => return result,
        }
    }
    Ok(acc)
}

/// Conjunction with a per-element mapper.
pub fn all_by<T>(
    items: impl IntoIterator<Item = T>,
    f: impl FnMut(T) -> Outcome<bool>,
) -> Outcome<bool> {
    all(items.into_iter().map(f))
}

/// Disjunction with a per-element mapper.
pub fn any_by<T>(
    items: impl IntoIterator<Item = T>,
    f: impl FnMut(T) -> Outcome<bool>,
) -> Outcome<bool> {
    any(items.into_iter().map(f))
}

/// First element whose predicate determines `true`.
///
/// Pending predicates block later determined matches: their requests are
/// gathered and returned instead of the match. Exhaustion with nothing
/// pending yields `Done(None)`.
pub fn first<T>(
    items: impl IntoIterator<Item = T>,
    mut pred: impl FnMut(&T) -> Outcome<bool>,
) -> Outcome<Option<T>> {
    let mut acc = Partial::Done(false);
    for item in items {
        match combine(acc, pred(&item), Mode::First) {
            ControlFlow::Continue(next) => acc = next,
            ControlFlow::Break(result) => {
                return match result? {
                    Partial::Done(_) => Ok(Partial::Done(Some(item))),
                    Partial::Pending(requests) => Ok(Partial::Pending(requests)),
                }
            }
        }
    }
    match acc {
        Partial::Done(_) => Ok(Partial::Done(None)),
        Partial::Pending(requests) => Ok(Partial::Pending(requests)),
    }
}

/// First-match selection with bindings threading.
///
/// `cond` is applied under `First` semantics; on a determined hold with no
/// gathered requests, `then` consumes the element together with the
/// bindings its condition captured. Exhaustion with all-fails yields
/// `Done(None)`, the caller's "nothing matched" sentinel.
pub fn find<T, U>(
    items: impl IntoIterator<Item = T>,
    mut cond: impl FnMut(&T) -> Outcome<Truth>,
    then: impl FnOnce(T, Bindings) -> Outcome<U>,
) -> Outcome<Option<U>> {
    let mut gathered = Requests::new();
    for item in items {
        match cond(&item)? {
            Partial::Done(Truth::Holds(bindings)) => {
                if gathered.is_empty() {
                    return transform(then(item, bindings), Some);
                }
                // An earlier pending element may still resolve true first.
                return Ok(Partial::Pending(gathered));
            }
            Partial::Done(Truth::Fails) => {}
            Partial::Pending(requests) => gathered.extend(requests),
        }
    }
    if gathered.is_empty() {
        Ok(Partial::Done(None))
    } else {
        Ok(Partial::Pending(gathered))
    }
}

/// Conjunction over bindings-carrying verdicts.
///
/// Captures merge across holding entries. A determined failure fixes the
/// conjunction immediately, dropping gathered requests.
pub fn all_hold(outcomes: impl IntoIterator<Item = Outcome<Truth>>) -> Outcome<Truth> {
    let mut bindings = Bindings::default();
    let mut gathered = Requests::new();
    for outcome in outcomes {
        match outcome? {
            Partial::Done(Truth::Holds(captured)) => bindings.extend(captured),
            Partial::Done(Truth::Fails) => return Ok(Partial::Done(Truth::Fails)),
            Partial::Pending(requests) => gathered.extend(requests),
        }
    }
    if gathered.is_empty() {
        Ok(Partial::Done(Truth::Holds(bindings)))
    } else {
        Ok(Partial::Pending(gathered))
    }
}

/// Disjunction over bindings-carrying verdicts.
///
/// The first determined hold wins with its own captures, even past
/// pending branches; a determined truth fixes the disjunction.
pub fn any_holds(outcomes: impl IntoIterator<Item = Outcome<Truth>>) -> Outcome<Truth> {
    let mut gathered = Requests::new();
    for outcome in outcomes {
        match outcome? {
            Partial::Done(Truth::Holds(bindings)) => {
                return Ok(Partial::Done(Truth::Holds(bindings)))
            }
            Partial::Done(Truth::Fails) => {}
            Partial::Pending(requests) => gathered.extend(requests),
        }
    }
    if gathered.is_empty() {
        Ok(Partial::Done(Truth::Fails))
    } else {
        Ok(Partial::Pending(gathered))
    }
}

/// Element-wise projection over a sequence.
///
/// Requests concatenate across elements (a pending element does not stop
/// later ones from being inspected); an error short-circuits.
pub fn map_list<T, U>(
    items: impl IntoIterator<Item = T>,
    mut f: impl FnMut(T) -> Outcome<U>,
) -> Outcome<Vec<U>> {
    let mut out = Vec::new();
    let mut gathered = Requests::new();
    for item in items {
        match f(item)? {
            Partial::Done(value) => out.push(value),
            Partial::Pending(requests) => gathered.extend(requests),
        }
    }
    if gathered.is_empty() {
        Ok(Partial::Done(out))
    } else {
        Ok(Partial::Pending(gathered))
    }
}

/// Entry-wise projection over keyed entries, keys preserved in order.
pub fn map_fields<T, U>(
    entries: impl IntoIterator<Item = (Atom, T)>,
    mut f: impl FnMut(T) -> Outcome<U>,
) -> Outcome<Vec<(Atom, U)>> {
    let mut out = Vec::new();
    let mut gathered = Requests::new();
    for (key, value) in entries {
        match f(value)? {
            Partial::Done(projected) => out.push((key, projected)),
            Partial::Pending(requests) => gathered.extend(requests),
        }
    }
    if gathered.is_empty() {
        Ok(Partial::Done(out))
    } else {
        Ok(Partial::Pending(gathered))
    }
}
