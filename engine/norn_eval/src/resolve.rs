//! The resolve / fetch bridge between rules and record fields.
//!
//! `resolve` is the single entry point the rest of the engine goes
//! through: predicates resolve through the rule registry when rules are
//! declared, and fall through to a plain field fetch otherwise. `fetch`
//! is where deferred associations turn into loader lookups.

use norn_ir::{errors, Atom, FieldSlot, PathRef, PathRoot, Value};

use crate::context::{DataLoader, Evaluation};
use crate::outcome::{then, Outcome, Partial};
use crate::request::LookupKind;
use crate::rules::match_rules;

/// Resolve a predicate or field `name` on `subject`.
///
/// Record subjects consult the rule registry first; a matching rule's
/// projected value wins, and "no rule matched" falls through to a field
/// fetch. Map subjects fetch directly. Anything else cannot be resolved.
pub fn resolve<L: DataLoader>(
    name: &Atom,
    subject: &Value,
    cx: &Evaluation<'_, L>,
) -> Outcome<Value> {
    match subject {
        Value::Record(record) => {
            let rules = cx.rules.rules_for(record.type_name(), name);
            if rules.is_empty() {
                fetch(subject, name, cx)
            } else {
                then(match_rules(rules, subject, cx), |matched| match matched {
                    Some(value) => Ok(Partial::Done(value)),
                    None => fetch(subject, name, cx),
                })
            }
        }
        Value::Map(_) => fetch(subject, name, cx),
        other => Err(errors::not_resolvable(name, other.type_name())),
    }
}

/// Fetch `key` from a container, delegating deferred associations to the
/// loader.
pub fn fetch<L: DataLoader>(
    container: &Value,
    key: &Atom,
    cx: &Evaluation<'_, L>,
) -> Outcome<Value> {
    match container {
        Value::Record(record) => match record.field(key) {
            Some(FieldSlot::Loaded(value)) => Ok(Partial::Done(value.clone())),
            Some(FieldSlot::Deferred) => {
                cx.loader.lookup(cx.cache, LookupKind::Assoc, record, key)
            }
            None => Err(errors::key_not_found(key, record.type_name().as_str())),
        },
        Value::Map(entries) => match entries.get(key) {
            Some(value) => Ok(Partial::Done(value.clone())),
            None => Err(errors::key_not_found(key, "map")),
        },
        other => Err(errors::key_not_found(key, other.type_name())),
    }
}

/// Left-fold `resolve` along a path; a `Null` intermediate short-circuits
/// the rest of the path to `Null`.
pub fn resolve_path<L: DataLoader>(
    root: &Value,
    segments: &[Atom],
    cx: &Evaluation<'_, L>,
) -> Outcome<Value> {
    let mut current = root.clone();
    for segment in segments {
        if matches!(current, Value::Null) {
            return Ok(Partial::Done(Value::Null));
        }
        match resolve(segment, &current, cx)? {
            Partial::Done(next) => current = next,
            Partial::Pending(requests) => return Ok(Partial::Pending(requests)),
        }
    }
    Ok(Partial::Done(current))
}

impl<L: DataLoader> Evaluation<'_, L> {
    /// Resolve a predicate or field on this context's root subject.
    pub fn resolve(&self, name: &Atom) -> Outcome<Value> {
        resolve(name, &self.root, self)
    }
}

/// Resolve a reference path from its declared root.
pub(crate) fn resolve_ref<L: DataLoader>(
    path: &PathRef,
    cx: &Evaluation<'_, L>,
) -> Outcome<Value> {
    let root = match path.root {
        PathRoot::Subject => &cx.root,
        PathRoot::Args => &cx.args,
    };
    resolve_path(root, &path.segments, cx)
}
