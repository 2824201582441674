//! Value projection.
//!
//! Reduces a value template to a concrete value under the current
//! evaluation context: references resolve against the root subject or
//! argument bag, bound variables come from the captures made by the
//! matched condition, and function calls project all arguments (gathering
//! requests across them) before applying the callable.

use norn_ir::{errors, FieldSlot, FnCall, Record, Value, ValueTemplate};

use crate::algebra::{map_fields, map_list};
use crate::context::{DataLoader, Evaluation};
use crate::outcome::{then, transform, Outcome, Partial};
use crate::resolve::resolve_ref;

/// Project `template` to a value.
pub fn project<L: DataLoader>(
    template: &ValueTemplate,
    cx: &Evaluation<'_, L>,
) -> Outcome<Value> {
    match template {
        ValueTemplate::Const(value) => Ok(Partial::Done(value.clone())),
        ValueTemplate::Ref(path) => resolve_ref(path, cx),
        ValueTemplate::Bound(key) => match cx.binds.get(key) {
            Some(value) => Ok(Partial::Done(value.clone())),
            None => Err(errors::unbound_variable(key)),
        },
        ValueTemplate::BoundOr(key, default) => Ok(Partial::Done(
            cx.binds.get(key).cloned().unwrap_or_else(|| default.clone()),
        )),
        ValueTemplate::ListOf(items) => transform(
            map_list(items.iter(), |item| project(item, cx)),
            Value::list,
        ),
        ValueTemplate::Map(entries) => transform(
            map_fields(
                entries.iter().map(|(key, value)| (key.clone(), value)),
                |value| project(value, cx),
            ),
            Value::map_from,
        ),
        ValueTemplate::Record(record) => transform(
            map_fields(
                record.fields.iter().map(|(key, value)| (key.clone(), value)),
                |value| project(value, cx),
            ),
            |fields| {
                // Reconstruct with the same type tag.
                Value::record(Record::new(
                    record.ty.clone(),
                    fields
                        .into_iter()
                        .map(|(key, value)| (key, FieldSlot::Loaded(value))),
                ))
            },
        ),
        ValueTemplate::Call(call) => apply(call, cx),
    }
}

/// Project a call's arguments in order, then apply the callable.
fn apply<L: DataLoader>(call: &FnCall, cx: &Evaluation<'_, L>) -> Outcome<Value> {
    then(
        map_list(call.args.iter(), |arg| project(arg, cx)),
        |args| {
            let info = &call.fun.info;
            if info.warn_always {
                tracing::warn!(fun = %call.fun.name, "flagged function applied");
            }
            match (call.fun.call)(&args) {
                Ok(value) => Ok(Partial::Done(value)),
                Err(message) => {
                    if info.warn_not_ok {
                        tracing::warn!(fun = %call.fun.name, %message, "function did not return ok");
                    }
                    Err(errors::call_failed(&call.fun.name, &message))
                }
            }
        },
    )
}
