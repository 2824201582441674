//! Ordered first-match rule selection.

use norn_ir::{Rule, Value};

use crate::algebra::find;
use crate::condition::evaluate_condition;
use crate::context::{DataLoader, Evaluation};
use crate::outcome::Outcome;
use crate::project::project;

/// Try `rules` in declaration order against `subject`.
///
/// The first rule whose condition determines `true` has its value
/// projected under the bindings the condition captured. An undetermined
/// earlier rule blocks later matches: the result is then `Pending` with
/// the gathered requests. `Done(None)` means no rule matched and the
/// caller should fall through to a field fetch.
pub fn match_rules<L: DataLoader>(
    rules: &[Rule],
    subject: &Value,
    cx: &Evaluation<'_, L>,
) -> Outcome<Option<Value>> {
    let scoped = cx.scoped_to(subject.clone());
    find(
        rules.iter(),
        |rule| {
            if scoped.debug {
                tracing::debug!(
                    subject = subject.type_name(),
                    condition = ?rule.when,
                    "rule attempt"
                );
            }
            evaluate_condition(&rule.when, subject, &scoped)
        },
        |rule, bindings| {
            if scoped.debug {
                tracing::debug!(
                    subject = subject.type_name(),
                    key = ?rule.key,
                    value = ?rule.val,
                    "rule matched"
                );
            }
            project(&rule.val, &scoped.with_binds(bindings))
        },
    )
}
