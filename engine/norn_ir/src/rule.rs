//! Rules and the ordered rule registry.

use rustc_hash::FxHashMap;

use crate::{Atom, Condition, ValueTemplate};

/// A single predicate rule: "when the condition holds, the predicate's
/// value is the projected template".
#[derive(Clone, Debug)]
pub struct Rule {
    /// Optional label, surfaced in trace lines.
    pub key: Option<Atom>,
    pub when: Condition,
    pub val: ValueTemplate,
}

impl Rule {
    pub fn new(when: Condition, val: ValueTemplate) -> Rule {
        Rule {
            key: None,
            when,
            val,
        }
    }

    pub fn keyed(key: impl Into<Atom>, when: Condition, val: ValueTemplate) -> Rule {
        Rule {
            key: Some(key.into()),
            when,
            val,
        }
    }
}

/// Source of ordered rules for a `(record type, predicate)` pair.
///
/// An empty slice means "no rules declared": resolution falls through to a
/// plain field fetch.
pub trait RuleSource {
    fn rules_for(&self, type_name: &Atom, predicate: &Atom) -> &[Rule];
}

/// Declaration-ordered rule registry.
///
/// Rules for the same `(type, predicate)` pair are kept in insertion
/// order; the matcher's first-match semantics make that order load-bearing.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: FxHashMap<Atom, FxHashMap<Atom, Vec<Rule>>>,
}

impl RuleSet {
    pub fn new() -> RuleSet {
        RuleSet::default()
    }

    /// Register a rule for a predicate on a record type, after any rules
    /// already declared for that pair.
    pub fn add(&mut self, type_name: impl Into<Atom>, predicate: impl Into<Atom>, rule: Rule) {
        self.rules
            .entry(type_name.into())
            .or_default()
            .entry(predicate.into())
            .or_default()
            .push(rule);
    }
}

impl RuleSource for RuleSet {
    fn rules_for(&self, type_name: &Atom, predicate: &Atom) -> &[Rule] {
        self.rules
            .get(type_name)
            .and_then(|preds| preds.get(predicate))
            .map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    fn rule(n: i64) -> Rule {
        Rule::new(
            Condition::Equals(Value::int(n)),
            ValueTemplate::Const(Value::int(n)),
        )
    }

    #[test]
    fn test_rules_kept_in_declaration_order() {
        let mut set = RuleSet::new();
        set.add("User", "tier", rule(1));
        set.add("User", "tier", rule(2));
        set.add("User", "tier", rule(3));

        let rules = set.rules_for(&Atom::new("User"), &Atom::new("tier"));
        let order: Vec<_> = rules
            .iter()
            .map(|r| match &r.when {
                Condition::Equals(Value::Int(n)) => *n,
                other => panic!("unexpected condition {other:?}"),
            })
            .collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_pair_is_empty() {
        let set = RuleSet::new();
        assert!(set.rules_for(&Atom::new("User"), &Atom::new("tier")).is_empty());
    }

    #[test]
    fn test_pairs_are_independent() {
        let mut set = RuleSet::new();
        set.add("User", "tier", rule(1));
        assert!(set.rules_for(&Atom::new("User"), &Atom::new("other")).is_empty());
        assert!(set.rules_for(&Atom::new("Org"), &Atom::new("tier")).is_empty());
    }
}
