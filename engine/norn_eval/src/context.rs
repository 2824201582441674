//! Runtime context for one evaluation tree.

use norn_ir::{Atom, Record, RuleSource, Value};

use crate::outcome::{Bindings, Outcome};
use crate::request::LookupKind;

/// External collaborator that resolves data requests against a cache.
///
/// The single seam between the engine and the host's data store. The
/// engine never performs I/O itself: a deferred association turns into a
/// `lookup` call, and the loader either produces the value (from its
/// cache) or returns `Pending` carrying the concrete request the host
/// must satisfy before re-invoking the engine.
pub trait DataLoader {
    /// Host-owned cache handle; the engine passes it through untouched
    /// and never writes to it.
    type Cache;

    /// Resolve `key` on `container` for the given request kind.
    fn lookup(
        &self,
        cache: &Self::Cache,
        kind: LookupKind,
        container: &Record,
        key: &Atom,
    ) -> Outcome<Value>;
}

/// Runtime context threaded through a single evaluation tree.
///
/// The engine is synchronous and re-entrant: a context borrows its
/// collaborators, performs no I/O, and can be dropped and rebuilt with the
/// same inputs to replay an evaluation after the host has loaded the
/// requested data.
pub struct Evaluation<'e, L: DataLoader> {
    /// Subject at the top of the current evaluation; stable across the
    /// subtree. Rule matching rebinds it when descending into a nested
    /// subject.
    pub root: Value,
    /// External argument bag, reachable through args-rooted refs.
    pub args: Value,
    /// Active bindings: populated by `Bind` conditions, consumed by
    /// `Bound` templates. Local to one rule attempt.
    pub binds: Bindings,
    /// Rule registry.
    pub rules: &'e dyn RuleSource,
    pub loader: &'e L,
    pub cache: &'e L::Cache,
    /// Emit a trace line per rule attempt.
    pub debug: bool,
}

impl<'e, L: DataLoader> Evaluation<'e, L> {
    /// A context with an empty argument bag and no bindings.
    pub fn new(
        root: Value,
        rules: &'e dyn RuleSource,
        loader: &'e L,
        cache: &'e L::Cache,
    ) -> Evaluation<'e, L> {
        Evaluation {
            root,
            args: Value::map_from([]),
            binds: Bindings::default(),
            rules,
            loader,
            cache,
            debug: false,
        }
    }

    /// Attach an argument bag.
    #[must_use]
    pub fn with_args(mut self, args: Value) -> Self {
        self.args = args;
        self
    }

    /// Toggle per-rule-attempt trace lines.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// A derived context rooted at a nested subject.
    ///
    /// Used by the rule matcher: predicates resolved on an inner record
    /// see that record as their root. Bindings start empty; they never
    /// cross rule attempts.
    pub(crate) fn scoped_to(&self, root: Value) -> Evaluation<'e, L> {
        Evaluation {
            root,
            args: self.args.clone(),
            binds: Bindings::default(),
            rules: self.rules,
            loader: self.loader,
            cache: self.cache,
            debug: self.debug,
        }
    }

    /// A derived context carrying captured bindings, for value projection.
    pub(crate) fn with_binds(&self, binds: Bindings) -> Evaluation<'e, L> {
        Evaluation {
            root: self.root.clone(),
            args: self.args.clone(),
            binds,
            rules: self.rules,
            loader: self.loader,
            cache: self.cache,
            debug: self.debug,
        }
    }
}
