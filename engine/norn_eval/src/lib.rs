#![deny(clippy::arithmetic_side_effects)]
//! Norn Eval - partial rule evaluation engine.
//!
//! Computes declarative predicates and fields over typed records. Given a
//! record and a predicate name, `resolve` returns one of three outcomes:
//! a determined value, a terminal error, or a `Pending` marker listing the
//! data requests the host must satisfy before evaluation can finish.
//!
//! # Architecture
//!
//! - `algebra`: reducers over three-valued outcomes (`all`, `any`,
//!   `first`, `find`, `map_list`, ...), all built on one `combine`
//!   primitive
//! - `evaluate_condition`: reduces a condition tree against a subject to a
//!   bindings-carrying boolean verdict
//! - `project`: reduces a value template to a concrete value
//! - `match_rules`: ordered first-match rule selection
//! - `resolve`/`fetch`: the bridge from predicates to rules to record
//!   fields to loader lookups
//! - `Evaluation`: the context threading subject, args, bindings, rule
//!   registry, loader, and cache through one evaluation tree
//!
//! # Partial evaluation
//!
//! The engine is synchronous and performs no I/O. When data is missing it
//! returns `Partial::Pending` carrying the blocking requests; the host
//! loads them, populates its cache, and re-invokes the engine with the
//! same inputs. The trampoline makes progress monotonically until a
//! determined value or an error is produced.
//!
//! # Re-exports
//!
//! The rule DSL types from `norn_ir` are re-exported for convenience:
//! `Value`, `Record`, `Condition`, `ValueTemplate`, `Rule`, `RuleSet`,
//! `EvalError`, ...

pub mod algebra;
mod condition;
mod context;
mod outcome;
mod project;
mod request;
mod resolve;
mod rules;


pub use condition::evaluate_condition;
pub use context::{DataLoader, Evaluation};
pub use outcome::{bind, then, transform, Bindings, Outcome, Partial, Truth};
pub use project::project;
pub use request::{DataRequest, LookupKind, Requests};
pub use resolve::{fetch, resolve, resolve_path};
pub use rules::match_rules;

// Re-export the rule DSL from norn_ir
pub use norn_ir::{
    errors, ArgInfo, ArgInfoSpec, ArgSlot, ArgSpec, Atom, Condition, ErrorKind, EvalError,
    FieldSlot, FnCall, FunInfo, Heap, NamedFn, PathRef, PathRoot, Record, RecordCompare,
    RecordTemplate, RecordType, Rule, RuleSet, RuleSource, TemplateFn, Value, ValueTemplate,
};
