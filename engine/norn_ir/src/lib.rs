#![deny(clippy::arithmetic_side_effects)]
//! Norn IR - Data model for the Norn rule engine.
//!
//! This crate provides the types a rule declaration is made of:
//! - `Atom`: cheap-to-clone names for predicates, fields, and bind keys
//! - `Value` types (`Value`, `Heap`, `Record`, `RecordType`, `FieldSlot`)
//! - `Condition` and `ValueTemplate`: the declarative rule DSL
//! - `Rule`, `RuleSet`, `RuleSource`: ordered rule storage and lookup
//! - `FunInfo`: normalized per-function argument metadata
//! - `EvalError`: the terminal failure type shared with the evaluator
//!
//! # Value Types
//!
//! The value module enforces Arc usage for heap data:
//! - All heap allocations go through `Value::` factory methods
//! - The `Heap<T>` wrapper enforces this invariant
//! - Cloning a value shares the underlying allocation

mod atom;
mod condition;
pub mod errors;
mod fun_info;
mod path;
mod rule;
mod template;
mod value;

pub use atom::Atom;
pub use condition::Condition;
pub use errors::{ErrorKind, EvalError};
pub use fun_info::{ArgInfo, ArgInfoSpec, ArgSlot, ArgSpec, FunInfo};
pub use path::{PathRef, PathRoot};
pub use rule::{Rule, RuleSet, RuleSource};
pub use template::{FnCall, NamedFn, RecordTemplate, TemplateFn, ValueTemplate};
pub use value::{FieldSlot, Heap, Record, RecordCompare, RecordType, Value};
