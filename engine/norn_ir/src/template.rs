//! The value side of the rule DSL.
//!
//! A value template mirrors ordinary data (scalars, lists, maps, records)
//! plus the special shapes the projector interprets: references, bound
//! variables, and function application. Projection lives in `norn_eval`.

use std::fmt;

use crate::{ArgSpec, Atom, EvalError, FunInfo, Heap, PathRef, RecordType, Value};

/// Signature of a template callable.
///
/// Callables are pure from the engine's perspective; a returned error
/// message surfaces as a `Call`-kind evaluation error.
pub type TemplateFn = fn(&[Value]) -> Result<Value, String>;

/// A callable together with its normalized argument metadata.
///
/// Construction runs the `FunInfo` normalizer, so invalid annotations are
/// rejected before the function can appear in a template.
#[derive(Clone)]
pub struct NamedFn {
    pub name: Atom,
    pub call: TemplateFn,
    pub info: FunInfo,
}

impl NamedFn {
    /// Describe and normalize a callable.
    pub fn new(
        module: impl Into<Atom>,
        name: impl Into<Atom>,
        arity: usize,
        spec: ArgSpec,
        call: TemplateFn,
    ) -> Result<NamedFn, EvalError> {
        let name = name.into();
        let info = FunInfo::new(module, name.clone(), arity, spec)?;
        Ok(NamedFn { name, call, info })
    }
}

impl fmt::Debug for NamedFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&{}/{}", self.name, self.info.arity)
    }
}

/// Function identity is the name plus metadata; the code pointer is not
/// compared.
impl PartialEq for NamedFn {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.info == other.info
    }
}

/// Function application inside a value template.
#[derive(Clone, Debug, PartialEq)]
pub struct FnCall {
    pub fun: NamedFn,
    /// Arguments, projected in order before the callable is applied.
    pub args: Vec<ValueTemplate>,
}

/// A record reconstruction template: fields are projected, then the record
/// is rebuilt with the same type tag.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordTemplate {
    pub ty: Heap<RecordType>,
    pub fields: Vec<(Atom, ValueTemplate)>,
}

/// A declarative value tree.
#[derive(Clone, Debug, PartialEq)]
pub enum ValueTemplate {
    /// Passed through unchanged.
    Const(Value),
    /// Project the value the path resolves to.
    Ref(PathRef),
    /// Apply a callable to projected arguments.
    Call(FnCall),
    /// Look up a variable captured by `Bind`; absent is an error.
    Bound(Atom),
    /// Look up a variable captured by `Bind`; absent yields the default.
    BoundOr(Atom, Value),
    /// Project every entry value, keys preserved.
    Map(Vec<(Atom, ValueTemplate)>),
    /// Project every element.
    ListOf(Vec<ValueTemplate>),
    /// Project fields and reconstruct with the same type tag.
    Record(RecordTemplate),
}

impl ValueTemplate {
    /// A map template from key/template pairs.
    pub fn map<A: Into<Atom>>(entries: impl IntoIterator<Item = (A, ValueTemplate)>) -> Self {
        ValueTemplate::Map(entries.into_iter().map(|(k, t)| (k.into(), t)).collect())
    }

    /// A bound-variable template with a default.
    pub fn bound_or(key: impl Into<Atom>, default: Value) -> Self {
        ValueTemplate::BoundOr(key.into(), default)
    }
}
