//! Data requests carried by pending results.

use norn_ir::{Atom, Record};
use smallvec::SmallVec;

/// What kind of data a request asks the loader for.
///
/// The engine itself only emits `Assoc`; hosts may define further kinds
/// and pass them through their own loaders.
#[derive(Clone, Debug, PartialEq)]
pub enum LookupKind {
    /// A deferred association on a record.
    Assoc,
    /// A host-defined kind.
    Custom(Atom),
}

/// A single blocked data requirement: "fetch `key` on `container`".
#[derive(Clone, Debug, PartialEq)]
pub struct DataRequest {
    pub kind: LookupKind,
    pub container: Record,
    pub key: Atom,
}

impl DataRequest {
    /// An association request.
    pub fn assoc(container: Record, key: impl Into<Atom>) -> DataRequest {
        DataRequest {
            kind: LookupKind::Assoc,
            container,
            key: key.into(),
        }
    }
}

/// The unordered multiset of requirements blocking an evaluation.
///
/// Concatenation is plain `extend`; deduplication is the loader's concern,
/// not the engine's. Most evaluations block on at most a couple of
/// requests, hence the inline capacity.
pub type Requests = SmallVec<[DataRequest; 2]>;
