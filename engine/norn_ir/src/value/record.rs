//! Typed records: the subjects rules are evaluated against.
//!
//! A record carries a type tag (through its `RecordType` handle) and a bag
//! of fields. A field is either a loaded value or a `Deferred` marker for
//! an association that has not been fetched yet; the evaluator turns a
//! deferred field into a loader lookup.

use std::cmp::Ordering;
use std::fmt;

use rustc_hash::FxHashMap;

use super::{Heap, Value};
use crate::Atom;

/// Comparison hook a record type may expose for typed-literal matching.
pub type RecordCompare = fn(&Record, &Record) -> Ordering;

/// Runtime descriptor of a record type: the type tag plus optional
/// capabilities.
pub struct RecordType {
    /// The type tag. Two records are of the same type when their tags match.
    pub name: Atom,
    /// Optional domain ordering. When present, typed-literal conditions
    /// match via `compare(a, b) == Ordering::Equal` instead of structural
    /// equality.
    pub compare: Option<RecordCompare>,
}

impl RecordType {
    /// Create a type descriptor handle.
    pub fn new(name: impl Into<Atom>) -> Heap<RecordType> {
        Heap::new(RecordType {
            name: name.into(),
            compare: None,
        })
    }

    /// Create a type descriptor handle with a `compare` capability.
    pub fn with_compare(name: impl Into<Atom>, compare: RecordCompare) -> Heap<RecordType> {
        Heap::new(RecordType {
            name: name.into(),
            compare: Some(compare),
        })
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordType")
            .field("name", &self.name)
            .field("compare", &self.compare.map(|_| "fn"))
            .finish()
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// A record field slot.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldSlot {
    /// A present value.
    Loaded(Value),
    /// An association that has not been fetched; resolving it emits a data
    /// request through the loader.
    Deferred,
}

/// A typed record instance.
#[derive(Clone, Debug)]
pub struct Record {
    ty: Heap<RecordType>,
    fields: Heap<FxHashMap<Atom, FieldSlot>>,
}

impl Record {
    /// Create a record of the given type from field slots.
    pub fn new(
        ty: Heap<RecordType>,
        fields: impl IntoIterator<Item = (Atom, FieldSlot)>,
    ) -> Record {
        Record {
            ty,
            fields: Heap::new(fields.into_iter().collect()),
        }
    }

    /// The record's type tag.
    #[inline]
    pub fn type_name(&self) -> &Atom {
        &self.ty.name
    }

    /// The record's type descriptor.
    #[inline]
    pub fn ty(&self) -> &RecordType {
        &self.ty
    }

    /// Look up a field slot by name.
    #[inline]
    pub fn field(&self, key: &Atom) -> Option<&FieldSlot> {
        self.fields.get(key.as_str())
    }

    /// Whether two records carry the same type tag.
    #[inline]
    pub fn same_type(&self, other: &Record) -> bool {
        self.ty.name == other.ty.name
    }

    /// A copy of this record with one field replaced.
    ///
    /// Hosts use this to merge loaded association data back into a subject
    /// between trampoline passes.
    pub fn with_field(&self, key: impl Into<Atom>, slot: FieldSlot) -> Record {
        let mut fields: FxHashMap<Atom, FieldSlot> = (*self.fields).clone();
        fields.insert(key.into(), slot);
        Record {
            ty: self.ty.clone(),
            fields: Heap::new(fields),
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.same_type(other) && self.fields == other.fields
    }
}
