//! Runtime values for the Norn rule engine.
//!
//! # Arc Enforcement
//!
//! Heap allocations go through factory methods on `Value`; the `Heap<T>`
//! wrapper has a crate-private constructor, so external code cannot create
//! heap variants directly:
//!
//! ```text
//! let s = Value::string("hello");            // OK
//! let xs = Value::list(vec![Value::int(1)]); // OK
//! let s = Value::Str(Heap::new(...));        // ERROR: Heap::new is private
//! ```
//!
//! Cloning any value is cheap: heap payloads are shared.

mod heap;
mod record;

use std::fmt;

use rustc_hash::FxHashMap;

pub use heap::Heap;
pub use record::{FieldSlot, Record, RecordCompare, RecordType};

use crate::Atom;

/// A runtime value: a rule subject, a resolved field, or a projected result.
#[derive(Clone, Debug)]
pub enum Value {
    // Inline scalars
    /// Absent value. Short-circuits path resolution.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Atom value (a name used as data, e.g. an enum-like tag).
    Atom(Atom),

    // Heap data
    /// String value.
    Str(Heap<String>),
    /// List of values.
    List(Heap<Vec<Value>>),
    /// Map from atom keys to values.
    Map(Heap<FxHashMap<Atom, Value>>),

    /// Typed record.
    Record(Record),
}

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create an atom value.
    #[inline]
    pub fn atom(name: impl Into<Atom>) -> Self {
        Value::Atom(name.into())
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a map value.
    #[inline]
    pub fn map(entries: FxHashMap<Atom, Value>) -> Self {
        Value::Map(Heap::new(entries))
    }

    /// Create a map value from key/value pairs.
    pub fn map_from(pairs: impl IntoIterator<Item = (Atom, Value)>) -> Self {
        Value::Map(Heap::new(pairs.into_iter().collect()))
    }

    /// Create a record value.
    #[inline]
    pub fn record(record: Record) -> Self {
        Value::Record(record)
    }

    /// The value's type tag, for errors and trace lines.
    ///
    /// For records this is the record type's name; for everything else a
    /// fixed kind name.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Atom(_) => "atom",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Record(r) => r.type_name().as_str(),
        }
    }

    /// Whether this value is the boolean `true`.
    #[inline]
    pub fn is_true(&self) -> bool {
        matches!(self, Value::Bool(true))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Atom(a), Value::Atom(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len() && a.iter().all(|(k, v)| b.get(k) == Some(v))
            }
            (Value::Record(a), Value::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Atom(a) => write!(f, ":{a}"),
            Value::Str(s) => write!(f, "\"{}\"", &**s),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Record(r) => write!(f, "<{}>", r.type_name()),
        }
    }
}

#[cfg(test)]
mod tests;
