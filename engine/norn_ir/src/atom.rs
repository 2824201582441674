//! Names for predicates, fields, bind keys, and functions.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A cheap-to-clone name.
///
/// Atoms identify predicates, record fields, bind keys, and template
/// functions. Cloning shares the underlying allocation, so atoms can be
/// copied into results and bindings freely.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom(Arc<str>);

impl Atom {
    /// Create an atom from a string.
    pub fn new(name: impl AsRef<str>) -> Self {
        Atom(Arc::from(name.as_ref()))
    }

    /// View the atom as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Atom {
    fn from(name: &str) -> Self {
        Atom::new(name)
    }
}

impl From<String> for Atom {
    fn from(name: String) -> Self {
        Atom(Arc::from(name))
    }
}

/// Lets atom-keyed maps be queried with plain string slices.
impl Borrow<str> for Atom {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_equality() {
        assert_eq!(Atom::new("age"), Atom::from("age"));
        assert_ne!(Atom::new("age"), Atom::new("name"));
    }

    #[test]
    fn test_atom_clone_shares_allocation() {
        let a = Atom::new("owner");
        let b = a.clone();
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_atom_borrow_str_lookup() {
        let mut map = rustc_hash::FxHashMap::default();
        map.insert(Atom::new("status"), 1);
        assert_eq!(map.get("status"), Some(&1));
    }
}
