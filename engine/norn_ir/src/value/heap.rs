//! Arc-enforcement wrapper for heap-allocated value data.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Shared, immutable heap storage for value payloads.
///
/// The constructor is crate-private, so heap values can only be created
/// through factory methods (`Value::string`, `Value::list`, `Record::new`,
/// ...). This keeps every heap allocation reference-counted and every value
/// clone cheap.
#[repr(transparent)]
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    /// Create shared storage. Crate-private: use the `Value` factories.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        // Pointer equality first: a clone always equals its source.
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}

impl<T: Eq> Eq for Heap<T> {}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
