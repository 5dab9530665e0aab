//! Shared handle types for the aliasable value kinds

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{List, Mapping, Object, Tuple};

macro_rules! shared_handle {
    ($(#[$meta:meta])* $name:ident, $inner:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name(Arc<RwLock<$inner>>);

        impl $name {
            /// Wrap a freshly built container in a new shared cell.
            pub fn new(inner: $inner) -> Self {
                Self(Arc::new(RwLock::new(inner)))
            }

            /// Borrow the container for reading.
            ///
            /// Read borrows nest, so comparing a container against an alias
            /// of itself does not block.
            pub fn read(&self) -> RwLockReadGuard<'_, $inner> {
                self.0.read_recursive()
            }

            /// Borrow the container for writing.
            pub fn write(&self) -> RwLockWriteGuard<'_, $inner> {
                self.0.write()
            }

            /// Whether both handles alias the same cell.
            pub fn ptr_eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0)
            }

            /// Number of live aliases of this cell.
            pub fn alias_count(&self) -> usize {
                Arc::strong_count(&self.0)
            }
        }
    };
}

shared_handle!(
    /// Shared, mutable handle to a [`List`].
    ListRef,
    List
);

shared_handle!(
    /// Shared, mutable handle to a [`Mapping`].
    MappingRef,
    Mapping
);

shared_handle!(
    /// Shared, mutable handle to an [`Object`].
    ObjectRef,
    Object
);

/// Shared handle to a [`Tuple`].
///
/// Tuples expose no mutation, so no lock is needed; the slots may still
/// hold aliased containers that are mutated elsewhere.
#[derive(Debug, Clone)]
pub struct TupleRef(Arc<Tuple>);

impl TupleRef {
    /// Wrap a tuple in a new shared handle.
    pub fn new(inner: Tuple) -> Self {
        Self(Arc::new(inner))
    }

    /// Whether both handles alias the same tuple.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live aliases of this tuple.
    pub fn alias_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl std::ops::Deref for TupleRef {
    type Target = Tuple;

    fn deref(&self) -> &Tuple {
        &self.0
    }
}
