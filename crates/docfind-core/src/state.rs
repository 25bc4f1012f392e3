//! Immutable shared-value container.
//!
//! Provides [`Shared<T>`], a thread-safe handle to a value that is built
//! once at initialization and never mutated afterwards. A search index is
//! produced in one batch by the documentation generator and replaced
//! wholesale on the next build; the in-process representation mirrors that
//! lifecycle: construct, share by cheap clone, drop. There is no interior
//! mutability and no locking.
//!
//! # Example
//!
//! ```
//! use docfind_core::Shared;
//!
//! let handle = Shared::new(vec!["parametric/", "nonparametric/"]);
//! let other = handle.clone();
//!
//! assert_eq!(handle.get().len(), 2);
//! assert_eq!(other.get()[0], "parametric/");
//! ```

use std::sync::Arc;

/// Thread-safe handle to an immutable shared value.
///
/// `Shared<T>` is `Clone`, `Send`, and `Sync` (for `T: Send + Sync`).
/// Cloning is cheap (Arc clone). Replacing the value means constructing a
/// new `Shared` and handing it out; existing handles keep the old value
/// alive until dropped.
#[derive(Debug)]
pub struct Shared<T> {
    inner: Arc<T>,
}

impl<T> Shared<T> {
    /// Wrap a value in a shared handle.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Create a handle from an existing Arc-wrapped value.
    ///
    /// Useful when the value is already shared elsewhere.
    pub fn from_arc(inner: Arc<T>) -> Self {
        Self { inner }
    }

    /// Get a reference to the value.
    pub fn get(&self) -> &T {
        &self.inner
    }

    /// Get a cloneable `Arc` to the value.
    ///
    /// For subsystems that want their own owned reference.
    pub fn as_arc(&self) -> Arc<T> {
        Arc::clone(&self.inner)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::ops::Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}
