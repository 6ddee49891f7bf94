//! Shared handle for injected strategy objects.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A cheaply clonable handle to an injected strategy.
///
/// Column renderers, visibility conditions, transforms and custom validators
/// are trait objects supplied by the host. Wrapping them here gives the
/// config structs `Clone` and `Debug` without requiring either from the
/// strategy itself.
pub struct Strategy<T: ?Sized>(Arc<T>);

impl<T: ?Sized> Strategy<T> {
    /// Wraps an already shared strategy.
    pub fn from_arc(inner: Arc<T>) -> Self {
        Self(inner)
    }
}

impl<T: ?Sized> Clone for Strategy<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Strategy<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> fmt::Debug for Strategy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Strategy(..)")
    }
}
