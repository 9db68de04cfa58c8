//! A module for reporting diagnostics produced while scanning and parsing.

use std::sync::{RwLock, RwLockReadGuard};

use derive_more::{Deref, DerefMut};

/// Represents a sink that diagnostics are reported to.
///
/// Parse functions never stop on a diagnostic; they hand it to the handler and keep going, so the
/// handler decides whether a non-empty report is fatal.
pub trait Handler<T> {
    /// Receives a diagnostic and handles it.
    fn receive(&self, diagnostic: T);
}

/// Is a [`Handler`] that keeps every received diagnostic in arrival order.
#[derive(Debug, Deref, DerefMut)]
pub struct Storage<T: Send + Sync> {
    diagnostics: RwLock<Vec<T>>,
}

impl<T: Send + Sync> Storage<T> {
    /// Creates a new empty [`Storage`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            diagnostics: RwLock::new(Vec::new()),
        }
    }

    /// Consumes the [`Storage`] and returns the diagnostics in the order they were received.
    pub fn into_vec(self) -> Vec<T> { self.diagnostics.into_inner().unwrap() }

    /// Returns a read guard over the received diagnostics.
    pub fn as_vec(&self) -> RwLockReadGuard<Vec<T>> { self.diagnostics.read().unwrap() }

    /// Returns `true` if nothing has been reported yet.
    pub fn is_empty(&self) -> bool { self.as_vec().is_empty() }
}

impl<T: Send + Sync> Default for Storage<T> {
    fn default() -> Self { Self::new() }
}

impl<T: Send + Sync, U> Handler<U> for Storage<T>
where
    U: Into<T>,
{
    fn receive(&self, diagnostic: U) { self.diagnostics.write().unwrap().push(diagnostic.into()); }
}

#[cfg(test)]
mod tests {
    use super::{Handler, Storage};

    #[test]
    fn storage_keeps_arrival_order() {
        let storage: Storage<String> = Storage::new();
        assert!(storage.is_empty());

        storage.receive("first");
        storage.receive(String::from("second"));

        assert!(!storage.is_empty());
        assert_eq!(storage.into_vec(), vec!["first", "second"]);
    }
}
