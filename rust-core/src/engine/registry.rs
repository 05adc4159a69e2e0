//! Reference-counted cache of twiddle tables
//!
//! Every transform of size N shares a single [`TwiddleTable`]. The registry
//! creates the table on the first request, counts outstanding handles and
//! keeps idle tables around until [`TableRegistry::clear`] is called.
//!
//! The lock only guards bookkeeping. Transforms read their table through the
//! handle's `Arc` without ever touching the registry.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::{debug, trace};

use super::twiddle::TwiddleTable;
use crate::error::Result;

struct Entry {
    table: Arc<TwiddleTable>,
    refs: usize,
}

struct RegistryInner {
    entries: Mutex<BTreeMap<usize, Entry>>,
}

impl RegistryInner {
    fn lock(&self) -> MutexGuard<'_, BTreeMap<usize, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a reference to an entry that is known to be alive
    fn retain(&self, size: usize) -> Arc<TwiddleTable> {
        let mut entries = self.lock();
        let entry = entries
            .get_mut(&size)
            .unwrap_or_else(|| panic!("no cached table of size {} to retain", size));
        entry.refs += 1;
        trace!(size, refs = entry.refs, "twiddle table retained");
        Arc::clone(&entry.table)
    }

    fn release(&self, size: usize) {
        let mut entries = self.lock();
        match entries.get_mut(&size) {
            Some(entry) if entry.refs > 0 => {
                entry.refs -= 1;
                trace!(size, refs = entry.refs, "twiddle table released");
            }
            _ => panic!(
                "released a reference to table of size {} that was never acquired",
                size
            ),
        }
    }
}

impl Drop for RegistryInner {
    fn drop(&mut self) {
        let entries = self.entries.get_mut().unwrap_or_else(PoisonError::into_inner);
        debug_assert!(
            entries.values().all(|entry| entry.refs == 0),
            "table registry destroyed while transforms still hold references"
        );
    }
}

/// Shared cache mapping transform size to its twiddle table
///
/// Cloning the registry is cheap and yields another handle to the same cache.
#[derive(Clone)]
pub struct TableRegistry {
    inner: Arc<RegistryInner>,
}

static GLOBAL_REGISTRY: OnceLock<TableRegistry> = OnceLock::new();

impl TableRegistry {
    /// Create an empty, independent registry
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                entries: Mutex::new(BTreeMap::new()),
            }),
        }
    }

    /// Process-wide registry used by the default transform constructors
    pub fn global() -> &'static TableRegistry {
        GLOBAL_REGISTRY.get_or_init(TableRegistry::new)
    }

    /// Acquire the table for `size`, building it on first use
    ///
    /// # Returns
    /// Handle that keeps one reference on the entry until dropped
    pub fn get(&self, size: usize) -> Result<TableHandle> {
        let mut entries = self.inner.lock();
        let table = match entries.get_mut(&size) {
            Some(entry) => {
                entry.refs += 1;
                trace!(size, refs = entry.refs, "twiddle table reused");
                Arc::clone(&entry.table)
            }
            None => {
                let table = Arc::new(TwiddleTable::new(size)?);
                entries.insert(
                    size,
                    Entry {
                        table: Arc::clone(&table),
                        refs: 1,
                    },
                );
                debug!(size, cached = entries.len(), "twiddle table created");
                table
            }
        };

        Ok(TableHandle {
            table,
            registry: Arc::clone(&self.inner),
        })
    }

    /// Give a handle back to this registry
    ///
    /// Equivalent to dropping the handle, but also checks that the handle
    /// was issued by this registry.
    pub fn put(&self, handle: TableHandle) {
        assert!(
            Arc::ptr_eq(&self.inner, &handle.registry),
            "table handle returned to a registry that did not issue it"
        );
        drop(handle);
    }

    /// Remove every idle table (reference count zero)
    ///
    /// # Returns
    /// Number of tables removed
    pub fn clear(&self) -> usize {
        let mut entries = self.inner.lock();
        let before = entries.len();
        entries.retain(|_, entry| entry.refs > 0);
        let removed = before - entries.len();
        debug!(removed, remaining = entries.len(), "idle twiddle tables cleared");
        removed
    }

    /// Number of cached tables, idle ones included
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Outstanding references on the table for `size`, if it is cached
    pub fn ref_count(&self, size: usize) -> Option<usize> {
        self.inner.lock().get(&size).map(|entry| entry.refs)
    }

    /// Cached sizes in ascending order
    pub fn cached_sizes(&self) -> Vec<usize> {
        self.inner.lock().keys().copied().collect()
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TableRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.inner.lock();
        f.debug_map()
            .entries(entries.iter().map(|(size, entry)| (size, entry.refs)))
            .finish()
    }
}

/// One counted reference to a cached twiddle table
///
/// Dropping the handle releases the reference. Cloning takes a new one.
pub struct TableHandle {
    table: Arc<TwiddleTable>,
    registry: Arc<RegistryInner>,
}

impl TableHandle {
    /// Registry this handle was issued by
    pub fn registry(&self) -> TableRegistry {
        TableRegistry {
            inner: Arc::clone(&self.registry),
        }
    }
}

impl Deref for TableHandle {
    type Target = TwiddleTable;

    fn deref(&self) -> &TwiddleTable {
        &self.table
    }
}

impl Clone for TableHandle {
    fn clone(&self) -> Self {
        Self {
            table: self.registry.retain(self.table.size()),
            registry: Arc::clone(&self.registry),
        }
    }
}

impl Drop for TableHandle {
    fn drop(&mut self) {
        self.registry.release(self.table.size());
    }
}

impl fmt::Debug for TableHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableHandle")
            .field("size", &self.table.size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FftError;

    #[test]
    fn test_get_creates_and_counts() {
        let registry = TableRegistry::new();
        assert!(registry.is_empty());

        let a = registry.get(16).unwrap();
        assert_eq!(a.size(), 16);
        assert_eq!(registry.ref_count(16), Some(1));

        let b = registry.get(16).unwrap();
        assert_eq!(registry.ref_count(16), Some(2));
        assert_eq!(registry.len(), 1);

        registry.put(a);
        assert_eq!(registry.ref_count(16), Some(1));
        drop(b);
        assert_eq!(registry.ref_count(16), Some(0));

        // Idle entries persist until cleared
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_clear_only_removes_idle_entries() {
        let registry = TableRegistry::new();
        let held = registry.get(8).unwrap();
        drop(registry.get(5).unwrap());
        drop(registry.get(32).unwrap());

        assert_eq!(registry.cached_sizes(), vec![5, 8, 32]);
        assert_eq!(registry.clear(), 2);
        assert_eq!(registry.cached_sizes(), vec![8]);
        assert_eq!(registry.ref_count(8), Some(1));

        drop(held);
        assert_eq!(registry.clear(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_sizes_kept_sorted() {
        let registry = TableRegistry::new();
        let handles: Vec<_> = [64, 3, 17, 1, 1024]
            .iter()
            .map(|&n| registry.get(n).unwrap())
            .collect();
        assert_eq!(registry.cached_sizes(), vec![1, 3, 17, 64, 1024]);
        drop(handles);
    }

    #[test]
    fn test_clone_reacquires() {
        let registry = TableRegistry::new();
        let a = registry.get(12).unwrap();
        let b = a.clone();
        assert_eq!(registry.ref_count(12), Some(2));
        assert_eq!(a.as_slice(), b.as_slice());
        drop(a);
        drop(b);
        assert_eq!(registry.ref_count(12), Some(0));
    }

    #[test]
    fn test_zero_size_leaves_registry_untouched() {
        let registry = TableRegistry::new();
        assert_eq!(registry.get(0).unwrap_err(), FftError::ZeroSize);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registries_are_isolated() {
        let first = TableRegistry::new();
        let second = TableRegistry::new();
        let handle = first.get(4).unwrap();
        assert_eq!(second.ref_count(4), None);
        assert_eq!(handle.registry().ref_count(4), Some(1));
    }

    #[test]
    #[should_panic(expected = "did not issue it")]
    fn test_put_into_foreign_registry_panics() {
        let first = TableRegistry::new();
        let second = TableRegistry::new();
        let handle = first.get(4).unwrap();
        second.put(handle);
    }

    #[test]
    fn test_global_registry_is_shared() {
        let a = TableRegistry::global();
        let b = TableRegistry::global();
        assert!(Arc::ptr_eq(&a.inner, &b.inner));
    }
}
