//! Shared in-memory state backing every repository.

use std::collections::{BTreeMap, HashMap};

use parking_lot::{Mutex, MutexGuard};
use tracing::debug;

use crate::domain::entities::{Customer, Sale, Show};

/// Process-wide in-memory store.
///
/// Owns every entity instance and the per-kind ID counters. Repositories share
/// one store through an `Arc` and take the lock for the duration of a single
/// operation, so multi-step mutations (such as checking availability and
/// incrementing a show's sold counter) are never observed half-applied.
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// Creates an empty store with all ID counters at 1.
    pub fn new() -> Self {
        debug!("Initializing in-memory store");
        Self {
            state: Mutex::new(StoreState::default()),
        }
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Entity maps, lookup indexes, and ID counters.
pub(crate) struct StoreState {
    pub(crate) customers: BTreeMap<i64, Customer>,
    /// First customer ID registered per national ID.
    pub(crate) customers_by_national_id: HashMap<String, i64>,
    pub(crate) shows: BTreeMap<i64, Show>,
    pub(crate) sales: BTreeMap<i64, Sale>,
    next_customer_id: i64,
    next_show_id: i64,
    next_sale_id: i64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            customers: BTreeMap::new(),
            customers_by_national_id: HashMap::new(),
            shows: BTreeMap::new(),
            sales: BTreeMap::new(),
            next_customer_id: 1,
            next_show_id: 1,
            next_sale_id: 1,
        }
    }
}

impl StoreState {
    pub(crate) fn next_customer_id(&mut self) -> i64 {
        let id = self.next_customer_id;
        self.next_customer_id += 1;
        id
    }

    pub(crate) fn next_show_id(&mut self) -> i64 {
        let id = self.next_show_id;
        self.next_show_id += 1;
        id
    }

    pub(crate) fn next_sale_id(&mut self) -> i64 {
        let id = self.next_sale_id;
        self.next_sale_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_independent() {
        let store = InMemoryStore::new();
        let mut state = store.lock();

        assert_eq!(state.next_customer_id(), 1);
        assert_eq!(state.next_customer_id(), 2);
        assert_eq!(state.next_show_id(), 1);
        assert_eq!(state.next_sale_id(), 1);
        assert_eq!(state.next_show_id(), 2);
    }
}
