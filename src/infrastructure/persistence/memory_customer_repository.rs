//! In-memory implementation of the customer repository.

use std::sync::Arc;

use tracing::debug;

use super::InMemoryStore;
use crate::domain::entities::{Customer, NewCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::{TicketError, TicketResult};

/// Customer repository backed by the shared [`InMemoryStore`].
///
/// Lookups by national ID go through a secondary index that keeps the first
/// customer registered for each national ID.
pub struct MemoryCustomerRepository {
    store: Arc<InMemoryStore>,
}

impl MemoryCustomerRepository {
    /// Creates a new repository over the shared store.
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

impl CustomerRepository for MemoryCustomerRepository {
    fn create(&self, new_customer: NewCustomer) -> Customer {
        let mut state = self.store.lock();

        let id = state.next_customer_id();
        let customer = Customer::new(id, new_customer);

        state
            .customers_by_national_id
            .entry(customer.national_id.clone())
            .or_insert(id);
        state.customers.insert(id, customer.clone());

        debug!(customer_id = id, "Stored customer");
        customer
    }

    fn find_by_id(&self, id: i64) -> TicketResult<Customer> {
        self.store
            .lock()
            .customers
            .get(&id)
            .cloned()
            .ok_or(TicketError::CustomerNotFound { id })
    }

    fn find_by_national_id(&self, national_id: &str) -> Option<Customer> {
        let state = self.store.lock();
        state
            .customers_by_national_id
            .get(national_id)
            .and_then(|id| state.customers.get(id))
            .cloned()
    }

    fn list(&self) -> Vec<Customer> {
        self.store.lock().customers.values().cloned().collect()
    }
}
