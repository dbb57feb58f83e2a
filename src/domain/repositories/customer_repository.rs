//! Repository trait for customer data access.

use crate::domain::entities::{Customer, NewCustomer};
use crate::error::TicketResult;

/// Store interface for customers.
///
/// Creation never checks uniqueness; duplicate detection by national ID is a
/// service-level rule.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryCustomerRepository`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait CustomerRepository: Send + Sync {
    /// Stores a new customer under the next customer ID.
    fn create(&self, new_customer: NewCustomer) -> Customer;

    /// Finds a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TicketError::CustomerNotFound`] if no customer has this ID.
    fn find_by_id(&self, id: i64) -> TicketResult<Customer>;

    /// Finds the first customer registered with the given national ID.
    fn find_by_national_id(&self, national_id: &str) -> Option<Customer>;

    /// Lists all customers. Callers must not rely on the order.
    fn list(&self) -> Vec<Customer>;
}
