//! Repository trait for sale data access.

use rust_decimal::Decimal;

use crate::domain::entities::{Customer, Sale, Show};
use crate::error::TicketResult;

/// Store interface for sales.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemorySaleRepository`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait SaleRepository: Send + Sync {
    /// Records a sale of `quantity` tickets for `show`.
    ///
    /// Validating availability, incrementing the show's sold counter, and
    /// assigning the sale ID happen as one step. On failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TicketError::InvalidQuantity`] if `quantity <= 0`.
    /// Returns [`crate::error::TicketError::InsufficientCapacity`] if the show
    /// cannot cover `quantity`.
    /// Returns [`crate::error::TicketError::ShowNotFound`] if the show is not stored.
    fn create(
        &self,
        customer: &Customer,
        show: &Show,
        quantity: i64,
        unit_price: Decimal,
    ) -> TicketResult<Sale>;

    /// Returns all sales ordered by sale time.
    fn list(&self) -> Vec<Sale>;
}
