//! In-memory implementation of the sale repository.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

use super::InMemoryStore;
use crate::domain::entities::{Customer, Sale, Show};
use crate::domain::repositories::SaleRepository;
use crate::error::{TicketError, TicketResult};

/// Sale repository backed by the shared [`InMemoryStore`].
///
/// Sale creation holds the store lock across the capacity check, the sold
/// counter increment, and the sale insert.
pub struct MemorySaleRepository {
    store: Arc<InMemoryStore>,
}

impl MemorySaleRepository {
    /// Creates a new repository over the shared store.
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

impl SaleRepository for MemorySaleRepository {
    fn create(
        &self,
        customer: &Customer,
        show: &Show,
        quantity: i64,
        unit_price: Decimal,
    ) -> TicketResult<Sale> {
        let mut state = self.store.lock();

        // The caller's copy may be stale; validate against the stored show.
        let stored = state
            .shows
            .get_mut(&show.id)
            .ok_or(TicketError::ShowNotFound { id: show.id })?;
        let quantity = stored.sell(quantity)?;

        let id = state.next_sale_id();
        let sale = Sale::new(id, customer.id, show.id, quantity, unit_price, Utc::now());
        state.sales.insert(id, sale.clone());

        debug!(sale_id = id, show_id = show.id, quantity, "Stored sale");
        Ok(sale)
    }

    fn list(&self) -> Vec<Sale> {
        let mut sales: Vec<Sale> = self.store.lock().sales.values().cloned().collect();

        sales.sort_by(|a, b| a.sold_at.cmp(&b.sold_at).then_with(|| a.id.cmp(&b.id)));
        sales
    }
}
