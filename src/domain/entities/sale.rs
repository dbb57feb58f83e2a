//! Sale entity representing a ticket purchase.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{Customer, Show};

/// A completed ticket sale.
///
/// A sale references its customer and show by ID. Readers resolve those IDs
/// against the store at read time, so listings always reflect the current
/// sold counts of the referenced show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sale {
    pub id: i64,
    pub customer_id: i64,
    pub show_id: i64,
    pub quantity: u32,
    pub sold_at: DateTime<Utc>,
    pub total_price: Decimal,
}

impl Sale {
    /// Creates a new Sale, pricing it as `quantity * unit_price`.
    pub fn new(
        id: i64,
        customer_id: i64,
        show_id: i64,
        quantity: u32,
        unit_price: Decimal,
        sold_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer_id,
            show_id,
            quantity,
            sold_at,
            total_price: Decimal::from(quantity) * unit_price,
        }
    }
}

/// A sale joined with the live state of its customer and show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleRecord {
    pub sale: Sale,
    pub customer: Customer,
    pub show: Show,
}
