//! Show entity representing a scheduled performance and its capacity rules.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{TicketError, TicketResult};

/// Capacity assigned to newly scheduled shows unless configured otherwise.
pub const DEFAULT_SHOW_CAPACITY: u32 = 200;

/// A scheduled performance (session) on a calendar date and time slot.
///
/// Invariant: `0 <= tickets_sold <= capacity`. The sold counter only moves
/// forward, and only through [`Show::sell`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Show {
    pub id: i64,
    pub date: NaiveDate,
    pub time_slot: String,
    pub capacity: u32,
    pub tickets_sold: u32,
}

impl Show {
    /// Creates a new Show with no tickets sold.
    pub fn new(id: i64, new_show: NewShow) -> Self {
        Self {
            id,
            date: new_show.date,
            time_slot: new_show.time_slot,
            capacity: new_show.capacity,
            tickets_sold: 0,
        }
    }

    /// Returns true while at least one ticket can still be sold.
    pub fn has_availability(&self) -> bool {
        self.tickets_sold < self.capacity
    }

    /// Number of tickets that can still be sold.
    pub fn available_count(&self) -> u32 {
        self.capacity.saturating_sub(self.tickets_sold)
    }

    /// Occupancy as a percentage of capacity, `0.0` for zero-capacity shows.
    pub fn occupancy_percent(&self) -> f64 {
        occupancy_percent(u64::from(self.tickets_sold), u64::from(self.capacity))
    }

    /// Sells `quantity` tickets as one all-or-nothing step, returning the
    /// number of tickets sold.
    ///
    /// Seats are taken one at a time through [`Show::sell_one`]; when a seat
    /// cannot be taken the counter is restored to its value before the call,
    /// so a rejected request never leaves a partial sale behind.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::InvalidQuantity`] if `quantity <= 0`.
    /// Returns [`TicketError::InsufficientCapacity`] if fewer than `quantity`
    /// tickets are available.
    pub fn sell(&mut self, quantity: i64) -> TicketResult<u32> {
        if quantity <= 0 {
            return Err(TicketError::InvalidQuantity { quantity });
        }

        let available = self.available_count();
        let insufficient = TicketError::InsufficientCapacity {
            requested: quantity,
            available,
        };
        let count = u32::try_from(quantity).map_err(|_| insufficient.clone())?;

        let sold_before = self.tickets_sold;
        for _ in 0..count {
            if self.sell_one().is_err() {
                self.tickets_sold = sold_before;
                return Err(insufficient);
            }
        }

        Ok(count)
    }

    fn sell_one(&mut self) -> TicketResult<()> {
        if !self.has_availability() {
            return Err(TicketError::SoldOut {
                show_id: self.id,
                date: self.date,
                time_slot: self.time_slot.clone(),
            });
        }

        self.tickets_sold += 1;
        Ok(())
    }
}

/// Input data for scheduling a new show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub date: NaiveDate,
    pub time_slot: String,
    pub capacity: u32,
}

/// Computes `100 * sold / capacity`, guarding zero capacity.
pub fn occupancy_percent(sold: u64, capacity: u64) -> f64 {
    if capacity == 0 {
        return 0.0;
    }
    100.0 * sold as f64 / capacity as f64
}
