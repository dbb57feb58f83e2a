//! Domain error taxonomy.
//!
//! Every business-rule failure is returned as a [`TicketError`] value. Each
//! variant carries the identifiers, counts, or dates needed to render a
//! human-readable message, so callers never have to re-derive context.

use chrono::NaiveDate;

use crate::domain::DATE_FORMAT;

/// Result alias used across the domain, store, and service layers.
pub type TicketResult<T> = Result<T, TicketError>;

/// Recoverable failures raised by the box office.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketError {
    #[error("customer with national ID {national_id} is already registered (ID: {existing_id})")]
    DuplicateCustomer {
        national_id: String,
        existing_id: i64,
    },

    #[error("customer with ID {id} not found")]
    CustomerNotFound { id: i64 },

    #[error("show with ID {id} not found")]
    ShowNotFound { id: i64 },

    #[error("two shows are already scheduled for {}", .date.format(DATE_FORMAT))]
    TooManyShowsThisDate { date: NaiveDate },

    #[error("a show is already scheduled for {} at {time_slot}", .date.format(DATE_FORMAT))]
    DuplicateTimeSlot { date: NaiveDate, time_slot: String },

    #[error("ticket quantity must be greater than zero (got {quantity})")]
    InvalidQuantity { quantity: i64 },

    #[error("not enough tickets available ({requested} requested, {available} available)")]
    InsufficientCapacity { requested: i64, available: u32 },

    #[error("show {show_id} on {} at {time_slot} is sold out", .date.format(DATE_FORMAT))]
    SoldOut {
        show_id: i64,
        date: NaiveDate,
        time_slot: String,
    },
}

impl TicketError {
    /// Stable machine-readable code, used as a log field and metrics label.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateCustomer { .. } => "duplicate_customer",
            Self::CustomerNotFound { .. } => "customer_not_found",
            Self::ShowNotFound { .. } => "show_not_found",
            Self::TooManyShowsThisDate { .. } => "too_many_shows_this_date",
            Self::DuplicateTimeSlot { .. } => "duplicate_time_slot",
            Self::InvalidQuantity { .. } => "invalid_quantity",
            Self::InsufficientCapacity { .. } => "insufficient_capacity",
            Self::SoldOut { .. } => "sold_out",
        }
    }
}
