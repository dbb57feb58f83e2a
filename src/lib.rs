//! # Circus Tickets
//!
//! Ticket sales for a two-shows-per-day circus venue: customer registration,
//! show scheduling, capacity-checked ticket sales, and a daily occupancy report.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, show capacity rules, and store traits
//! - **Application Layer** ([`application`]) - Rules spanning entities and report aggregation
//! - **Infrastructure Layer** ([`infrastructure`]) - The in-memory store
//! - **Presentation Layer** ([`cli`]) - Interactive text menu
//!
//! ## Rules
//!
//! - One customer per national ID (CPF)
//! - At most two shows per date, each at a distinct time slot
//! - A sale either sells every requested ticket or changes nothing
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`]. State lives in
//! memory for the lifetime of the process.

pub mod application;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use error::{TicketError, TicketResult};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{BoxOfficeService, BoxOfficeSettings, OccupancyReport};
    pub use crate::domain::entities::{Customer, NewCustomer, NewShow, Sale, SaleRecord, Show};
    pub use crate::error::{TicketError, TicketResult};
    pub use crate::infrastructure::persistence::{
        InMemoryStore, MemoryCustomerRepository, MemorySaleRepository, MemoryShowRepository,
    };
}
