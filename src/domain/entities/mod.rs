//! Core domain entities of the box office.
//!
//! # Entity Types
//!
//! - [`Customer`] - A registered ticket buyer, deduplicated by national ID
//! - [`Show`] - A scheduled performance with fixed capacity and a sold counter
//! - [`Sale`] - A ticket purchase referencing a customer and a show
//!
//! Creation inputs (`NewCustomer`, `NewShow`) are separate structs; IDs are
//! only ever assigned by the store.

pub mod customer;
pub mod sale;
pub mod show;

pub use customer::{Customer, NewCustomer};
pub use sale::{Sale, SaleRecord};
pub use show::{DEFAULT_SHOW_CAPACITY, NewShow, Show, occupancy_percent};
