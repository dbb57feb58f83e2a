//! Store trait definitions for the domain layer.
//!
//! The traits abstract identity assignment, storage, and lookup for the three
//! entity kinds. They never enforce rules spanning several entities.
//!
//! # Architecture
//!
//! - Traits define the contract for store operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CustomerRepository`] - Customer registration and lookup
//! - [`ShowRepository`] - Show scheduling storage and date queries
//! - [`SaleRepository`] - Capacity-checked sale recording

pub mod customer_repository;
pub mod sale_repository;
pub mod show_repository;

pub use customer_repository::CustomerRepository;
pub use sale_repository::SaleRepository;
pub use show_repository::ShowRepository;

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use sale_repository::MockSaleRepository;
#[cfg(test)]
pub use show_repository::MockShowRepository;
