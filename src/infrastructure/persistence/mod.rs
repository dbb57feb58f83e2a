//! In-memory store and repository implementations.
//!
//! All repositories share one [`InMemoryStore`], which owns the entity maps and
//! the per-kind ID counters for the lifetime of the process.

mod memory_customer_repository;
mod memory_sale_repository;
mod memory_show_repository;
mod store;

pub use memory_customer_repository::MemoryCustomerRepository;
pub use memory_sale_repository::MemorySaleRepository;
pub use memory_show_repository::MemoryShowRepository;
pub use store::InMemoryStore;
