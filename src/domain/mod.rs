//! Domain layer containing business entities and store contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Customers, shows, and sales, with the show capacity rules
//! - [`repositories`] - Store trait definitions
//!
//! The domain layer knows nothing about the in-memory store or the text menu.
//! Rules spanning several entities live in
//! [`crate::application::services::BoxOfficeService`].

pub mod entities;
pub mod repositories;

/// Day/month/year format used for parsing and displaying show dates.
pub const DATE_FORMAT: &str = "%d/%m/%Y";
