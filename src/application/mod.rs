//! Application layer services implementing business logic.
//!
//! This layer enforces the rules that span several entities by coordinating
//! repository calls. It never holds entity storage itself.
//!
//! # Available Services
//!
//! - [`services::box_office_service::BoxOfficeService`] - Customer registration,
//!   show scheduling, ticket sales, and occupancy reporting

pub mod services;
