//! Infrastructure layer implementing the domain's store contracts.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory store and repository implementations

pub mod persistence;
