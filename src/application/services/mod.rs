//! Business logic services for the application layer.

pub mod box_office_service;
pub mod report;

pub use box_office_service::{BoxOfficeService, BoxOfficeSettings, MAX_SHOWS_PER_DATE};
pub use report::{OccupancyReport, ShowOccupancy};
