//! Repository trait for show data access.

use chrono::NaiveDate;

use crate::domain::entities::{NewShow, Show};
use crate::error::TicketResult;

/// Store interface for shows.
///
/// Creation never checks the per-date scheduling limits; those are enforced
/// by the service before calling [`ShowRepository::create`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryShowRepository`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait ShowRepository: Send + Sync {
    /// Stores a new show under the next show ID.
    fn create(&self, new_show: NewShow) -> Show;

    /// Finds a show by ID.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TicketError::ShowNotFound`] if no show has this ID.
    fn find_by_id(&self, id: i64) -> TicketResult<Show>;

    /// Returns the shows on `date`, ordered by time slot label.
    fn find_by_date(&self, date: NaiveDate) -> Vec<Show>;

    /// Returns all shows ordered by date, then time slot label.
    fn list(&self) -> Vec<Show>;
}
