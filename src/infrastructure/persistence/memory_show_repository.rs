//! In-memory implementation of the show repository.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use super::InMemoryStore;
use crate::domain::entities::{NewShow, Show};
use crate::domain::repositories::ShowRepository;
use crate::error::{TicketError, TicketResult};

/// Show repository backed by the shared [`InMemoryStore`].
pub struct MemoryShowRepository {
    store: Arc<InMemoryStore>,
}

impl MemoryShowRepository {
    /// Creates a new repository over the shared store.
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

impl ShowRepository for MemoryShowRepository {
    fn create(&self, new_show: NewShow) -> Show {
        let mut state = self.store.lock();

        let id = state.next_show_id();
        let show = Show::new(id, new_show);
        state.shows.insert(id, show.clone());

        debug!(show_id = id, date = %show.date, time_slot = %show.time_slot, "Stored show");
        show
    }

    fn find_by_id(&self, id: i64) -> TicketResult<Show> {
        self.store
            .lock()
            .shows
            .get(&id)
            .cloned()
            .ok_or(TicketError::ShowNotFound { id })
    }

    fn find_by_date(&self, date: NaiveDate) -> Vec<Show> {
        let mut shows: Vec<Show> = self
            .store
            .lock()
            .shows
            .values()
            .filter(|show| show.date == date)
            .cloned()
            .collect();

        shows.sort_by(|a, b| a.time_slot.cmp(&b.time_slot));
        shows
    }

    fn list(&self) -> Vec<Show> {
        let mut shows: Vec<Show> = self.store.lock().shows.values().cloned().collect();

        shows.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.time_slot.cmp(&b.time_slot))
        });
        shows
    }
}
