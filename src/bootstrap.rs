//! Startup wiring: store, repositories, service, and seed shows.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use tracing::{info, warn};

use crate::application::services::BoxOfficeService;
use crate::config::Config;
use crate::infrastructure::persistence::{
    InMemoryStore, MemoryCustomerRepository, MemorySaleRepository, MemoryShowRepository,
};

/// Box office service wired to the in-memory store.
pub type AppService =
    BoxOfficeService<MemoryCustomerRepository, MemoryShowRepository, MemorySaleRepository>;

/// Builds the process-wide store and the service on top of it.
pub fn build_service(config: &Config) -> AppService {
    let store = Arc::new(InMemoryStore::new());

    BoxOfficeService::new(
        Arc::new(MemoryCustomerRepository::new(store.clone())),
        Arc::new(MemoryShowRepository::new(store.clone())),
        Arc::new(MemorySaleRepository::new(store)),
        config.box_office_settings(),
    )
}

/// Schedules `slots` on each of `days` consecutive dates starting at `first_day`.
///
/// Scheduling failures are logged and skipped. Returns the number of shows
/// actually scheduled.
pub fn seed_shows(
    service: &AppService,
    first_day: NaiveDate,
    days: u32,
    slots: &[String],
) -> usize {
    let mut scheduled = 0;

    for offset in 0..days {
        let Some(date) = first_day.checked_add_days(Days::new(u64::from(offset))) else {
            break;
        };

        for slot in slots {
            match service.schedule_show(date, slot.as_str()) {
                Ok(_) => scheduled += 1,
                Err(e) => warn!("Failed to seed show: {e}"),
            }
        }
    }

    info!(scheduled, "Seed shows scheduled");
    scheduled
}

/// Builds the service and applies the configured seed.
pub fn bootstrap(config: &Config, today: NaiveDate) -> AppService {
    let service = build_service(config);

    if config.seed_shows {
        seed_shows(&service, today, config.seed_days, &config.seed_slots);
    }

    service
}
