#![allow(dead_code)]

use chrono::NaiveDate;
use circus_tickets::bootstrap::{AppService, build_service};
use circus_tickets::config::Config;
use circus_tickets::domain::entities::{Customer, NewCustomer, Show};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Service over a fresh in-memory store, with default price and capacity.
pub fn create_test_service() -> AppService {
    build_service(&Config {
        seed_shows: false,
        ..Config::default()
    })
}

pub fn create_test_service_with_capacity(show_capacity: u32) -> AppService {
    build_service(&Config {
        seed_shows: false,
        show_capacity,
        ..Config::default()
    })
}

pub fn register(service: &AppService, name: &str, national_id: &str) -> Customer {
    service
        .register_customer(NewCustomer::new(
            name,
            format!("{}@example.com", name.to_lowercase()),
            "5551234",
            national_id,
        ))
        .unwrap()
}

pub fn schedule(service: &AppService, date: NaiveDate, slot: &str) -> Show {
    service.schedule_show(date, slot).unwrap()
}

pub fn find_show(service: &AppService, id: i64) -> Show {
    service
        .list_shows()
        .into_iter()
        .find(|show| show.id == id)
        .unwrap()
}
