//! Daily occupancy report.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::DATE_FORMAT;
use crate::domain::entities::{Show, occupancy_percent};

/// Occupancy of one show within a daily report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShowOccupancy {
    pub show_id: i64,
    pub time_slot: String,
    pub sold: u32,
    pub capacity: u32,
    pub percent: f64,
}

impl From<&Show> for ShowOccupancy {
    fn from(show: &Show) -> Self {
        Self {
            show_id: show.id,
            time_slot: show.time_slot.clone(),
            sold: show.tickets_sold,
            capacity: show.capacity,
            percent: show.occupancy_percent(),
        }
    }
}

/// Occupancy of every show on one date plus the daily aggregate.
///
/// Rendered as text through its [`fmt::Display`] implementation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OccupancyReport {
    pub date: NaiveDate,
    pub shows: Vec<ShowOccupancy>,
    pub total_sold: u64,
    pub total_capacity: u64,
    pub total_percent: f64,
}

impl OccupancyReport {
    /// Builds a report from the shows of `date`, already ordered by time slot.
    pub fn new(date: NaiveDate, shows: &[Show]) -> Self {
        let total_sold: u64 = shows.iter().map(|s| u64::from(s.tickets_sold)).sum();
        let total_capacity: u64 = shows.iter().map(|s| u64::from(s.capacity)).sum();

        Self {
            date,
            shows: shows.iter().map(ShowOccupancy::from).collect(),
            total_sold,
            total_capacity,
            total_percent: occupancy_percent(total_sold, total_capacity),
        }
    }

    /// Returns true if no show is scheduled on the report date.
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}

impl fmt::Display for OccupancyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self.date.format(DATE_FORMAT);

        if self.is_empty() {
            return write!(f, "No shows scheduled for {date}");
        }

        writeln!(f, "OCCUPANCY REPORT - {date}")?;
        writeln!(f)?;
        for show in &self.shows {
            writeln!(
                f,
                "Show at {}: {}/{} sold ({:.1}%)",
                show.time_slot, show.sold, show.capacity, show.percent
            )?;
        }
        writeln!(f)?;
        write!(
            f,
            "Daily total: {}/{} ({:.1}%)",
            self.total_sold, self.total_capacity, self.total_percent
        )
    }
}
