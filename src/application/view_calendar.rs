//! Emotion calendar use case

use crate::domain::{aggregate, build_grid, DayAggregate, MonthGrid, MonthRef};
use crate::error::Result;
use crate::infrastructure::JournalStore;

/// Service producing render-ready emotion calendars from stored records
pub struct CalendarService<S: JournalStore> {
    store: S,
}

impl<S: JournalStore> CalendarService<S> {
    /// Create a new calendar service
    pub fn new(store: S) -> Self {
        CalendarService { store }
    }

    /// Aggregate all stored records into a per-day dominant-emotion map.
    /// Records are scanned in chronological order so a tied day settles on
    /// the emotion recorded earliest.
    pub fn day_aggregate(&self) -> Result<DayAggregate> {
        let mut records = self.store.fetch_records()?;
        records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        Ok(aggregate(&records))
    }

    /// Build the grid for the given reference month. Recomputed on every
    /// call; nothing is cached between navigations.
    pub fn month_view(&self, month: MonthRef) -> Result<MonthGrid> {
        let aggregate = self.day_aggregate()?;
        Ok(build_grid(month, &aggregate))
    }
}
