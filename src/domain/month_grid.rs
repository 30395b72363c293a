//! Month navigation and render-ready calendar grids

use crate::domain::{DayAggregate, DayKey};
use chrono::{Datelike, Months, NaiveDate};
use std::fmt;

/// A reference month (year + month), always valid once constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    // Invariant: always the first day of the month.
    first: NaiveDate,
}

impl MonthRef {
    /// Create a month reference; returns None for an out-of-range month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| MonthRef { first })
    }

    /// The month containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        MonthRef {
            // with_day(1) cannot fail: every month has a day 1.
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Parse a `YYYY-MM` month reference
    pub fn parse(input: &str) -> Option<Self> {
        let (year, month) = input.trim().split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// The previous month, rolling the year across January
    pub fn previous(&self) -> Self {
        MonthRef {
            first: self.first - Months::new(1),
        }
    }

    /// The next month, rolling the year across December
    pub fn next(&self) -> Self {
        MonthRef {
            first: self.first + Months::new(1),
        }
    }

    /// Number of days in this month (leap-year aware)
    pub fn days_in_month(&self) -> u32 {
        (self.next().first - self.first).num_days() as u32
    }

    /// Weekday index of day 1, with Sunday as 0
    pub fn starting_weekday_offset(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first.format("%Y-%m"))
    }
}

/// One cell of a month grid: a leading blank or a day of the month
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthGridCell {
    Blank,
    Day {
        number: u32,
        key: DayKey,
        emotion: Option<String>,
    },
}

/// Ordered render-ready cells for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: MonthRef,
    pub cells: Vec<MonthGridCell>,
}

impl MonthGrid {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Build the grid for a month: leading blanks up to the starting weekday,
/// then one cell per day with its emotion looked up from the aggregate.
pub fn build_grid(month: MonthRef, aggregate: &DayAggregate) -> MonthGrid {
    let offset = month.starting_weekday_offset();
    let days = month.days_in_month();
    let mut cells = Vec::with_capacity((offset + days) as usize);

    for _ in 0..offset {
        cells.push(MonthGridCell::Blank);
    }

    for number in 1..=days {
        // Day numbers 1..=days are valid by construction.
        let Some(date) = month.first_day().with_day(number) else {
            continue;
        };
        let key = DayKey::from_date(date);
        cells.push(MonthGridCell::Day {
            number,
            emotion: aggregate.get(&key).map(str::to_string),
            key,
        });
    }

    MonthGrid { month, cells }
}
