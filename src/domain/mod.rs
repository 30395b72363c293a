//! Domain layer - Business logic and domain models

pub mod breathing;
pub mod day_key;
pub mod emotion_calendar;
pub mod month_grid;
pub mod record;
pub mod tips;

pub use breathing::{format_clock, BreathPhase, BreathingController, BreathingSnapshot};
pub use day_key::DayKey;
pub use emotion_calendar::{aggregate, aggregate_in, DayAggregate};
pub use month_grid::{build_grid, MonthGrid, MonthGridCell, MonthRef};
pub use record::{find_emotion, Emotion, JournalRecord, EMOTIONS};
pub use tips::TIPS;
