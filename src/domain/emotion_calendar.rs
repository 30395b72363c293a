//! Per-day dominant-emotion aggregation

use crate::domain::{DayKey, JournalRecord};
use chrono::{Local, TimeZone};
use std::collections::{BTreeMap, HashMap};

/// Mapping from calendar day to the dominant emotion recorded on that day
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayAggregate {
    dominant: BTreeMap<DayKey, String>,
}

impl DayAggregate {
    pub fn get(&self, key: &DayKey) -> Option<&str> {
        self.dominant.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.dominant.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dominant.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DayKey, &str)> {
        self.dominant.iter().map(|(k, v)| (k, v.as_str()))
    }
}

/// Running per-day tally while scanning records in input order
#[derive(Debug, Default)]
struct DayTally {
    counts: HashMap<String, u32>,
    dominant: String,
    dominant_count: u32,
}

impl DayTally {
    fn observe(&mut self, emoji: &str) {
        let count = self.counts.entry(emoji.to_string()).or_insert(0);
        *count += 1;

        // Strictly greater only: on a tie the earlier-established dominant
        // stays, so the first-seen emoji wins ties.
        if *count > self.dominant_count {
            self.dominant_count = *count;
            if self.dominant != emoji {
                self.dominant = emoji.to_string();
            }
        }
    }
}

/// Aggregate records into a per-day dominant-emotion map, bucketing by the
/// consumer's local calendar day.
pub fn aggregate(records: &[JournalRecord]) -> DayAggregate {
    aggregate_in(records, &Local)
}

/// Aggregate with an explicit timezone for the calendar-day split.
///
/// Records missing a timestamp or emotion, or with an unparseable
/// timestamp, are silently skipped. Identical input always yields identical
/// output; nothing is shared across calls.
pub fn aggregate_in<Tz: TimeZone>(records: &[JournalRecord], tz: &Tz) -> DayAggregate {
    let mut tallies: BTreeMap<DayKey, DayTally> = BTreeMap::new();

    for record in records {
        let (Some(timestamp), Some(emoji)) = (&record.timestamp, &record.emotion_emoji) else {
            continue;
        };
        let Some(key) = DayKey::from_timestamp_in(timestamp, tz) else {
            continue;
        };
        tallies.entry(key).or_default().observe(emoji);
    }

    DayAggregate {
        dominant: tallies
            .into_iter()
            .map(|(key, tally)| (key, tally.dominant))
            .collect(),
    }
}
