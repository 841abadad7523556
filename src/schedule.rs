//! Season calendar: which week is current, and when results get posted.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc, Weekday};
use serde::Deserialize;

/// Start date of every scheduled week, keyed by week number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    pub week_starts: BTreeMap<u32, NaiveDate>,
}

impl Schedule {
    pub fn new(week_starts: impl IntoIterator<Item = (u32, NaiveDate)>) -> Self {
        Self {
            week_starts: week_starts.into_iter().collect(),
        }
    }

    /// The last week that has already started, `None` before the season.
    pub fn current_week(&self, today: NaiveDate) -> Option<u32> {
        self.week_starts
            .iter()
            .filter(|(_, start)| **start <= today)
            .map(|(week, _)| *week)
            .last()
    }
}

/// A few minutes once a week during which a scheduled run posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PostingWindow {
    pub weekday: Weekday,
    /// UTC hour the window opens.
    pub hour: u32,
    pub minutes: u32,
}

impl Default for PostingWindow {
    fn default() -> Self {
        Self {
            weekday: Weekday::Tue,
            hour: 8,
            minutes: 3,
        }
    }
}

impl PostingWindow {
    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        now.weekday() == self.weekday && now.hour() == self.hour && now.minute() < self.minutes
    }
}
