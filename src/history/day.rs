use chrono::{DateTime, FixedOffset, NaiveDate, Offset, TimeZone, Utc};
use serde::Serialize;
use std::fmt;

use crate::models::TimeWindow;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Calendar day of a timestamp, serialized as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Where one day ends and the next begins.
///
/// Days are cut at midnight of a single fixed UTC offset (UTC itself unless
/// configured otherwise). A fixed offset has no DST, so every day is exactly
/// 86400 seconds and `day_window` and `day_key` always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBoundary {
    offset: FixedOffset,
}

impl Default for DayBoundary {
    fn default() -> Self {
        Self::utc()
    }
}

impl DayBoundary {
    #[must_use]
    pub fn utc() -> Self {
        Self { offset: Utc.fix() }
    }

    // `None` unless the offset is strictly within +/- 24h
    #[must_use]
    pub fn with_offset_seconds(seconds: i32) -> Option<Self> {
        FixedOffset::east_opt(seconds).map(|offset| Self { offset })
    }

    #[must_use]
    pub fn day_key(&self, timestamp: i64) -> Option<DayKey> {
        let instant = DateTime::from_timestamp(timestamp, 0)?;
        Some(DayKey(instant.with_timezone(&self.offset).date_naive()))
    }

    #[must_use]
    pub fn day_window(&self, timestamp: i64) -> Option<TimeWindow> {
        let midnight = self.day_key(timestamp)?.0.and_hms_opt(0, 0, 0)?;
        let start = self
            .offset
            .from_local_datetime(&midnight)
            .single()?
            .timestamp();
        Some(TimeWindow::new(start, start + SECONDS_PER_DAY))
    }
}
