use serde::{Deserialize, Serialize};

// one row of `user_score`, timestamps are unix seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActivityRecord {
    pub id: i64,
    pub user_id: i64,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub activity_type: i32,
    pub score: i64,
    // seconds spent on the activity
    pub spots_time: i64,
    // when the activity happened
    pub time: i64,
    // when the row was written
    pub created_at: i64,
}

/// Half-open `[start, end)` range of unix timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: i64,
    pub end: i64,
}

impl TimeWindow {
    #[must_use]
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    // a reversed window matches nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    #[must_use]
    pub const fn contains(&self, timestamp: i64) -> bool {
        self.start <= timestamp && timestamp < self.end
    }
}
