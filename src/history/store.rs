use async_trait::async_trait;

use crate::errors::StoreError;
use crate::models::{ActivityRecord, TimeWindow};

/// Read access to a user's activity history.
///
/// Implementations report an empty lookup as [`StoreError::NotFound`] and
/// anything else as [`StoreError::Database`].
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// The highest scoring record of `activity_type` with `time` inside `window`.
    async fn find_top_by_user_type_window(
        &self,
        user_id: i64,
        activity_type: i32,
        window: TimeWindow,
    ) -> Result<ActivityRecord, StoreError>;

    /// Every record with `time` inside `window`, optionally of a single type.
    async fn find_all_by_user_window(
        &self,
        user_id: i64,
        window: TimeWindow,
        activity_type: Option<i32>,
    ) -> Result<Vec<ActivityRecord>, StoreError>;

    async fn count_by_user(
        &self,
        user_id: i64,
        activity_types: Option<&[i64]>,
    ) -> Result<i64, StoreError>;

    // newest first
    async fn find_page_by_user(
        &self,
        user_id: i64,
        activity_types: Option<&[i64]>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ActivityRecord>, StoreError>;
}
