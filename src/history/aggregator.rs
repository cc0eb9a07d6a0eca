use std::collections::BTreeMap;

use crate::errors::{HistoryError, StoreError};
use crate::history::{DayBoundary, DayKey, HistoryStore};
use crate::models::{ActivityRecord, TimeWindow};
use crate::pagination::{PageRequest, PaginatedResponse, PaginationMeta};

/// Day-oriented queries over a user's activity history.
///
/// Holds no state of its own, every call makes its own reads against the store.
pub struct HistoryAggregator<'a> {
    store: &'a dyn HistoryStore,
    days: DayBoundary,
}

#[allow(clippy::missing_errors_doc)]
impl<'a> HistoryAggregator<'a> {
    #[must_use]
    pub const fn new(store: &'a dyn HistoryStore, days: DayBoundary) -> Self {
        Self { store, days }
    }

    /// Best score of `activity_type` on the day containing `reference`.
    /// `Ok(None)` means nothing was recorded that day.
    #[tracing::instrument(name = "Get daily best", skip(self))]
    pub async fn daily_best(
        &self,
        user_id: i64,
        activity_type: i32,
        reference: i64,
    ) -> Result<Option<ActivityRecord>, HistoryError> {
        let window = self
            .days
            .day_window(reference)
            .ok_or(HistoryError::TimestampOutOfRange(reference))?;

        match self
            .store
            .find_top_by_user_type_window(user_id, activity_type, window)
            .await
        {
            Ok(record) => Ok(Some(record)),
            Err(StoreError::NotFound) => Ok(None),
            Err(e) => Err(HistoryError::DatabaseError(e)),
        }
    }

    /// Total `spots_time` per day for records in `[start, end)`.
    /// Days without records are left out of the map.
    #[tracing::instrument(name = "Get spots time series", skip(self))]
    pub async fn spots_time_series(
        &self,
        user_id: i64,
        start: i64,
        end: i64,
        activity_type: Option<i32>,
    ) -> Result<BTreeMap<DayKey, i64>, HistoryError> {
        let window = TimeWindow::new(start, end);
        if window.is_empty() {
            return Ok(BTreeMap::new());
        }

        let records = match self
            .store
            .find_all_by_user_window(user_id, window, activity_type)
            .await
        {
            Ok(records) => records,
            Err(StoreError::NotFound) => Vec::new(),
            Err(e) => return Err(HistoryError::DatabaseError(e)),
        };

        let mut series = BTreeMap::new();
        for record in &records {
            let key = self
                .days
                .day_key(record.time)
                .ok_or(HistoryError::TimestampOutOfRange(record.time))?;
            // clamp rather than wrap on absurd stored durations
            let total = series.entry(key).or_insert(0_i64);
            *total = total.saturating_add(record.spots_time);
        }

        tracing::info!(
            "Folded {} records into {} days",
            records.len(),
            series.len()
        );
        Ok(series)
    }

    // newest first, `activity_types` narrows the listing when given
    #[tracing::instrument(
        name = "List history page",
        skip(self, page),
        fields(page = page.page(), page_size = page.page_size())
    )]
    pub async fn list_page(
        &self,
        user_id: i64,
        activity_types: Option<&[i64]>,
        page: &PageRequest,
    ) -> Result<PaginatedResponse<ActivityRecord>, HistoryError> {
        let total_items = match self.store.count_by_user(user_id, activity_types).await {
            Ok(total) => total,
            Err(StoreError::NotFound) => 0,
            Err(e) => return Err(HistoryError::DatabaseError(e)),
        };

        let data = match self
            .store
            .find_page_by_user(user_id, activity_types, page.limit(), page.offset())
            .await
        {
            Ok(records) => records,
            Err(StoreError::NotFound) => Vec::new(),
            Err(e) => return Err(HistoryError::DatabaseError(e)),
        };

        Ok(PaginatedResponse {
            data,
            pagination: PaginationMeta::from_total(total_items, page),
        })
    }
}
