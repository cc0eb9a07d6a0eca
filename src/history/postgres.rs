use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::StoreError;
use crate::history::HistoryStore;
use crate::models::{ActivityRecord, TimeWindow};

#[derive(Clone)]
pub struct PgHistoryStore {
    pool: PgPool,
}

impl PgHistoryStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    #[tracing::instrument(
        name = "Find top score in window",
        skip(self),
        fields(start = window.start, end = window.end)
    )]
    async fn find_top_by_user_type_window(
        &self,
        user_id: i64,
        activity_type: i32,
        window: TimeWindow,
    ) -> Result<ActivityRecord, StoreError> {
        sqlx::query_as::<_, ActivityRecord>(
            r#"
            SELECT id, user_id, type, score, spots_time, time, created_at
            FROM user_score
            WHERE user_id = $1 AND type = $2 AND time >= $3 AND time < $4
            ORDER BY score DESC
            LIMIT 1"#,
        )
        .bind(user_id)
        .bind(activity_type)
        .bind(window.start)
        .bind(window.end)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from_sqlx)
    }

    #[tracing::instrument(
        name = "Find records in window",
        skip(self),
        fields(start = window.start, end = window.end)
    )]
    async fn find_all_by_user_window(
        &self,
        user_id: i64,
        window: TimeWindow,
        activity_type: Option<i32>,
    ) -> Result<Vec<ActivityRecord>, StoreError> {
        sqlx::query_as::<_, ActivityRecord>(
            r#"
            SELECT id, user_id, type, score, spots_time, time, created_at
            FROM user_score
            WHERE user_id = $1
              AND ($2::int IS NULL OR type = $2)
              AND time >= $3 AND time < $4"#,
        )
        .bind(user_id)
        .bind(activity_type)
        .bind(window.start)
        .bind(window.end)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::from_sqlx)
    }

    #[tracing::instrument(name = "Count user records", skip(self))]
    async fn count_by_user(
        &self,
        user_id: i64,
        activity_types: Option<&[i64]>,
    ) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM user_score
            WHERE user_id = $1 AND ($2::bigint[] IS NULL OR type = ANY($2))"#,
        )
        .bind(user_id)
        .bind(activity_types)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from_sqlx)
    }

    #[tracing::instrument(name = "Fetch page of user records", skip(self))]
    async fn find_page_by_user(
        &self,
        user_id: i64,
        activity_types: Option<&[i64]>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ActivityRecord>, StoreError> {
        // a NULL type array matches every type
        sqlx::query_as::<_, ActivityRecord>(
            r#"
            SELECT id, user_id, type, score, spots_time, time, created_at
            FROM user_score
            WHERE user_id = $1 AND ($2::bigint[] IS NULL OR type = ANY($2))
            ORDER BY time DESC, id DESC
            LIMIT $3 OFFSET $4"#,
        )
        .bind(user_id)
        .bind(activity_types)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::from_sqlx)
    }
}
