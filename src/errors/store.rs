// what a `HistoryStore` can report back.
// `NotFound` is an expected outcome that callers translate into "no record",
// everything else is a real failure of the backing database
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    // sqlx reports an empty `fetch_one` as an error, fold it into `NotFound`
    #[must_use]
    pub fn from_sqlx(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::NotFound,
            other => Self::Database(other),
        }
    }
}
