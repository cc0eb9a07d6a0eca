mod aggregator;
mod day;
mod postgres;
mod store;

pub use aggregator::HistoryAggregator;
pub use day::{DayBoundary, DayKey};
pub use postgres::PgHistoryStore;
pub use store::HistoryStore;
