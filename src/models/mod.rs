pub mod history;

pub use history::{ActivityRecord, TimeWindow};
