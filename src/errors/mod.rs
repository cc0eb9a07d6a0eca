mod history;
mod params;
mod store;

pub use history::*;
pub use params::*;
pub use store::*;

// json body for user-facing 4xx responses
#[derive(serde::Serialize)]
pub(crate) struct ErrorMessage {
    message: String,
}

impl ErrorMessage {
    pub(crate) const fn new(message: String) -> Self {
        Self { message }
    }
}
