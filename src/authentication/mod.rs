mod middleware;

pub use middleware::{CurrentUser, UserId, load_current_user};
