#[allow(clippy::module_inception)]
mod pagination;

pub use pagination::*;
