pub mod authentication;
pub mod configuration;
pub mod errors;
pub mod history;
pub mod models;
pub mod pagination;
pub mod params;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod telemetry;
