mod health_check;
mod history;

pub use health_check::*;
pub use history::*;

use actix_web::web;

// the full route table, shared by the server and the api tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health_check", web::get().to(health_check));
    history_routes(cfg);
}
