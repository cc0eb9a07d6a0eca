mod best;
mod list;
mod spots_time;

pub use best::*;
pub use list::*;
pub use spots_time::*;

use actix_web::web;

use crate::errors::ParamError;
use crate::params::RequestParams;

const TYPE_KEY: &str = "type";

// every history endpoint accepts its parameters from the query string or a form body
pub fn history_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/history")
            .service(
                web::resource("")
                    .route(web::get().to(list_history))
                    .route(web::post().to(list_history)),
            )
            .service(
                web::resource("/best")
                    .route(web::get().to(daily_best))
                    .route(web::post().to(daily_best)),
            )
            .service(
                web::resource("/spots_time")
                    .route(web::get().to(spots_time))
                    .route(web::post().to(spots_time)),
            ),
    );
}

fn activity_type(params: &RequestParams) -> Result<i32, ParamError> {
    let raw = params.i64(TYPE_KEY)?;
    i32::try_from(raw).map_err(|e| ParamError::malformed(TYPE_KEY, e))
}

fn optional_activity_type(params: &RequestParams) -> Result<Option<i32>, ParamError> {
    if params.has(TYPE_KEY) {
        activity_type(params).map(Some)
    } else {
        Ok(None)
    }
}
