use actix_web::{HttpResponse, web};
use chrono::Utc;

use super::activity_type;
use crate::authentication::CurrentUser;
use crate::errors::HistoryError;
use crate::history::{DayBoundary, HistoryAggregator, HistoryStore};
use crate::params::RequestParams;

// best score of one activity type for a day, today when `time` is missing or 0.
// responds with `null` when nothing was recorded that day
#[allow(clippy::missing_errors_doc)]
#[tracing::instrument(
    name = "Get daily best score",
    skip(params, user, store, days),
    fields(user_id = tracing::field::Empty)
)]
pub async fn daily_best(
    params: RequestParams,
    user: CurrentUser,
    store: web::Data<dyn HistoryStore>,
    days: web::Data<DayBoundary>,
) -> Result<HttpResponse, HistoryError> {
    let user_id = user.require()?;
    tracing::Span::current().record("user_id", tracing::field::display(&user_id));

    let activity_type = activity_type(&params)?;
    let time = match params.i64_or("time", 0)? {
        0 => Utc::now().timestamp(),
        time => time,
    };

    let best = HistoryAggregator::new(store.get_ref(), *days.get_ref())
        .daily_best(user_id.0, activity_type, time)
        .await?;

    Ok(HttpResponse::Ok().json(best))
}
