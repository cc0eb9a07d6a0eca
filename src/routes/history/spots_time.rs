use actix_web::{HttpResponse, web};

use super::optional_activity_type;
use crate::authentication::CurrentUser;
use crate::errors::HistoryError;
use crate::history::{DayBoundary, HistoryAggregator, HistoryStore};
use crate::params::RequestParams;

#[allow(clippy::missing_errors_doc)]
#[tracing::instrument(
    name = "Get spots time per day",
    skip(params, user, store, days),
    fields(user_id = tracing::field::Empty)
)]
pub async fn spots_time(
    params: RequestParams,
    user: CurrentUser,
    store: web::Data<dyn HistoryStore>,
    days: web::Data<DayBoundary>,
) -> Result<HttpResponse, HistoryError> {
    let user_id = user.require()?;
    tracing::Span::current().record("user_id", tracing::field::display(&user_id));

    let start_time = params.i64("start_time")?;
    let end_time = params.i64("end_time")?;
    let activity_type = optional_activity_type(&params)?;

    let series = HistoryAggregator::new(store.get_ref(), *days.get_ref())
        .spots_time_series(user_id.0, start_time, end_time, activity_type)
        .await?;

    Ok(HttpResponse::Ok().json(series))
}
