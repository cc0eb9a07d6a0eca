use actix_web::{HttpResponse, web};

use crate::authentication::CurrentUser;
use crate::errors::HistoryError;
use crate::history::{DayBoundary, HistoryAggregator, HistoryStore};
use crate::pagination::{PageOption, PageRequest};
use crate::params::RequestParams;

#[allow(clippy::missing_errors_doc)]
#[tracing::instrument(
    name = "List history with pagination",
    skip(params, user, store, days, page_option),
    fields(user_id = tracing::field::Empty)
)]
pub async fn list_history(
    params: RequestParams,
    user: CurrentUser,
    store: web::Data<dyn HistoryStore>,
    days: web::Data<DayBoundary>,
    page_option: web::Data<PageOption>,
) -> Result<HttpResponse, HistoryError> {
    let user_id = user.require()?;
    tracing::Span::current().record("user_id", tracing::field::display(&user_id));

    let page = PageRequest::from_params(&params, Some(page_option.get_ref()))?;
    // `types=1,3` narrows the listing, no `types` means everything
    let types = if params.has("types") {
        Some(params.i64_list("types", None)?)
    } else {
        None
    };

    let response = HistoryAggregator::new(store.get_ref(), *days.get_ref())
        .list_page(user_id.0, types.as_deref(), &page)
        .await?;

    tracing::info!(
        "Retrieved {} records for page {} (page_size: {})",
        response.data.len(),
        page.page(),
        page.page_size()
    );

    Ok(HttpResponse::Ok().json(response))
}
