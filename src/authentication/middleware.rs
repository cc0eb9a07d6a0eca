use actix_web::{
    FromRequest, HttpMessage, HttpRequest,
    body::MessageBody,
    dev::{Payload, ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    middleware::Next,
};
use std::fmt;
use std::future::{Ready, ready};

use crate::errors::HistoryError;
use crate::session_state::TypedSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Put the session's user id (if any) into the request extensions.
///
/// Anonymous requests pass through untouched, handlers decide whether they
/// need a user via [`CurrentUser`].
#[allow(clippy::missing_errors_doc)]
pub async fn load_current_user(
    mut req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let session = {
        let (http_request, payload) = req.parts_mut();
        TypedSession::from_request(http_request, payload).await
    }?;

    let user_id = session.get_user_id().map_err(|e| {
        tracing::error!("Failed to read session: {e:?}");
        ErrorInternalServerError(e)
    })?;
    if let Some(user_id) = user_id {
        req.extensions_mut().insert(UserId(user_id));
    }

    next.call(req).await
}

// the user attached to this request, if someone is logged in
pub struct CurrentUser(Option<UserId>);

impl CurrentUser {
    #[allow(clippy::missing_errors_doc)]
    pub fn require(&self) -> Result<UserId, HistoryError> {
        self.0.ok_or(HistoryError::NotLoggedIn)
    }
}

impl FromRequest for CurrentUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self(req.extensions().get::<UserId>().copied())))
    }
}
