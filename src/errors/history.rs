use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use super::{ErrorMessage, ParamError, StoreError};

#[derive(thiserror::Error, Debug)]
pub enum HistoryError {
    #[error("User is not logged in")]
    NotLoggedIn,
    #[error(transparent)]
    InvalidParameter(#[from] ParamError),
    #[error("Timestamp {0} is outside the supported range")]
    TimestampOutOfRange(i64),
    #[error("Database error")]
    DatabaseError(#[source] StoreError),
}

impl ResponseError for HistoryError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotLoggedIn => StatusCode::UNAUTHORIZED,
            Self::InvalidParameter(e) => e.status_code(),
            Self::TimestampOutOfRange(_) => StatusCode::BAD_REQUEST,
            Self::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // don't leak database details to the client
            Self::DatabaseError(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "History query failed"
                );
                HttpResponse::InternalServerError().finish()
            }
            Self::InvalidParameter(e) => e.error_response(),
            _ => HttpResponse::build(self.status_code()).json(ErrorMessage::new(self.to_string())),
        }
    }
}
