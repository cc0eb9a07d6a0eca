use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use super::ErrorMessage;

#[derive(thiserror::Error, Debug)]
pub enum ParamError {
    #[error("Missing required parameter `{0}`")]
    MissingParameter(String),
    #[error("Malformed parameter `{key}`")]
    MalformedParameter {
        key: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("Invalid page request")]
    InvalidPageRequest(#[source] anyhow::Error),
    #[error("Unreadable form body")]
    MalformedForm(#[source] anyhow::Error),
}

impl ParamError {
    pub(crate) fn malformed(key: &str, source: impl Into<anyhow::Error>) -> Self {
        Self::MalformedParameter {
            key: key.to_string(),
            source: source.into(),
        }
    }
}

impl ResponseError for ParamError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorMessage::new(self.to_string()))
    }
}
