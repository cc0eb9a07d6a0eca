use actix_session::{Session, SessionExt, SessionGetError};
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};

// wrapper type for session
// the session itself is written by the login service, we only read the user id
pub struct TypedSession(Session);

#[allow(clippy::missing_errors_doc)]
impl TypedSession {
    const USER_ID_KEY: &'static str = "user_id";

    pub fn get_user_id(&self) -> Result<Option<i64>, SessionGetError> {
        self.0.get(Self::USER_ID_KEY)
    }
}

impl FromRequest for TypedSession {
    // return the same error as Session's implementation of FromRequest
    type Error = <Session as FromRequest>::Error;

    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self(req.get_session())))
    }
}
