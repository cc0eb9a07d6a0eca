use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use actix_web::{
    App, HttpResponse,
    cookie::Key,
    http::StatusCode,
    middleware::from_fn,
    test::{self, TestRequest},
    web::{self, Bytes, Data},
};
use std::sync::Arc;

use activity_history::{authentication::load_current_user, history::HistoryStore, routes};

use crate::helpers::{DAY_ONE, TestApp, spawn_app};

// runs the same session stack as the server, with cookies instead of redis.
// `user_id` (when given) is written to the session first, as the login service would
async fn call_with_session(
    app: &TestApp,
    user_id: Option<serde_json::Value>,
    uri: &str,
) -> Result<(StatusCode, Bytes), actix_web::Error> {
    let store: Arc<dyn HistoryStore> = app.store.clone();
    let service = test::init_service(
        App::new()
            .wrap(from_fn(load_current_user))
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                Key::generate(),
            ))
            .route(
                "/log_in",
                web::get().to(move |session: Session| {
                    let user_id = user_id.clone();
                    async move {
                        if let Some(user_id) = user_id {
                            session.insert("user_id", user_id).unwrap();
                        }
                        HttpResponse::Ok().finish()
                    }
                }),
            )
            .configure(routes::configure)
            .app_data(Data::from(store))
            .app_data(Data::new(app.days))
            .app_data(Data::new(app.page_option)),
    )
    .await;

    let log_in = test::call_service(&service, TestRequest::get().uri("/log_in").to_request()).await;
    let mut request = TestRequest::get().uri(uri);
    if let Some(cookie) = log_in.response().cookies().next() {
        request = request.cookie(cookie.into_owned());
    }

    let response = test::try_call_service(&service, request.to_request()).await?;
    let status = response.status();
    Ok((status, test::read_body(response).await))
}

#[actix_web::test]
async fn session_user_reaches_the_handler() {
    // arrange
    let app = spawn_app();
    app.insert(1, 64, 60, DAY_ONE + 10);

    // act
    let (status, body) = call_with_session(
        &app,
        Some(serde_json::json!(app.user_id)),
        &format!("/api/history/best?type=1&time={DAY_ONE}"),
    )
    .await
    .unwrap();

    // assert
    assert_eq!(status.as_u16(), 200);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["score"], 64);
    assert_eq!(body["user_id"], app.user_id);
}

#[actix_web::test]
async fn session_without_user_is_unauthorized() {
    // arrange
    let app = spawn_app();
    app.insert(1, 64, 60, DAY_ONE + 10);

    // act
    let (status, _) = call_with_session(
        &app,
        None,
        &format!("/api/history/best?type=1&time={DAY_ONE}"),
    )
    .await
    .unwrap();

    // assert
    assert_eq!(status.as_u16(), 401);
}

#[actix_web::test]
async fn unreadable_session_user_is_a_server_error() {
    // arrange
    let app = spawn_app();

    // act
    let error = call_with_session(
        &app,
        Some(serde_json::json!("not-a-user-id")),
        "/api/history?p=1",
    )
    .await
    .unwrap_err();

    // assert
    assert_eq!(error.as_response_error().status_code().as_u16(), 500);
}
