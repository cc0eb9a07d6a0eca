use crate::helpers::{DAY, DAY_ONE, body_json, spawn_app};

#[actix_web::test]
async fn returns_highest_score_of_the_day() {
    // arrange
    let app = spawn_app();
    app.insert(1, 10, 60, DAY_ONE + 100);
    app.insert(1, 55, 60, DAY_ONE + 200);
    app.insert(1, 30, 60, DAY_ONE + 300);
    // different day, different type, different user
    app.insert(1, 90, 60, DAY_ONE + DAY);
    app.insert(2, 91, 60, DAY_ONE + 400);
    app.insert_for(7, 1, 92, 60, DAY_ONE + 500);

    // act
    let response = app
        .get(&format!("/api/history/best?type=1&time={}", DAY_ONE + 3600))
        .await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    let body = body_json(response).await;
    assert_eq!(body["score"], 55);
    assert_eq!(body["type"], 1);
    assert_eq!(body["user_id"], 42);
}

#[actix_web::test]
async fn empty_day_returns_null() {
    // arrange
    let app = spawn_app();
    app.insert(1, 10, 60, DAY_ONE);

    // act
    let response = app
        .get(&format!("/api/history/best?type=1&time={}", DAY_ONE + 2 * DAY))
        .await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    assert!(body_json(response).await.is_null());
}

#[actix_web::test]
async fn missing_time_means_today() {
    // arrange
    let app = spawn_app();
    let now = chrono::Utc::now().timestamp();
    app.insert(1, 77, 60, now);

    // act
    let response = app.get("/api/history/best?type=1").await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(body_json(response).await["score"], 77);
}

#[actix_web::test]
async fn reads_parameters_from_form_body() {
    // arrange
    let app = spawn_app();
    app.insert(3, 12, 60, DAY_ONE + 10);

    // act
    let response = app
        .post_form(
            "/api/history/best",
            &serde_json::json!({ "type": "3", "time": DAY_ONE.to_string() }),
        )
        .await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(body_json(response).await["score"], 12);
}

#[actix_web::test]
async fn query_string_wins_over_form_body() {
    // arrange
    let app = spawn_app();
    app.insert(1, 11, 60, DAY_ONE + 10);
    app.insert(2, 22, 60, DAY_ONE + 10);

    // act
    let response = app
        .post_form(
            &format!("/api/history/best?type=2&time={DAY_ONE}"),
            &serde_json::json!({ "type": "1" }),
        )
        .await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(body_json(response).await["score"], 22);
}

#[actix_web::test]
async fn requires_logged_in_user() {
    // arrange
    let app = spawn_app();

    // act
    let response = app.get_anonymous("/api/history/best?type=1").await;

    // assert
    assert_eq!(response.status().as_u16(), 401);
}

#[actix_web::test]
async fn rejects_missing_or_malformed_type() {
    // arrange
    let app = spawn_app();

    for uri in [
        "/api/history/best",
        "/api/history/best?type=run",
        "/api/history/best?type=99999999999",
        "/api/history/best?type=1&time=soon",
    ] {
        // act
        let response = app.get(uri).await;

        // assert
        assert_eq!(response.status().as_u16(), 400, "{uri}");
    }
}

#[actix_web::test]
async fn database_failure_is_a_server_error() {
    // arrange
    let app = spawn_app();
    app.break_store();

    // act
    let response = app
        .get(&format!("/api/history/best?type=1&time={DAY_ONE}"))
        .await;

    // assert
    assert_eq!(response.status().as_u16(), 500);
}
