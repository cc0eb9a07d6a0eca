use crate::helpers::{DAY, DAY_ONE, body_json, spawn_app};

#[actix_web::test]
async fn sums_duration_per_day() {
    // arrange
    let app = spawn_app();
    app.insert(1, 0, 100, DAY_ONE + 60);
    app.insert(2, 0, 50, DAY_ONE + 7200);
    app.insert(1, 0, 200, DAY_ONE + DAY + 60);
    // outside the window
    app.insert(1, 0, 999, DAY_ONE + 3 * DAY);

    // act
    let response = app
        .get(&format!(
            "/api/history/spots_time?start_time={}&end_time={}",
            DAY_ONE,
            DAY_ONE + 3 * DAY
        ))
        .await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "2024-03-10": 150, "2024-03-11": 200 })
    );
}

#[actix_web::test]
async fn filters_by_type_when_given() {
    // arrange
    let app = spawn_app();
    app.insert(1, 0, 100, DAY_ONE + 60);
    app.insert(2, 0, 50, DAY_ONE + 120);

    // act
    let response = app
        .get(&format!(
            "/api/history/spots_time?start_time={}&end_time={}&type=2",
            DAY_ONE,
            DAY_ONE + DAY
        ))
        .await;

    // assert
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "2024-03-10": 50 })
    );
}

#[actix_web::test]
async fn reversed_or_empty_window_returns_empty_map() {
    // arrange
    let app = spawn_app();
    app.insert(1, 0, 100, DAY_ONE + 60);

    for (start, end) in [(DAY_ONE + DAY, DAY_ONE), (DAY_ONE + 5 * DAY, DAY_ONE + 6 * DAY)] {
        // act
        let response = app
            .get(&format!(
                "/api/history/spots_time?start_time={start}&end_time={end}"
            ))
            .await;

        // assert
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(body_json(response).await, serde_json::json!({}));
    }
}

#[actix_web::test]
async fn requires_both_bounds() {
    // arrange
    let app = spawn_app();

    for uri in [
        "/api/history/spots_time?start_time=0".to_string(),
        "/api/history/spots_time?end_time=10".to_string(),
        format!("/api/history/spots_time?start_time={DAY_ONE}&end_time=later"),
        format!("/api/history/spots_time?start_time=0&end_time={DAY_ONE}&type=x"),
    ] {
        // act
        let response = app.get(&uri).await;

        // assert
        assert_eq!(response.status().as_u16(), 400, "{uri}");
    }
}

#[actix_web::test]
async fn requires_logged_in_user() {
    // arrange
    let app = spawn_app();

    // act
    let response = app
        .get_anonymous("/api/history/spots_time?start_time=0&end_time=10")
        .await;

    // assert
    assert_eq!(response.status().as_u16(), 401);
}

#[actix_web::test]
async fn huge_durations_do_not_overflow() {
    // arrange
    let app = spawn_app();
    app.insert(1, 0, i64::MAX, DAY_ONE + 60);
    app.insert(1, 0, 1, DAY_ONE + 120);

    // act
    let response = app
        .get(&format!(
            "/api/history/spots_time?start_time={}&end_time={}",
            DAY_ONE,
            DAY_ONE + DAY
        ))
        .await;

    // assert
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({ "2024-03-10": i64::MAX })
    );
}
