//! HTTP-level integration tests for `/api/v1/stands`.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete, get, post_json, put_json, reservation_body, reserve,
};
use serde_json::json;

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_returns_seed_stands_with_low_stock_flags() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let response = get(app, "/api/v1/stands").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let stands = json["data"].as_array().unwrap();
    assert_eq!(stands.len(), 3);
    assert_eq!(stands[0]["name"], "Présentoir Entrée");
    assert_eq!(stands[0]["isReserved"], false);
    assert!(stands[0].get("reservedBy").is_none());

    let low: Vec<bool> = stands
        .iter()
        .map(|s| s["lowStock"].as_bool().unwrap())
        .collect();
    assert_eq!(low, vec![false, true, true]);
}

#[tokio::test]
async fn stand_carries_its_public_url() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let json = body_json(get(app, "/api/v1/stands/2").await).await;

    assert_eq!(
        json["data"]["publicUrl"],
        "https://presentoirs.example.com/stand/2"
    );
}

#[tokio::test]
async fn get_unknown_stand_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let response = get(app, "/api/v1/stands/404").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Reservations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reserving_one_stand_updates_stats() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let stand = reserve(&app, "1").await;
    assert_eq!(stand["isReserved"], true);
    assert_eq!(stand["reservedBy"], "Alice");
    assert!(stand["reservedUntil"].is_string());

    let stats = body_json(get(app, "/api/v1/stats").await).await;
    assert_eq!(stats["data"]["reserved"], 1);
    assert_eq!(stats["data"]["available"], 2);
}

#[tokio::test]
async fn cancel_restores_free_stand() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;
    reserve(&app, "1").await;

    let response = delete(app.clone(), "/api/v1/stands/1/reservation").await;
    assert_eq!(response.status(), StatusCode::OK);

    let stand = body_json(get(app, "/api/v1/stands/1").await).await["data"].clone();
    assert_eq!(stand["isReserved"], false);
    assert!(stand.get("reservedBy").is_none());
    assert!(stand.get("reservedUntil").is_none());
}

#[tokio::test]
async fn cancel_on_unknown_stand_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let response = delete(app, "/api/v1/stands/nope/reservation").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reserving_unknown_stand_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let response = post_json(
        app,
        "/api/v1/stands/404/reservation",
        reservation_body("Alice", 3),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn reservation_longer_than_policy_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let response = post_json(
        app.clone(),
        "/api/v1/stands/1/reservation",
        reservation_body("Alice", 31),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let stand = body_json(get(app, "/api/v1/stands/1").await).await;
    assert_eq!(stand["data"]["isReserved"], false);
}

#[tokio::test]
async fn reservation_starting_too_soon_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;
    let start = chrono::Utc::now() + chrono::Duration::hours(1);

    let response = post_json(
        app,
        "/api/v1/stands/1/reservation",
        json!({
            "name": "Alice",
            "startDate": start,
            "endDate": start + chrono::Duration::days(1),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_holder_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    for name in ["", "   "] {
        let response = post_json(
            app.clone(),
            "/api/v1/stands/1/reservation",
            reservation_body(name, 3),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "name {name:?}");
    }
}

#[tokio::test]
async fn reservation_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let app = build_test_app(dir.path()).await;
        reserve(&app, "3").await;
    }

    let app = build_test_app(dir.path()).await;
    let stand = body_json(get(app, "/api/v1/stands/3").await).await;

    assert_eq!(stand["data"]["isReserved"], true);
    assert_eq!(stand["data"]["reservedBy"], "Alice");
}

// ---------------------------------------------------------------------------
// Stock
// ---------------------------------------------------------------------------

#[tokio::test]
async fn restocking_clears_low_stock() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;
    let before = body_json(get(app.clone(), "/api/v1/stats").await).await;
    assert_eq!(before["data"]["lowStock"], 2);

    // Stand 3 holds 8 units of publication 1, whose minimum is 10.
    let response = put_json(
        app.clone(),
        "/api/v1/stands/3/stock/1",
        json!({ "quantity": 12 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let stand = body_json(response).await;
    assert_eq!(stand["data"]["lowStock"], false);

    let after = body_json(get(app, "/api/v1/stats").await).await;
    assert_eq!(after["data"]["lowStock"], 1);
}

#[tokio::test]
async fn stock_update_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let mut quantities = Vec::new();
    for _ in 0..2 {
        let response = put_json(
            app.clone(),
            "/api/v1/stands/1/stock/2",
            json!({ "quantity": 4 }),
        )
        .await;
        let stand = body_json(response).await["data"].clone();
        let stock = stand["publications"]
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["publicationId"] == "2")
            .unwrap()
            .clone();
        quantities.push((stock["quantity"].clone(), stand["lowStock"].clone()));
    }

    assert_eq!(quantities[0], quantities[1]);
    assert_eq!(quantities[0], (json!(4), json!(true)));
}

#[tokio::test]
async fn stock_update_for_unstocked_publication_is_404() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    // Stand 1 stocks publications 1 and 2 only.
    let response = put_json(app, "/api/v1/stands/1/stock/3", json!({ "quantity": 4 })).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn negative_quantity_is_a_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let response = put_json(
        app.clone(),
        "/api/v1/stands/1/stock/1",
        json!({ "quantity": -3 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].is_string());

    let stand = body_json(get(app, "/api/v1/stands/1").await).await;
    assert_eq!(stand["data"]["publications"][0]["quantity"], 15);
}
