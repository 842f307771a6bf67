//! Integration tests for the ticket endpoints: issuing on arrival,
//! closing on departure, and the error mappings around both.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_lot, delete, get, issue_ticket, post_json};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// POST /ticket
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn issue_ticket_returns_open_ticket(pool: PgPool) {
    let app = common::build_test_app(pool);
    let lot_id = create_lot(&app, "Arrivals", 5).await;

    let response = post_json(
        app,
        "/ticket",
        json!({ "car_licence_plate": "AB123CD", "parking_lot_id": lot_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let ticket = body_json(response).await;
    // The id is generated server-side, in canonical UUID form.
    Uuid::parse_str(ticket["id"].as_str().unwrap()).unwrap();
    assert_eq!(ticket["car_licence_plate"], "AB123CD");
    assert_eq!(ticket["parking_lot_id"], lot_id);
    assert!(ticket["arrival_time"].is_string());
    assert!(ticket["leave_time"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn issue_ticket_rejects_empty_plate(pool: PgPool) {
    let app = common::build_test_app(pool);
    let lot_id = create_lot(&app, "Picky", 5).await;

    let response = post_json(
        app,
        "/ticket",
        json!({ "car_licence_plate": "", "parking_lot_id": lot_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn issue_ticket_for_unknown_lot_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);

    // Only the foreign-key constraint guards the lot reference.
    let response = post_json(
        app,
        "/ticket",
        json!({ "car_licence_plate": "ZZ999ZZ", "parking_lot_id": 424242 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "INVALID_REFERENCE");
}

// ---------------------------------------------------------------------------
// DELETE /ticket/{ticketId}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn close_ticket_sets_leave_time(pool: PgPool) {
    let app = common::build_test_app(pool);
    let lot_id = create_lot(&app, "Departures", 5).await;
    let ticket_id = issue_ticket(&app, lot_id, "EF456GH").await;

    let response = delete(app, &format!("/ticket/{ticket_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let ticket = body_json(response).await;
    assert_eq!(ticket["id"], ticket_id.as_str());
    assert_eq!(ticket["parking_lot_id"], lot_id);
    assert!(ticket["leave_time"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn close_ticket_twice_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let lot_id = create_lot(&app, "Once", 5).await;
    let ticket_id = issue_ticket(&app, lot_id, "IJ789KL").await;

    let response = delete(app.clone(), &format!("/ticket/{ticket_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(app, &format!("/ticket/{ticket_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn close_unknown_ticket_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = delete(app, &format!("/ticket/{}", Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn close_with_malformed_ticket_id_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = delete(app, "/ticket/not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn issue_and_close_brings_usage_back_to_zero(pool: PgPool) {
    let app = common::build_test_app(pool);
    let lot_id = create_lot(&app, "Lot A", 10).await;

    let ticket_id = issue_ticket(&app, lot_id, "AB123CD").await;

    let response = get(app.clone(), &format!("/parkingLot/usage?id={lot_id}")).await;
    assert_eq!(body_json(response).await[&lot_id.to_string()], 10.0);

    let response = delete(app.clone(), &format!("/ticket/{ticket_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, &format!("/parkingLot/usage?id={lot_id}")).await;
    assert_eq!(body_json(response).await[&lot_id.to_string()], 0.0);
}
