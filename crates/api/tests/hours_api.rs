//! Integration tests for hours log CRUD and the approval workflow.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn seed_volunteer(pool: &PgPool, name: &str, email: &str) -> i64 {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/volunteers",
        json!({"name": name, "email": email}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn seed_approver(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (email, password_hash, role) \
         VALUES ('admin@example.org', 'x', 'admin') RETURNING id",
    )
    .fetch_one(pool)
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn new_logs_default_to_pending(pool: PgPool) {
    let alex = seed_volunteer(&pool, "Alex", "alex@example.org").await;

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/logs",
        json!({"volunteer_id": alex, "date": "2024-01-05", "hours": 2.5}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "pending");
    assert!(json["data"]["approved_by"].is_null());
    assert!(json["data"]["approved_at"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hours_out_of_range_are_rejected(pool: PgPool) {
    let alex = seed_volunteer(&pool, "Alex", "alex@example.org").await;

    for hours in [0.0, -2.0, 24.5] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/logs",
            json!({"volunteer_id": alex, "date": "2024-01-05", "hours": hours}),
        )
        .await;
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "hours={hours} must be rejected"
        );
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn log_for_unknown_volunteer_is_rejected(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/logs",
        json!({"volunteer_id": 9999, "date": "2024-01-05", "hours": 2.0}),
    )
    .await;
    // Foreign key violation surfaces as a bad request, not a 500.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_filters_by_volunteer_and_date_range(pool: PgPool) {
    let alex = seed_volunteer(&pool, "Alex", "alex@example.org").await;
    let priya = seed_volunteer(&pool, "Priya", "priya@example.org").await;

    for (volunteer, day) in [(alex, "2024-01-05"), (alex, "2024-02-10"), (priya, "2024-01-20")] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/logs",
            json!({"volunteer_id": volunteer, "date": day, "hours": 1.0}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(
        get(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/logs?volunteer_id={alex}"),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let json = body_json(
        get(
            common::build_test_app(pool),
            "/api/v1/logs?start_date=2024-01-10&end_date=2024-01-31",
        )
        .await,
    )
    .await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["volunteer_name"], "Priya");
}

// ---------------------------------------------------------------------------
// Approval workflow
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn approving_stamps_approver_and_timestamp(pool: PgPool) {
    let alex = seed_volunteer(&pool, "Alex", "alex@example.org").await;
    let admin = seed_approver(&pool).await;

    let created = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/logs",
            json!({"volunteer_id": alex, "date": "2024-01-05", "hours": 2.5}),
        )
        .await,
    )
    .await;
    let log_id = created["data"]["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/logs/{log_id}"),
        json!({"status": "approved", "approved_by": admin}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "approved");
    assert_eq!(json["data"]["approved_by"], admin);
    assert!(json["data"]["approved_at"].is_string());

    // The approver's email shows up in the joined listing.
    let json = body_json(
        get(
            common::build_test_app(pool),
            "/api/v1/logs?status=approved",
        )
        .await,
    )
    .await;
    let rows = json["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["approved_by_email"], "admin@example.org");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn rejecting_leaves_approval_fields_untouched(pool: PgPool) {
    let alex = seed_volunteer(&pool, "Alex", "alex@example.org").await;

    let created = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/logs",
            json!({"volunteer_id": alex, "date": "2024-01-05", "hours": 2.5}),
        )
        .await,
    )
    .await;
    let log_id = created["data"]["id"].as_i64().unwrap();

    let json = body_json(
        put_json(
            common::build_test_app(pool),
            &format!("/api/v1/logs/{log_id}"),
            json!({"status": "rejected"}),
        )
        .await,
    )
    .await;
    assert_eq!(json["data"]["status"], "rejected");
    assert!(json["data"]["approved_by"].is_null());
    assert!(json["data"]["approved_at"].is_null());
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_the_log(pool: PgPool) {
    let alex = seed_volunteer(&pool, "Alex", "alex@example.org").await;

    let created = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            "/api/v1/logs",
            json!({"volunteer_id": alex, "date": "2024-01-05", "hours": 2.5}),
        )
        .await,
    )
    .await;
    let log_id = created["data"]["id"].as_i64().unwrap();

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/logs/{log_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(common::build_test_app(pool), "/api/v1/logs").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}
