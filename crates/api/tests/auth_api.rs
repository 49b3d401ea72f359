//! Integration tests for login and registration.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;
use sqlx::PgPool;

fn register_body(email: &str) -> serde_json::Value {
    json!({
        "email": email,
        "password": "sufficiently-long",
        "name": "Alex Johnson",
        "phone": "555-111-2222",
    })
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_creates_user_and_volunteer_profile(pool: PgPool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(app, "/api/v1/auth/register", register_body("alex@example.org")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["user"]["email"], "alex@example.org");
    assert_eq!(json["data"]["user"]["role"], "volunteer");
    assert_eq!(json["data"]["volunteer"]["name"], "Alex Johnson");

    // The profile must be linked back to the account.
    let user_id = json["data"]["user"]["id"].as_i64().unwrap();
    assert_eq!(json["data"]["volunteer"]["user_id"], user_id);

    // The stored hash must never be the plaintext password.
    let hash: String =
        sqlx::query_scalar("SELECT password_hash FROM users WHERE email = 'alex@example.org'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(hash.starts_with("$argon2id$"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_normalizes_email_case(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response =
        post_json(app, "/api/v1/auth/register", register_body("  Alex@Example.ORG ")).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["user"]["email"], "alex@example.org");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_short_passwords(pool: PgPool) {
    let app = common::build_test_app(pool);

    let mut body = register_body("alex@example.org");
    body["password"] = json!("short");

    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_duplicate_email_with_conflict(pool: PgPool) {
    let first = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/register",
        register_body("alex@example.org"),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/register",
        register_body("alex@example.org"),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_succeeds_with_registered_credentials(pool: PgPool) {
    let created = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/register",
        register_body("alex@example.org"),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/login",
        json!({"email": "alex@example.org", "password": "sufficiently-long"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["email"], "alex@example.org");
    assert!(
        json["data"].get("password_hash").is_none(),
        "hash must never be in a response"
    );

    // A successful login stamps last_login.
    let last_login: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT last_login FROM users WHERE email = 'alex@example.org'")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert!(last_login.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_rejects_wrong_password(pool: PgPool) {
    let created = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/register",
        register_body("alex@example.org"),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/login",
        json!({"email": "alex@example.org", "password": "wrong-password"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_rejects_unknown_account(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({"email": "ghost@example.org", "password": "whatever-it-is"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_rejects_inactive_accounts(pool: PgPool) {
    let created = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/register",
        register_body("alex@example.org"),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);

    sqlx::query("UPDATE users SET is_active = FALSE WHERE email = 'alex@example.org'")
        .execute(&pool)
        .await
        .unwrap();

    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/auth/login",
        json!({"email": "alex@example.org", "password": "sufficiently-long"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
