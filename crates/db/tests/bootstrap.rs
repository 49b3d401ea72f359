//! Schema bootstrap checks: migrations applied, constraints named as the
//! error classifier expects.

use assert_matches::assert_matches;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_check_round_trips(pool: PgPool) {
    tfa_db::health_check(&pool)
        .await
        .expect("health check must pass on a fresh database");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn all_tables_exist(pool: PgPool) {
    let expected = [
        "users",
        "volunteers",
        "events",
        "event_registrations",
        "hours_logs",
        "volunteer_notes",
        "categories",
        "volunteer_categories",
    ];

    for table in expected {
        let found: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM information_schema.tables \
             WHERE table_schema = 'public' AND table_name = $1)",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(found, "table {table} must exist");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unique_constraints_use_the_uq_prefix(pool: PgPool) {
    // The HTTP error classifier maps 23505 on `uq_*` constraints to 409;
    // renaming one silently downgrades duplicates to 500s.
    let names: Vec<String> = sqlx::query_scalar(
        "SELECT conname FROM pg_constraint WHERE contype = 'u' ORDER BY conname",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(names.contains(&"uq_users_email".to_string()));
    assert!(names.contains(&"uq_volunteers_email".to_string()));
    assert!(names.contains(&"uq_categories_name".to_string()));
    assert!(names.contains(&"uq_event_registrations_event_volunteer".to_string()));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn hours_range_is_enforced_by_the_schema(pool: PgPool) {
    let volunteer_id: i64 = sqlx::query_scalar(
        "INSERT INTO volunteers (name, email) VALUES ('Alex', 'alex@example.org') RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    // 25 hours in a day must fail even if application validation is bypassed.
    let result = sqlx::query(
        "INSERT INTO hours_logs (volunteer_id, date, hours) VALUES ($1, '2024-01-05', 25)",
    )
    .bind(volunteer_id)
    .execute(&pool)
    .await;

    let err = result.expect_err("out-of-range hours must violate the check constraint");
    assert_matches!(
        err,
        sqlx::Error::Database(db) if db.constraint() == Some("ck_hours_logs_hours_range")
    );
}
