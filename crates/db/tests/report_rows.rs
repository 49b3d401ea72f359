//! Integration tests for the report repository: filter translation, join
//! shape, and row ordering.

use sqlx::PgPool;
use tfa_db::models::report::ReportFilter;
use tfa_db::repositories::ReportRepo;

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

async fn insert_volunteer(pool: &PgPool, name: &str, email: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO volunteers (name, email) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn insert_event(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO events (name, start_date) VALUES ($1, '2024-01-01') RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap()
}

async fn insert_log(
    pool: &PgPool,
    volunteer_id: i64,
    event_id: Option<i64>,
    day: &str,
    hours: f64,
    status: &str,
) {
    sqlx::query(
        "INSERT INTO hours_logs (volunteer_id, event_id, date, hours, status) \
         VALUES ($1, $2, $3::date, $4, $5)",
    )
    .bind(volunteer_id)
    .bind(event_id)
    .bind(day)
    .bind(hours)
    .bind(status)
    .execute(pool)
    .await
    .unwrap();
}

fn approved() -> ReportFilter {
    ReportFilter {
        status: "approved".to_string(),
        start: None,
        end: None,
        vq: None,
        eq: None,
    }
}

/// Alex and Priya share a day so the secondary name ordering is observable.
async fn seed(pool: &PgPool) -> (i64, i64, i64) {
    let alex = insert_volunteer(pool, "alex Johnson", "alex@example.org").await;
    let priya = insert_volunteer(pool, "Priya Patel", "priya@example.org").await;
    let pantry = insert_event(pool, "Pantry").await;

    insert_log(pool, priya, Some(pantry), "2024-01-05", 3.0, "approved").await;
    insert_log(pool, alex, Some(pantry), "2024-01-05", 2.5, "approved").await;
    insert_log(pool, alex, None, "2024-01-20", 1.5, "approved").await;
    insert_log(pool, priya, Some(pantry), "2024-02-01", 4.0, "pending").await;

    (alex, priya, pantry)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn rows_order_by_date_desc_then_name_case_insensitively(pool: PgPool) {
    seed(&pool).await;

    let rows = ReportRepo::query_hours_entries(&pool, &approved())
        .await
        .unwrap();

    assert_eq!(rows.len(), 3);
    // Newest date first.
    assert_eq!(rows[0].date.to_string(), "2024-01-20");
    // Shared date: lowercase "alex" still sorts before "Priya".
    assert_eq!(rows[1].volunteer_name, "alex Johnson");
    assert_eq!(rows[2].volunteer_name, "Priya Patel");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_is_always_constrained(pool: PgPool) {
    seed(&pool).await;

    let rows = ReportRepo::query_hours_entries(
        &pool,
        &ReportFilter {
            status: "pending".to_string(),
            ..approved()
        },
    )
    .await
    .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, "pending");
    assert!((rows[0].hours - 4.0).abs() < f64::EPSILON);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn date_bounds_are_inclusive(pool: PgPool) {
    seed(&pool).await;

    let rows = ReportRepo::query_hours_entries(
        &pool,
        &ReportFilter {
            start: Some("2024-01-05".parse().unwrap()),
            end: Some("2024-01-05".parse().unwrap()),
            ..approved()
        },
    )
    .await
    .unwrap();

    assert_eq!(rows.len(), 2, "both endpoints of the range must be included");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn volunteer_query_matches_name_or_email(pool: PgPool) {
    seed(&pool).await;

    // Matches Priya only by email.
    let rows = ReportRepo::query_hours_entries(
        &pool,
        &ReportFilter {
            vq: Some("priya@".to_string()),
            ..approved()
        },
    )
    .await
    .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].volunteer_email, "priya@example.org");

    // Case-folded name match.
    let rows = ReportRepo::query_hours_entries(
        &pool,
        &ReportFilter {
            vq: Some("JOHNSON".to_string()),
            ..approved()
        },
    )
    .await
    .unwrap();
    assert_eq!(rows.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_query_excludes_unassigned_rows(pool: PgPool) {
    seed(&pool).await;

    let rows = ReportRepo::query_hours_entries(
        &pool,
        &ReportFilter {
            eq: Some("PANTRY".to_string()),
            ..approved()
        },
    )
    .await
    .unwrap();

    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(row.event_name.as_deref(), Some("Pantry"));
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unassigned_rows_carry_null_event_identity(pool: PgPool) {
    seed(&pool).await;

    let rows = ReportRepo::query_hours_entries(&pool, &approved())
        .await
        .unwrap();

    let unassigned = rows
        .iter()
        .find(|r| r.event_id.is_none())
        .expect("one unassigned entry must survive the join");
    assert!(unassigned.event_name.is_none());
    assert!((unassigned.hours - 1.5).abs() < f64::EPSILON);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn conjunction_of_all_filters(pool: PgPool) {
    let (_, _, _) = seed(&pool).await;

    let rows = ReportRepo::query_hours_entries(
        &pool,
        &ReportFilter {
            status: "approved".to_string(),
            start: Some("2024-01-01".parse().unwrap()),
            end: Some("2024-01-31".parse().unwrap()),
            vq: Some("alex".to_string()),
            eq: Some("pantry".to_string()),
        },
    )
    .await
    .unwrap();

    // Only Alex's January Pantry entry satisfies every predicate at once.
    assert_eq!(rows.len(), 1);
    assert!((rows[0].hours - 2.5).abs() < f64::EPSILON);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn no_matches_returns_an_empty_set(pool: PgPool) {
    seed(&pool).await;

    let rows = ReportRepo::query_hours_entries(
        &pool,
        &ReportFilter {
            vq: Some("nobody".to_string()),
            ..approved()
        },
    )
    .await
    .unwrap();

    assert!(rows.is_empty());
}
