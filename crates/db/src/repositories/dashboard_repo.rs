//! Repository for the admin dashboard statistics.

use sqlx::PgPool;

use crate::models::dashboard::DashboardStats;

/// Provides the aggregated dashboard counters.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute all headline counts in a single round-trip.
    pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        sqlx::query_as::<_, DashboardStats>(
            "SELECT \
                (SELECT COUNT(*) FROM volunteers) AS total_volunteers, \
                (SELECT COUNT(*) FROM volunteers \
                  WHERE status = 'active') AS active_volunteers, \
                (SELECT COUNT(*) FROM events) AS total_events, \
                (SELECT COUNT(*) FROM events \
                  WHERE start_date >= CURRENT_DATE \
                    AND status = 'scheduled') AS upcoming_events, \
                (SELECT COALESCE(SUM(hours), 0) FROM hours_logs \
                  WHERE status = 'approved') AS total_hours, \
                (SELECT COALESCE(SUM(hours), 0) FROM hours_logs \
                  WHERE status = 'pending') AS pending_hours, \
                (SELECT COUNT(*) FROM event_registrations) AS total_registrations",
        )
        .fetch_one(pool)
        .await
    }
}
