//! Dashboard statistics model.

use serde::Serialize;
use sqlx::FromRow;

/// Headline counts for the admin dashboard.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DashboardStats {
    pub total_volunteers: i64,
    pub active_volunteers: i64,
    pub total_events: i64,
    pub upcoming_events: i64,
    /// Sum of approved hours across all volunteers.
    pub total_hours: f64,
    /// Sum of hours still awaiting approval.
    pub pending_hours: f64,
    pub total_registrations: i64,
}
