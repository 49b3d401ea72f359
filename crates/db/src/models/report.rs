//! Hours report filter and row types.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use tfa_core::types::DbId;

/// Structured filter for the hours report query.
///
/// Absent optional fields mean "no constraint". The repository translates
/// this into a parameterized WHERE clause; user input never reaches the SQL
/// text itself.
#[derive(Debug, Clone)]
pub struct ReportFilter {
    /// Hours log status to include. Always present (the handler resolves the
    /// default before building the filter).
    pub status: String,
    /// Inclusive lower bound on the entry date.
    pub start: Option<NaiveDate>,
    /// Inclusive upper bound on the entry date.
    pub end: Option<NaiveDate>,
    /// Case-insensitive substring match on volunteer name or email.
    pub vq: Option<String>,
    /// Case-insensitive substring match on event name. Entries with no
    /// event never match.
    pub eq: Option<String>,
}

/// One joined row of the hours report detail view.
///
/// `event_id` and `event_name` are null for hours logged without an event.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HoursReportRow {
    pub id: DbId,
    pub date: NaiveDate,
    pub hours: f64,
    pub notes: Option<String>,
    pub status: String,
    pub volunteer_id: DbId,
    pub volunteer_name: String,
    pub volunteer_email: String,
    pub event_id: Option<DbId>,
    pub event_name: Option<String>,
}
