//! Hours log model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tfa_core::types::{DbId, Timestamp};

/// A row from the `hours_logs` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HoursLog {
    pub id: DbId,
    pub volunteer_id: DbId,
    pub event_id: Option<DbId>,
    pub date: NaiveDate,
    pub hours: f64,
    pub status: String,
    pub notes: Option<String>,
    pub approved_by: Option<DbId>,
    pub approved_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// An hours log joined with volunteer, event, and approver identity,
/// as returned by the log listing endpoint.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HoursLogWithContext {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub log: HoursLog,
    pub volunteer_name: String,
    pub volunteer_email: String,
    pub event_name: Option<String>,
    pub approved_by_email: Option<String>,
}

/// Query parameters for `GET /logs`.
#[derive(Debug, Default, Deserialize)]
pub struct HoursLogListParams {
    pub volunteer_id: Option<DbId>,
    pub event_id: Option<DbId>,
    pub status: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// DTO for creating an hours log.
#[derive(Debug, Deserialize)]
pub struct CreateHoursLog {
    pub volunteer_id: DbId,
    pub event_id: Option<DbId>,
    pub date: NaiveDate,
    pub hours: f64,
    pub notes: Option<String>,
    pub status: Option<String>,
}

/// DTO for a partial hours log update.
///
/// Setting `status` to `approved` together with `approved_by` stamps
/// `approved_at`; other status changes leave the approval fields untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateHoursLog {
    pub event_id: Option<DbId>,
    pub date: Option<NaiveDate>,
    pub hours: Option<f64>,
    pub notes: Option<String>,
    pub status: Option<String>,
    pub approved_by: Option<DbId>,
}
