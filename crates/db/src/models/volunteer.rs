//! Volunteer profile model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tfa_core::types::{DbId, Timestamp};

/// A row from the `volunteers` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Volunteer {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub alternate_phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub status: String,
    pub availability: Option<String>,
    pub skills: Option<String>,
    pub interests: Option<String>,
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A volunteer row with approved-hours aggregates, as returned by listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VolunteerWithStats {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub volunteer: Volunteer,
    /// Count of this volunteer's approved hours logs.
    pub total_logs: i64,
    /// Sum of this volunteer's approved hours.
    pub total_hours: f64,
}

/// Query parameters for `GET /volunteers`.
#[derive(Debug, Default, Deserialize)]
pub struct VolunteerListParams {
    /// Case-insensitive substring match on name, email, or phone.
    pub q: Option<String>,
    pub status: Option<String>,
    /// Substring match on the free-form skills field.
    pub skills: Option<String>,
}

/// DTO for creating a volunteer.
#[derive(Debug, Deserialize)]
pub struct CreateVolunteer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub alternate_phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub status: Option<String>,
    pub availability: Option<String>,
    pub skills: Option<String>,
    pub interests: Option<String>,
    pub email_notifications: Option<bool>,
    pub sms_notifications: Option<bool>,
    pub notes: Option<String>,
}

/// DTO for a partial volunteer update.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateVolunteer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub alternate_phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub emergency_contact_relationship: Option<String>,
    pub status: Option<String>,
    pub availability: Option<String>,
    pub skills: Option<String>,
    pub interests: Option<String>,
    pub email_notifications: Option<bool>,
    pub sms_notifications: Option<bool>,
    pub notes: Option<String>,
}
