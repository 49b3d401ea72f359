//! Volunteer note model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tfa_core::types::{DbId, Timestamp};

/// A row from the `volunteer_notes` table, joined with the author's email.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VolunteerNote {
    pub id: DbId,
    pub volunteer_id: DbId,
    pub created_by: Option<DbId>,
    pub note_type: String,
    pub note: String,
    pub is_private: bool,
    pub created_at: Timestamp,
    pub created_by_email: Option<String>,
}

/// Query parameters for listing a volunteer's notes.
#[derive(Debug, Default, Deserialize)]
pub struct VolunteerNoteListParams {
    /// Private notes are hidden unless explicitly requested.
    #[serde(default)]
    pub include_private: bool,
}

/// DTO for attaching a note to a volunteer.
#[derive(Debug, Deserialize)]
pub struct CreateVolunteerNote {
    pub note: String,
    pub note_type: Option<String>,
    pub is_private: Option<bool>,
    pub created_by: Option<DbId>,
}
