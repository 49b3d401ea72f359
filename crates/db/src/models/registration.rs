//! Event registration model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tfa_core::types::{DbId, Timestamp};

/// A row from the `event_registrations` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Registration {
    pub id: DbId,
    pub event_id: DbId,
    pub volunteer_id: DbId,
    pub status: String,
    pub notes: Option<String>,
    pub registered_at: Timestamp,
    pub confirmed_at: Option<Timestamp>,
}

/// A registration joined with volunteer identity, for event detail views.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RegistrationWithVolunteer {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub registration: Registration,
    pub volunteer_name: String,
    pub volunteer_email: String,
    pub volunteer_phone: Option<String>,
}

/// DTO for registering a volunteer for an event.
#[derive(Debug, Deserialize)]
pub struct CreateRegistration {
    pub volunteer_id: DbId,
    pub notes: Option<String>,
}

/// DTO for updating a registration's status.
#[derive(Debug, Deserialize)]
pub struct UpdateRegistration {
    pub status: String,
    pub notes: Option<String>,
}
