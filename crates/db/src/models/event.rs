//! Event model.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tfa_core::types::{DbId, Timestamp};

/// A row from the `events` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub event_type: Option<String>,
    pub status: String,
    pub capacity: Option<i32>,
    pub organizer_name: Option<String>,
    pub organizer_email: Option<String>,
    pub organizer_phone: Option<String>,
    pub requirements: Option<String>,
    pub min_volunteers: Option<i32>,
    pub max_volunteers: Option<i32>,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// An event row with its live registration count, as returned by listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EventWithRegistrationCount {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub event: Event,
    pub registration_count: i64,
}

/// Query parameters for `GET /events`.
#[derive(Debug, Default, Deserialize)]
pub struct EventListParams {
    pub status: Option<String>,
    /// Filter on the free-form `event_type` column.
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    /// When true, only events starting today or later.
    #[serde(default)]
    pub upcoming: bool,
}

/// DTO for creating an event.
#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub event_type: Option<String>,
    pub status: Option<String>,
    pub capacity: Option<i32>,
    pub organizer_name: Option<String>,
    pub organizer_email: Option<String>,
    pub organizer_phone: Option<String>,
    pub requirements: Option<String>,
    pub min_volunteers: Option<i32>,
    pub max_volunteers: Option<i32>,
    pub created_by: Option<DbId>,
}

/// DTO for a partial event update.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEvent {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub event_type: Option<String>,
    pub status: Option<String>,
    pub capacity: Option<i32>,
    pub organizer_name: Option<String>,
    pub organizer_email: Option<String>,
    pub organizer_phone: Option<String>,
    pub requirements: Option<String>,
    pub min_volunteers: Option<i32>,
    pub max_volunteers: Option<i32>,
}
