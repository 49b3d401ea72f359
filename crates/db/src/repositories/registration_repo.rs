//! Repository for the `event_registrations` table.

use sqlx::PgPool;
use tfa_core::types::DbId;

use crate::models::registration::{Registration, RegistrationWithVolunteer, UpdateRegistration};

/// Column list for event_registrations queries.
const COLUMNS: &str = "\
    id, event_id, volunteer_id, status, notes, registered_at, confirmed_at";

/// Provides registration operations for events and volunteers.
pub struct RegistrationRepo;

impl RegistrationRepo {
    /// List an event's registrations joined with volunteer identity,
    /// newest first.
    pub async fn list_for_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<RegistrationWithVolunteer>, sqlx::Error> {
        sqlx::query_as::<_, RegistrationWithVolunteer>(
            "SELECT er.id, er.event_id, er.volunteer_id, er.status, er.notes, \
                    er.registered_at, er.confirmed_at, \
                    v.name AS volunteer_name, v.email AS volunteer_email, \
                    v.phone AS volunteer_phone \
             FROM event_registrations er \
             JOIN volunteers v ON v.id = er.volunteer_id \
             WHERE er.event_id = $1 \
             ORDER BY er.registered_at DESC, er.id DESC",
        )
        .bind(event_id)
        .fetch_all(pool)
        .await
    }

    /// Count registrations for an event. Backs the capacity check.
    pub async fn count_for_event(pool: &PgPool, event_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM event_registrations WHERE event_id = $1",
        )
        .bind(event_id)
        .fetch_one(pool)
        .await
    }

    /// Register a volunteer for an event, returning the created row.
    ///
    /// The unique constraint on (event_id, volunteer_id) rejects duplicate
    /// registrations at the database level.
    pub async fn create(
        pool: &PgPool,
        event_id: DbId,
        volunteer_id: DbId,
        notes: Option<&str>,
    ) -> Result<Registration, sqlx::Error> {
        let query = format!(
            "INSERT INTO event_registrations (event_id, volunteer_id, status, notes) \
             VALUES ($1, $2, 'registered', $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(event_id)
            .bind(volunteer_id)
            .bind(notes)
            .fetch_one(pool)
            .await
    }

    /// Update a registration's status, returning the updated row.
    ///
    /// Moving to `confirmed` stamps `confirmed_at` once; later status
    /// changes leave the stamp in place.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRegistration,
    ) -> Result<Option<Registration>, sqlx::Error> {
        let query = format!(
            "UPDATE event_registrations SET \
                status = $2, \
                notes = COALESCE($3, notes), \
                confirmed_at = CASE \
                    WHEN $2 = 'confirmed' AND confirmed_at IS NULL THEN now() \
                    ELSE confirmed_at END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Registration>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Cancel (delete) a registration by ID. Returns `true` if a row was
    /// deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM event_registrations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
