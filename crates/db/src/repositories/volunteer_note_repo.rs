//! Repository for the `volunteer_notes` table.

use sqlx::PgPool;
use tfa_core::types::DbId;

use crate::models::volunteer_note::{CreateVolunteerNote, VolunteerNote};

/// Joined column list: note columns plus the author's email.
const JOINED_COLUMNS: &str = "\
    vn.id, vn.volunteer_id, vn.created_by, vn.note_type, vn.note, \
    vn.is_private, vn.created_at, u.email AS created_by_email";

/// Provides note operations scoped to a volunteer.
pub struct VolunteerNoteRepo;

impl VolunteerNoteRepo {
    /// List a volunteer's notes, newest first. Private notes are included
    /// only when requested.
    pub async fn list_for_volunteer(
        pool: &PgPool,
        volunteer_id: DbId,
        include_private: bool,
    ) -> Result<Vec<VolunteerNote>, sqlx::Error> {
        let privacy_clause = if include_private {
            ""
        } else {
            "AND vn.is_private = FALSE"
        };
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM volunteer_notes vn \
             LEFT JOIN users u ON u.id = vn.created_by \
             WHERE vn.volunteer_id = $1 {privacy_clause} \
             ORDER BY vn.created_at DESC"
        );
        sqlx::query_as::<_, VolunteerNote>(&query)
            .bind(volunteer_id)
            .fetch_all(pool)
            .await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<VolunteerNote>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} \
             FROM volunteer_notes vn \
             LEFT JOIN users u ON u.id = vn.created_by \
             WHERE vn.id = $1"
        );
        sqlx::query_as::<_, VolunteerNote>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Attach a note to a volunteer, returning the created row.
    pub async fn create(
        pool: &PgPool,
        volunteer_id: DbId,
        input: &CreateVolunteerNote,
    ) -> Result<VolunteerNote, sqlx::Error> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO volunteer_notes (volunteer_id, created_by, note_type, note, is_private) \
             VALUES ($1, $2, COALESCE($3, 'general'), $4, COALESCE($5, FALSE)) \
             RETURNING id",
        )
        .bind(volunteer_id)
        .bind(input.created_by)
        .bind(&input.note_type)
        .bind(&input.note)
        .bind(input.is_private)
        .fetch_one(pool)
        .await?;

        // Re-read through the join so the response carries the author email.
        let note = Self::find_by_id(pool, id).await?;
        note.ok_or(sqlx::Error::RowNotFound)
    }
}
