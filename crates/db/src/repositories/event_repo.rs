//! Repository for the `events` table.

use sqlx::PgPool;
use tfa_core::types::DbId;

use crate::models::event::{
    CreateEvent, Event, EventListParams, EventWithRegistrationCount, UpdateEvent,
};
use crate::repositories::{bind_values, BindValue};

/// Column list for events queries.
const COLUMNS: &str = "\
    id, name, description, start_date, end_date, start_time, end_time, \
    location, address, city, state, zip_code, event_type, status, capacity, \
    organizer_name, organizer_email, organizer_phone, requirements, \
    min_volunteers, max_volunteers, created_by, created_at";

/// Same list with an `e.` alias prefix, for joined queries.
const E_COLUMNS: &str = "\
    e.id, e.name, e.description, e.start_date, e.end_date, e.start_time, \
    e.end_time, e.location, e.address, e.city, e.state, e.zip_code, \
    e.event_type, e.status, e.capacity, e.organizer_name, e.organizer_email, \
    e.organizer_phone, e.requirements, e.min_volunteers, e.max_volunteers, \
    e.created_by, e.created_at";

/// Provides CRUD and filtered listing for events.
pub struct EventRepo;

impl EventRepo {
    /// List events matching the given filters, with live registration
    /// counts, ordered by start date ascending.
    pub async fn list(
        pool: &PgPool,
        params: &EventListParams,
    ) -> Result<Vec<EventWithRegistrationCount>, sqlx::Error> {
        let (where_clause, binds, _) = build_event_filter(params);

        let query = format!(
            "SELECT {E_COLUMNS}, \
                    (SELECT COUNT(*) FROM event_registrations er \
                      WHERE er.event_id = e.id) AS registration_count \
             FROM events e \
             {where_clause} \
             ORDER BY e.start_date ASC, e.id ASC"
        );

        bind_values(sqlx::query_as::<_, EventWithRegistrationCount>(&query), &binds)
            .fetch_all(pool)
            .await
    }

    /// Find an event by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (\
                name, description, start_date, end_date, start_time, end_time, \
                location, address, city, state, zip_code, event_type, status, \
                capacity, organizer_name, organizer_email, organizer_phone, \
                requirements, min_volunteers, max_volunteers, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, \
                     COALESCE($13, 'scheduled'), $14, $15, $16, $17, $18, \
                     $19, $20, $21) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(input.name.trim())
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.location)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.zip_code)
            .bind(&input.event_type)
            .bind(&input.status)
            .bind(input.capacity)
            .bind(&input.organizer_name)
            .bind(&input.organizer_email)
            .bind(&input.organizer_phone)
            .bind(&input.requirements)
            .bind(input.min_volunteers)
            .bind(input.max_volunteers)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Partially update an event by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description), \
                start_date = COALESCE($4, start_date), \
                end_date = COALESCE($5, end_date), \
                start_time = COALESCE($6, start_time), \
                end_time = COALESCE($7, end_time), \
                location = COALESCE($8, location), \
                address = COALESCE($9, address), \
                city = COALESCE($10, city), \
                state = COALESCE($11, state), \
                zip_code = COALESCE($12, zip_code), \
                event_type = COALESCE($13, event_type), \
                status = COALESCE($14, status), \
                capacity = COALESCE($15, capacity), \
                organizer_name = COALESCE($16, organizer_name), \
                organizer_email = COALESCE($17, organizer_email), \
                organizer_phone = COALESCE($18, organizer_phone), \
                requirements = COALESCE($19, requirements), \
                min_volunteers = COALESCE($20, min_volunteers), \
                max_volunteers = COALESCE($21, max_volunteers) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.location)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.zip_code)
            .bind(&input.event_type)
            .bind(&input.status)
            .bind(input.capacity)
            .bind(&input.organizer_name)
            .bind(&input.organizer_email)
            .bind(&input.organizer_phone)
            .bind(&input.requirements)
            .bind(input.min_volunteers)
            .bind(input.max_volunteers)
            .fetch_optional(pool)
            .await
    }

    /// Delete an event by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Assemble the WHERE clause and bind list for an event listing.
fn build_event_filter(params: &EventListParams) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut binds: Vec<BindValue> = Vec::new();

    if let Some(ref status) = params.status {
        conditions.push(format!("e.status = ${bind_idx}"));
        bind_idx += 1;
        binds.push(BindValue::Text(status.clone()));
    }

    if let Some(ref event_type) = params.event_type {
        conditions.push(format!("e.event_type = ${bind_idx}"));
        bind_idx += 1;
        binds.push(BindValue::Text(event_type.clone()));
    }

    if params.upcoming {
        conditions.push("e.start_date >= CURRENT_DATE".to_string());
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, binds, bind_idx)
}
