//! Repository for the `volunteers` table.

use sqlx::PgPool;
use tfa_core::reports::like_pattern;
use tfa_core::types::DbId;

use crate::models::volunteer::{
    CreateVolunteer, UpdateVolunteer, Volunteer, VolunteerListParams, VolunteerWithStats,
};
use crate::repositories::{bind_values, BindValue};

/// Column list for volunteers queries.
const COLUMNS: &str = "\
    id, user_id, name, email, phone, alternate_phone, address, city, state, \
    zip_code, emergency_contact_name, emergency_contact_phone, \
    emergency_contact_relationship, status, availability, skills, interests, \
    email_notifications, sms_notifications, notes, created_at, updated_at";

/// Same list with a `v.` alias prefix, for joined queries.
const V_COLUMNS: &str = "\
    v.id, v.user_id, v.name, v.email, v.phone, v.alternate_phone, v.address, \
    v.city, v.state, v.zip_code, v.emergency_contact_name, \
    v.emergency_contact_phone, v.emergency_contact_relationship, v.status, \
    v.availability, v.skills, v.interests, v.email_notifications, \
    v.sms_notifications, v.notes, v.created_at, v.updated_at";

/// Approved-hours aggregates attached to listing and detail rows.
const STATS_COLUMNS: &str = "\
    (SELECT COUNT(*) FROM hours_logs h \
      WHERE h.volunteer_id = v.id AND h.status = 'approved') AS total_logs, \
    (SELECT COALESCE(SUM(h.hours), 0) FROM hours_logs h \
      WHERE h.volunteer_id = v.id AND h.status = 'approved') AS total_hours";

/// Provides CRUD and filtered listing for volunteers.
pub struct VolunteerRepo;

impl VolunteerRepo {
    /// List volunteers matching the given filters, with approved-hours
    /// aggregates, ordered by case-insensitive name.
    pub async fn list(
        pool: &PgPool,
        params: &VolunteerListParams,
    ) -> Result<Vec<VolunteerWithStats>, sqlx::Error> {
        let (where_clause, binds, _) = build_volunteer_filter(params);

        let query = format!(
            "SELECT {V_COLUMNS}, {STATS_COLUMNS} \
             FROM volunteers v \
             {where_clause} \
             ORDER BY lower(v.name) ASC"
        );

        bind_values(sqlx::query_as::<_, VolunteerWithStats>(&query), &binds)
            .fetch_all(pool)
            .await
    }

    /// Find a volunteer by ID, with approved-hours aggregates.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<VolunteerWithStats>, sqlx::Error> {
        let query = format!(
            "SELECT {V_COLUMNS}, {STATS_COLUMNS} FROM volunteers v WHERE v.id = $1"
        );
        sqlx::query_as::<_, VolunteerWithStats>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new volunteer, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateVolunteer,
    ) -> Result<Volunteer, sqlx::Error> {
        let query = format!(
            "INSERT INTO volunteers (\
                name, email, phone, alternate_phone, address, city, state, \
                zip_code, emergency_contact_name, emergency_contact_phone, \
                emergency_contact_relationship, status, availability, skills, \
                interests, email_notifications, sms_notifications, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, \
                     COALESCE($12, 'active'), $13, $14, $15, \
                     COALESCE($16, TRUE), COALESCE($17, FALSE), $18) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(input.name.trim())
            .bind(tfa_core::volunteers::normalize_email(&input.email))
            .bind(&input.phone)
            .bind(&input.alternate_phone)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.zip_code)
            .bind(&input.emergency_contact_name)
            .bind(&input.emergency_contact_phone)
            .bind(&input.emergency_contact_relationship)
            .bind(&input.status)
            .bind(&input.availability)
            .bind(&input.skills)
            .bind(&input.interests)
            .bind(input.email_notifications)
            .bind(input.sms_notifications)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Create the volunteer profile backing a newly registered user account.
    ///
    /// Generic over the executor so registration can run it inside the same
    /// transaction that creates the user row.
    pub async fn create_for_user<'e, E>(
        executor: E,
        user_id: DbId,
        name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> Result<Volunteer, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO volunteers (user_id, name, email, phone, status) \
             VALUES ($1, $2, $3, $4, 'active') \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(user_id)
            .bind(name)
            .bind(email)
            .bind(phone)
            .fetch_one(executor)
            .await
    }

    /// Partially update a volunteer by ID, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVolunteer,
    ) -> Result<Option<Volunteer>, sqlx::Error> {
        let query = format!(
            "UPDATE volunteers SET \
                name = COALESCE($2, name), \
                email = COALESCE($3, email), \
                phone = COALESCE($4, phone), \
                alternate_phone = COALESCE($5, alternate_phone), \
                address = COALESCE($6, address), \
                city = COALESCE($7, city), \
                state = COALESCE($8, state), \
                zip_code = COALESCE($9, zip_code), \
                emergency_contact_name = COALESCE($10, emergency_contact_name), \
                emergency_contact_phone = COALESCE($11, emergency_contact_phone), \
                emergency_contact_relationship = COALESCE($12, emergency_contact_relationship), \
                status = COALESCE($13, status), \
                availability = COALESCE($14, availability), \
                skills = COALESCE($15, skills), \
                interests = COALESCE($16, interests), \
                email_notifications = COALESCE($17, email_notifications), \
                sms_notifications = COALESCE($18, sms_notifications), \
                notes = COALESCE($19, notes), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Volunteer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.email.as_deref().map(tfa_core::volunteers::normalize_email))
            .bind(&input.phone)
            .bind(&input.alternate_phone)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.zip_code)
            .bind(&input.emergency_contact_name)
            .bind(&input.emergency_contact_phone)
            .bind(&input.emergency_contact_relationship)
            .bind(&input.status)
            .bind(&input.availability)
            .bind(&input.skills)
            .bind(&input.interests)
            .bind(input.email_notifications)
            .bind(input.sms_notifications)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a volunteer by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM volunteers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Assemble the WHERE clause and bind list for a volunteer listing.
fn build_volunteer_filter(params: &VolunteerListParams) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut binds: Vec<BindValue> = Vec::new();

    if let Some(ref q) = params.q {
        conditions.push(format!(
            "(lower(v.name) LIKE ${bind_idx} OR lower(v.email) LIKE ${} OR v.phone LIKE ${})",
            bind_idx + 1,
            bind_idx + 2
        ));
        bind_idx += 3;
        let pattern = like_pattern(q);
        binds.push(BindValue::Text(pattern.clone()));
        binds.push(BindValue::Text(pattern.clone()));
        binds.push(BindValue::Text(pattern));
    }

    if let Some(ref status) = params.status {
        conditions.push(format!("v.status = ${bind_idx}"));
        bind_idx += 1;
        binds.push(BindValue::Text(status.clone()));
    }

    if let Some(ref skills) = params.skills {
        conditions.push(format!("lower(v.skills) LIKE ${bind_idx}"));
        bind_idx += 1;
        binds.push(BindValue::Text(like_pattern(skills)));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, binds, bind_idx)
}
