//! Repository for the `hours_logs` table.

use sqlx::PgPool;
use tfa_core::types::DbId;

use crate::models::hours_log::{
    CreateHoursLog, HoursLog, HoursLogListParams, HoursLogWithContext, UpdateHoursLog,
};
use crate::repositories::{bind_values, BindValue};

/// Column list for hours_logs queries.
const COLUMNS: &str = "\
    id, volunteer_id, event_id, date, hours, status, notes, approved_by, \
    approved_at, created_at";

/// Same list with an `h.` alias prefix, for joined queries.
const H_COLUMNS: &str = "\
    h.id, h.volunteer_id, h.event_id, h.date, h.hours, h.status, h.notes, \
    h.approved_by, h.approved_at, h.created_at";

/// Provides CRUD and filtered listing for hours logs.
pub struct HoursLogRepo;

impl HoursLogRepo {
    /// List hours logs matching the given filters, joined with volunteer,
    /// event, and approver identity, newest date first.
    pub async fn list(
        pool: &PgPool,
        params: &HoursLogListParams,
    ) -> Result<Vec<HoursLogWithContext>, sqlx::Error> {
        let (where_clause, binds, _) = build_hours_log_filter(params);

        let query = format!(
            "SELECT {H_COLUMNS}, \
                    v.name AS volunteer_name, v.email AS volunteer_email, \
                    e.name AS event_name, u.email AS approved_by_email \
             FROM hours_logs h \
             JOIN volunteers v ON v.id = h.volunteer_id \
             LEFT JOIN events e ON e.id = h.event_id \
             LEFT JOIN users u ON u.id = h.approved_by \
             {where_clause} \
             ORDER BY h.date DESC, h.created_at DESC"
        );

        bind_values(sqlx::query_as::<_, HoursLogWithContext>(&query), &binds)
            .fetch_all(pool)
            .await
    }

    /// Find an hours log by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<HoursLog>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hours_logs WHERE id = $1");
        sqlx::query_as::<_, HoursLog>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new hours log, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateHoursLog) -> Result<HoursLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO hours_logs (volunteer_id, event_id, date, hours, notes, status) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'pending')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HoursLog>(&query)
            .bind(input.volunteer_id)
            .bind(input.event_id)
            .bind(input.date)
            .bind(input.hours)
            .bind(&input.notes)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Partially update an hours log by ID, returning the updated row.
    ///
    /// When the status moves to `approved` and an approver is supplied, the
    /// approval fields are stamped; any other update leaves them untouched.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateHoursLog,
    ) -> Result<Option<HoursLog>, sqlx::Error> {
        let query = format!(
            "UPDATE hours_logs SET \
                event_id = COALESCE($2, event_id), \
                date = COALESCE($3, date), \
                hours = COALESCE($4, hours), \
                notes = COALESCE($5, notes), \
                status = COALESCE($6, status), \
                approved_by = CASE \
                    WHEN $6 = 'approved' AND $7 IS NOT NULL THEN $7 \
                    ELSE approved_by END, \
                approved_at = CASE \
                    WHEN $6 = 'approved' AND $7 IS NOT NULL THEN now() \
                    ELSE approved_at END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HoursLog>(&query)
            .bind(id)
            .bind(input.event_id)
            .bind(input.date)
            .bind(input.hours)
            .bind(&input.notes)
            .bind(&input.status)
            .bind(input.approved_by)
            .fetch_optional(pool)
            .await
    }

    /// Delete an hours log by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hours_logs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Assemble the WHERE clause and bind list for an hours log listing.
fn build_hours_log_filter(params: &HoursLogListParams) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut binds: Vec<BindValue> = Vec::new();

    if let Some(volunteer_id) = params.volunteer_id {
        conditions.push(format!("h.volunteer_id = ${bind_idx}"));
        bind_idx += 1;
        binds.push(BindValue::BigInt(volunteer_id));
    }

    if let Some(event_id) = params.event_id {
        conditions.push(format!("h.event_id = ${bind_idx}"));
        bind_idx += 1;
        binds.push(BindValue::BigInt(event_id));
    }

    if let Some(ref status) = params.status {
        conditions.push(format!("h.status = ${bind_idx}"));
        bind_idx += 1;
        binds.push(BindValue::Text(status.clone()));
    }

    if let Some(start) = params.start_date {
        conditions.push(format!("h.date >= ${bind_idx}"));
        bind_idx += 1;
        binds.push(BindValue::Date(start));
    }

    if let Some(end) = params.end_date {
        conditions.push(format!("h.date <= ${bind_idx}"));
        bind_idx += 1;
        binds.push(BindValue::Date(end));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, binds, bind_idx)
}
