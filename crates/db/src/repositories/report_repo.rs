//! Read-only repository behind the hours reporting engine.
//!
//! Translates a [`ReportFilter`] into one parameterized query over
//! `hours_logs` joined with volunteer identity (always) and event identity
//! (when linked). Both report views are computed from this row set: detail
//! returns it as-is, summary is aggregated in `tfa_core::reports`.

use sqlx::PgPool;
use tfa_core::reports::like_pattern;

use crate::models::report::{HoursReportRow, ReportFilter};
use crate::repositories::{bind_values, BindValue};

/// Provides the filtered, joined hours-entry view for reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Fetch all hours entries matching the filter.
    ///
    /// Rows are ordered by date descending, then case-insensitive volunteer
    /// name ascending, then id ascending as a deterministic tiebreak.
    pub async fn query_hours_entries(
        pool: &PgPool,
        filter: &ReportFilter,
    ) -> Result<Vec<HoursReportRow>, sqlx::Error> {
        let (where_clause, binds, _) = build_report_filter(filter);

        let query = format!(
            "SELECT h.id, h.date, h.hours, h.notes, h.status, \
                    v.id AS volunteer_id, v.name AS volunteer_name, v.email AS volunteer_email, \
                    e.id AS event_id, e.name AS event_name \
             FROM hours_logs h \
             JOIN volunteers v ON v.id = h.volunteer_id \
             LEFT JOIN events e ON e.id = h.event_id \
             {where_clause} \
             ORDER BY h.date DESC, lower(v.name) ASC, h.id ASC"
        );

        bind_values(sqlx::query_as::<_, HoursReportRow>(&query), &binds)
            .fetch_all(pool)
            .await
    }
}

/// Assemble the WHERE clause and bind list for a report filter.
///
/// The status predicate is always present; every other condition is appended
/// only when its filter field was supplied, so an absent filter constrains
/// nothing.
fn build_report_filter(filter: &ReportFilter) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut binds: Vec<BindValue> = Vec::new();

    conditions.push(format!("h.status = ${bind_idx}"));
    bind_idx += 1;
    binds.push(BindValue::Text(filter.status.clone()));

    if let Some(start) = filter.start {
        conditions.push(format!("h.date >= ${bind_idx}"));
        bind_idx += 1;
        binds.push(BindValue::Date(start));
    }

    if let Some(end) = filter.end {
        conditions.push(format!("h.date <= ${bind_idx}"));
        bind_idx += 1;
        binds.push(BindValue::Date(end));
    }

    if let Some(ref vq) = filter.vq {
        conditions.push(format!(
            "(lower(v.name) LIKE ${bind_idx} OR lower(v.email) LIKE ${})",
            bind_idx + 1
        ));
        bind_idx += 2;
        let pattern = like_pattern(vq);
        binds.push(BindValue::Text(pattern.clone()));
        binds.push(BindValue::Text(pattern));
    }

    if let Some(ref eq) = filter.eq {
        // A LEFT-JOINed event may be absent; unassigned hours never match
        // an event-name filter.
        conditions.push(format!(
            "(e.name IS NOT NULL AND lower(e.name) LIKE ${bind_idx})"
        ));
        bind_idx += 1;
        binds.push(BindValue::Text(like_pattern(eq)));
    }

    (
        format!("WHERE {}", conditions.join(" AND ")),
        binds,
        bind_idx,
    )
}
