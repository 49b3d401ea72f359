//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. List endpoints with optional
//! filters build their WHERE clauses from a conditions vector plus a typed
//! [`BindValue`] list, so caller-supplied values only ever reach the query
//! as bind parameters.

pub mod category_repo;
pub mod dashboard_repo;
pub mod event_repo;
pub mod hours_log_repo;
pub mod registration_repo;
pub mod report_repo;
pub mod user_repo;
pub mod volunteer_note_repo;
pub mod volunteer_repo;

pub use category_repo::CategoryRepo;
pub use dashboard_repo::DashboardRepo;
pub use event_repo::EventRepo;
pub use hours_log_repo::HoursLogRepo;
pub use registration_repo::RegistrationRepo;
pub use report_repo::ReportRepo;
pub use user_repo::UserRepo;
pub use volunteer_note_repo::VolunteerNoteRepo;
pub use volunteer_repo::VolunteerRepo;

use chrono::NaiveDate;

/// A value destined for a `$n` placeholder in a dynamically assembled query.
#[derive(Debug, Clone)]
pub(crate) enum BindValue {
    BigInt(i64),
    Text(String),
    Date(NaiveDate),
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs` in placeholder order.
pub(crate) fn bind_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Date(v) => q = q.bind(*v),
        }
    }
    q
}
