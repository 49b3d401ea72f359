//! Row models and DTOs.
//!
//! Each module pairs a `FromRow` struct for SELECT results with the
//! `Create*` / `Update*` DTOs its handlers deserialize from request bodies.

pub mod category;
pub mod dashboard;
pub mod event;
pub mod hours_log;
pub mod registration;
pub mod report;
pub mod user;
pub mod volunteer;
pub mod volunteer_note;
