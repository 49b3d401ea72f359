pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod events;
pub mod hours_logs;
pub mod registrations;
pub mod reports;
pub mod volunteers;
