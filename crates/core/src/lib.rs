//! Domain rules for the volunteer CRM.
//!
//! Storage-free: validation functions, status vocabularies, and the hours
//! reporting engine. Everything here is callable from both the repository
//! layer and the HTTP handlers without touching a database.

pub mod error;
pub mod events;
pub mod hours;
pub mod registrations;
pub mod reports;
pub mod types;
pub mod volunteers;
