//! Volunteer constants and validation.

/// Volunteer lifecycle states.
pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";
pub const STATUS_ON_HOLD: &str = "on_hold";

/// All valid volunteer statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_INACTIVE, STATUS_ON_HOLD];

/// Validate the required identity fields for a new volunteer.
pub fn validate_identity(name: &str, email: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name is required".to_string());
    }
    if email.trim().is_empty() {
        return Err("Email is required".to_string());
    }
    if !email.contains('@') {
        return Err(format!("'{email}' is not a valid email address"));
    }
    Ok(())
}

/// Validate that the status is one of the allowed values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid volunteer status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

/// Canonical form for stored email addresses: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
