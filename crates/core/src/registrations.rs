//! Event registration constants and validation.

/// Registration workflow states.
pub const STATUS_REGISTERED: &str = "registered";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_ATTENDED: &str = "attended";
pub const STATUS_NO_SHOW: &str = "no_show";
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid registration statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_REGISTERED,
    STATUS_CONFIRMED,
    STATUS_ATTENDED,
    STATUS_NO_SHOW,
    STATUS_CANCELLED,
];

/// Validate that the status is one of the allowed values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid registration status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}
