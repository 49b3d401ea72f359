//! Hours log constants and validation.
//!
//! An hours log records time a volunteer contributed, optionally tied to an
//! event, and moves through a pending -> approved/rejected workflow. The
//! reporting engine consumes only the resulting state; the approval
//! transition itself happens in the hours-log update path.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Largest number of hours a single log entry may carry.
pub const MAX_HOURS_PER_ENTRY: f64 = 24.0;

/// Hours log workflow states.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

/// All valid hours log statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_PENDING, STATUS_APPROVED, STATUS_REJECTED];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate an hours value: strictly positive, at most 24 per entry.
pub fn validate_hours(hours: f64) -> Result<(), String> {
    if !hours.is_finite() || hours <= 0.0 || hours > MAX_HOURS_PER_ENTRY {
        return Err(format!(
            "Hours must be greater than 0 and at most {MAX_HOURS_PER_ENTRY}"
        ));
    }
    Ok(())
}

/// Validate that the status is one of the allowed workflow states.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid hours log status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hours_within_range() {
        assert!(validate_hours(0.25).is_ok());
        assert!(validate_hours(24.0).is_ok());
    }

    #[test]
    fn rejects_hours_out_of_range() {
        assert!(validate_hours(0.0).is_err());
        assert!(validate_hours(-1.5).is_err());
        assert!(validate_hours(24.01).is_err());
        assert!(validate_hours(f64::NAN).is_err());
    }

    #[test]
    fn validates_status_vocabulary() {
        assert!(validate_status("approved").is_ok());
        assert!(validate_status("pending").is_ok());
        assert!(validate_status("Approved").is_err());
        assert!(validate_status("done").is_err());
    }
}
