use crate::utils::error::{CourierError, Result};
use regex::Regex;
use std::sync::OnceLock;

// Tracking IDs look like PKG12345: the literal prefix and exactly five digits.
static TRACKING_ID_PATTERN: OnceLock<Regex> = OnceLock::new();
// Destinations are a street number, whitespace, then a street name.
static DESTINATION_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tracking_id_pattern() -> &'static Regex {
    TRACKING_ID_PATTERN.get_or_init(|| Regex::new(r"^PKG\d{5}$").unwrap())
}

fn destination_pattern() -> &'static Regex {
    DESTINATION_PATTERN.get_or_init(|| Regex::new(r"^\d+\s+.+$").unwrap())
}

pub fn validate_tracking_id(value: &str) -> Result<()> {
    if tracking_id_pattern().is_match(value) {
        Ok(())
    } else {
        Err(CourierError::InvalidTrackingId {
            value: value.to_string(),
        })
    }
}

pub fn validate_destination(value: &str) -> Result<()> {
    if destination_pattern().is_match(value) {
        Ok(())
    } else {
        Err(CourierError::InvalidDestination {
            value: value.to_string(),
        })
    }
}

pub fn validate_weight(value: f64) -> Result<()> {
    // NaN fails the comparison; infinities need the explicit finiteness check.
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CourierError::InvalidWeight { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tracking_id() {
        assert!(validate_tracking_id("PKG12345").is_ok());
        assert!(validate_tracking_id("PKG00001").is_ok());
        assert!(validate_tracking_id("PKG123").is_err());
        assert!(validate_tracking_id("pkg12345").is_err());
        assert!(validate_tracking_id("PKG123456").is_err());
        assert!(validate_tracking_id("XPKG12345").is_err());
        assert!(validate_tracking_id("").is_err());
    }

    #[test]
    fn test_validate_destination() {
        assert!(validate_destination("42 Main Street").is_ok());
        assert!(validate_destination("5 Oak Ave").is_ok());
        assert!(validate_destination("MainStreet").is_err());
        assert!(validate_destination("42").is_err());
        assert!(validate_destination("").is_err());
    }

    #[test]
    fn test_validate_weight() {
        assert!(validate_weight(5.0).is_ok());
        assert!(validate_weight(0.0001).is_ok());
        assert!(validate_weight(0.0).is_err());
        assert!(validate_weight(-1.5).is_err());
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }
}
