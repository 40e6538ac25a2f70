//! Field-level validation for installations, production reports and
//! query parameters.
//!
//! Every check runs before any write and names the offending field in its
//! `CoreError::Validation` message.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Latitude bounds in degrees.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Longitude bounds in degrees.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Maximum length of an installation address, in characters.
pub const MAX_ADDRESS_LEN: usize = 1024;

/// Maximum length of an owner name, in characters.
pub const MAX_OWNER_NAME_LEN: usize = 512;

/// Maximum length of the free-form comments field, in characters.
pub const MAX_COMMENTS_LEN: usize = 1024;

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

fn validate_degrees(value: f64, (min, max): (f64, f64), name: &str) -> Result<(), CoreError> {
    if !(min..=max).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}

/// Validate that a latitude lies within `[-90, 90]`.
pub fn validate_latitude(latitude: f64) -> Result<(), CoreError> {
    validate_degrees(latitude, LATITUDE_RANGE, "latitude")
}

/// Validate that a longitude lies within `[-180, 180]`.
pub fn validate_longitude(longitude: f64) -> Result<(), CoreError> {
    validate_degrees(longitude, LONGITUDE_RANGE, "longitude")
}

// ---------------------------------------------------------------------------
// Text fields
// ---------------------------------------------------------------------------

fn validate_max_chars(value: &str, max: usize, name: &str) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{name} is too long: {len} characters (maximum {max})"
        )));
    }
    Ok(())
}

/// Validate a required text field: it must be present and at most `max`
/// characters long. Empty strings count as present.
pub fn validate_required_text(
    value: Option<&str>,
    max: usize,
    name: &str,
) -> Result<(), CoreError> {
    match value {
        None => Err(CoreError::Validation(format!("{name} is required"))),
        Some(text) => validate_max_chars(text, max, name),
    }
}

/// Validate an optional text field; `None` always passes.
pub fn validate_optional_text(
    value: Option<&str>,
    max: usize,
    name: &str,
) -> Result<(), CoreError> {
    value.map_or(Ok(()), |text| validate_max_chars(text, max, name))
}

/// Validate every field of an installation registration, in the order
/// latitude, longitude, address, owner name, comments. The first failure
/// is returned.
pub fn validate_installation(
    longitude: f64,
    latitude: f64,
    address: Option<&str>,
    owner_name: Option<&str>,
    comments: Option<&str>,
) -> Result<(), CoreError> {
    validate_latitude(latitude)?;
    validate_longitude(longitude)?;
    validate_required_text(address, MAX_ADDRESS_LEN, "address")?;
    validate_required_text(owner_name, MAX_OWNER_NAME_LEN, "owner_name")?;
    validate_optional_text(comments, MAX_COMMENTS_LEN, "comments")
}

// ---------------------------------------------------------------------------
// Wattages
// ---------------------------------------------------------------------------

/// Validate that a wattage reading is a finite, non-negative number.
pub fn validate_wattage(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "{name} must be a finite number"
        )));
    }
    if value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{name} cannot be negative, got {value}"
        )));
    }
    Ok(())
}

/// Validate the four readings of a production report.
pub fn validate_report_wattages(
    produced: f64,
    household: f64,
    battery: f64,
    grid: f64,
) -> Result<(), CoreError> {
    validate_wattage(produced, "produced_wattage")?;
    validate_wattage(household, "household_wattage")?;
    validate_wattage(battery, "battery_wattage")?;
    validate_wattage(grid, "grid_wattage")
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Validate that a duration in minutes is not negative.
pub fn validate_duration(minutes: i64) -> Result<(), CoreError> {
    if minutes < 0 {
        return Err(CoreError::Validation(format!(
            "duration must be >= 0, got {minutes}"
        )));
    }
    Ok(())
}

/// Validate that a 1-indexed page number is at least 1.
pub fn validate_page(page: i64) -> Result<(), CoreError> {
    if page < 1 {
        return Err(CoreError::Validation(format!(
            "page must be >= 1, got {page}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn message(result: Result<(), CoreError>) -> String {
        match result {
            Err(CoreError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // -- coordinates ---------------------------------------------------------

    #[test]
    fn accepts_coordinate_boundaries() {
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.0).is_ok());
    }

    #[test]
    fn rejects_latitude_out_of_range() {
        for lat in [-90.0001, 90.0001, -180.0, 1000.0] {
            assert!(message(validate_latitude(lat)).starts_with("latitude"));
        }
    }

    #[test]
    fn rejects_longitude_out_of_range() {
        for lon in [-180.5, 180.5, 360.0] {
            assert!(message(validate_longitude(lon)).starts_with("longitude"));
        }
    }

    #[test]
    fn rejects_nan_coordinates() {
        assert!(validate_latitude(f64::NAN).is_err());
        assert!(validate_longitude(f64::NAN).is_err());
    }

    // -- text ----------------------------------------------------------------

    #[test]
    fn address_length_boundary() {
        let ok = "a".repeat(MAX_ADDRESS_LEN);
        let too_long = "a".repeat(MAX_ADDRESS_LEN + 1);
        assert!(validate_required_text(Some(ok.as_str()), MAX_ADDRESS_LEN, "address").is_ok());
        assert!(message(validate_required_text(
            Some(too_long.as_str()),
            MAX_ADDRESS_LEN,
            "address"
        ))
        .contains("address is too long"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let umlauts = "ü".repeat(MAX_OWNER_NAME_LEN);
        assert!(validate_required_text(Some(umlauts.as_str()), MAX_OWNER_NAME_LEN, "owner_name").is_ok());
    }

    #[test]
    fn missing_required_text_is_rejected() {
        assert_eq!(
            message(validate_required_text(None, MAX_OWNER_NAME_LEN, "owner_name")),
            "owner_name is required"
        );
    }

    #[test]
    fn optional_text_accepts_none() {
        assert!(validate_optional_text(None, MAX_COMMENTS_LEN, "comments").is_ok());
    }

    #[test]
    fn installation_reports_first_failing_field() {
        let msg = message(validate_installation(200.0, 95.0, None, None, None));
        assert!(msg.starts_with("latitude"), "got: {msg}");

        let msg = message(validate_installation(200.0, 45.0, None, None, None));
        assert!(msg.starts_with("longitude"), "got: {msg}");

        let msg = message(validate_installation(10.0, 45.0, Some("Main St 1"), None, None));
        assert_eq!(msg, "owner_name is required");
    }

    #[test]
    fn installation_accepts_valid_input() {
        assert!(validate_installation(
            14.28,
            48.30,
            Some("Hauptplatz 1, Linz"),
            Some("Jane Doe"),
            None
        )
        .is_ok());
    }

    // -- wattages ------------------------------------------------------------

    #[test]
    fn zero_wattage_is_valid() {
        assert!(validate_report_wattages(0.0, 0.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn each_negative_wattage_is_named() {
        let cases = [
            ((-1.0, 0.0, 0.0, 0.0), "produced_wattage"),
            ((0.0, -1.0, 0.0, 0.0), "household_wattage"),
            ((0.0, 0.0, -1.0, 0.0), "battery_wattage"),
            ((0.0, 0.0, 0.0, -0.5), "grid_wattage"),
        ];
        for ((p, h, b, g), field) in cases {
            let msg = message(validate_report_wattages(p, h, b, g));
            assert!(msg.starts_with(field), "expected {field}, got: {msg}");
        }
    }

    #[test]
    fn non_finite_wattage_is_rejected() {
        assert!(validate_wattage(f64::INFINITY, "produced_wattage").is_err());
        assert!(validate_wattage(f64::NAN, "produced_wattage").is_err());
    }

    // -- query parameters ----------------------------------------------------

    #[test]
    fn duration_must_not_be_negative() {
        assert!(validate_duration(0).is_ok());
        assert!(validate_duration(120).is_ok());
        assert_matches!(validate_duration(-1), Err(CoreError::Validation(_)));
    }

    #[test]
    fn page_is_one_indexed() {
        assert!(validate_page(1).is_ok());
        assert_matches!(validate_page(0), Err(CoreError::Validation(_)));
        assert_matches!(validate_page(-3), Err(CoreError::Validation(_)));
    }
}
