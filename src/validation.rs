//! Input validation for order intake.
//!
//! Checks a submission before it is allowed to touch any simulator state.
//! Detects:
//! - Blank customer identifiers
//! - Blank meal labels
//! - Distances that are not integers
//! - Distances outside the configured range
//!
//! All violations are collected so the caller can report them together.

use crate::config::SimulatorConfig;

/// Validation result carrying the validated value.
pub type ValidationResult<T> = Result<T, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Customer identifier is empty or whitespace.
    BlankCustomerId,
    /// Meal label is empty or whitespace.
    BlankMeal,
    /// Raw distance text does not parse as an integer.
    DistanceNotInteger,
    /// Distance lies outside `[min_distance, max_distance]`.
    DistanceOutOfRange,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates an order submission against the simulator configuration.
///
/// Checks:
/// 1. Customer identifier is not blank
/// 2. Meal label is not blank
/// 3. Distance lies in the configured inclusive range
///
/// # Returns
/// The distance narrowed to `u32` if all checks pass, `Err(errors)` with
/// all detected issues otherwise.
pub fn validate_order(
    meal: &str,
    distance: i64,
    customer_id: &str,
    config: &SimulatorConfig,
) -> ValidationResult<u32> {
    let mut errors = Vec::new();
    check_labels(meal, customer_id, &mut errors);
    let distance = check_range(distance, config, &mut errors);
    finish(distance, errors)
}

/// Like [`validate_order`], for a distance still in raw text form.
///
/// A distance that fails to parse is reported as `DistanceNotInteger`
/// alongside any label errors; the range is only checked once it parses.
pub fn validate_raw_order(
    meal: &str,
    raw_distance: &str,
    customer_id: &str,
    config: &SimulatorConfig,
) -> ValidationResult<u32> {
    let mut errors = Vec::new();
    check_labels(meal, customer_id, &mut errors);
    let distance = match parse_distance(raw_distance) {
        Ok(distance) => check_range(distance, config, &mut errors),
        Err(e) => {
            errors.push(e);
            None
        }
    };
    finish(distance, errors)
}

/// Parses a raw distance field into an integer.
///
/// Leading and trailing whitespace is ignored; anything else that is not a
/// plain decimal integer (`"3.5"`, `"12km"`, `""`) is rejected.
pub fn parse_distance(raw: &str) -> Result<i64, ValidationError> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|_| {
        ValidationError::new(
            ValidationErrorKind::DistanceNotInteger,
            format!("Distance '{trimmed}' is not an integer"),
        )
    })
}

fn check_labels(meal: &str, customer_id: &str, errors: &mut Vec<ValidationError>) {
    if customer_id.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::BlankCustomerId,
            "Customer ID must not be blank",
        ));
    }

    if meal.trim().is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::BlankMeal,
            "Meal must not be blank",
        ));
    }
}

fn check_range(
    distance: i64,
    config: &SimulatorConfig,
    errors: &mut Vec<ValidationError>,
) -> Option<u32> {
    let checked = config.checked_distance(distance);
    if checked.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::DistanceOutOfRange,
            format!(
                "Distance {distance} is outside [{}, {}]",
                config.min_distance, config.max_distance
            ),
        ));
    }
    checked
}

fn finish(distance: Option<u32>, errors: Vec<ValidationError>) -> ValidationResult<u32> {
    match distance {
        Some(distance) if errors.is_empty() => Ok(distance),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(result: ValidationResult<u32>) -> Vec<ValidationErrorKind> {
        result
            .unwrap_err()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    #[test]
    fn test_valid_order() {
        let config = SimulatorConfig::default();
        assert_eq!(validate_order("Pizza", 5, "cust1", &config), Ok(5));
        assert_eq!(validate_order("Pizza", 0, "cust1", &config), Ok(0));
        assert_eq!(validate_order("Pizza", 50, "cust1", &config), Ok(50));
    }

    #[test]
    fn test_blank_meal() {
        let config = SimulatorConfig::default();
        assert_eq!(
            kinds(validate_order("", 5, "cust1", &config)),
            vec![ValidationErrorKind::BlankMeal]
        );
        assert_eq!(
            kinds(validate_order("   ", 5, "cust1", &config)),
            vec![ValidationErrorKind::BlankMeal]
        );
    }

    #[test]
    fn test_blank_customer() {
        let config = SimulatorConfig::default();
        assert_eq!(
            kinds(validate_order("Soup", 5, " \t", &config)),
            vec![ValidationErrorKind::BlankCustomerId]
        );
    }

    #[test]
    fn test_distance_out_of_range() {
        let config = SimulatorConfig::default();
        assert_eq!(
            kinds(validate_order("Soup", 51, "cust1", &config)),
            vec![ValidationErrorKind::DistanceOutOfRange]
        );
        assert_eq!(
            kinds(validate_order("Soup", -1, "cust1", &config)),
            vec![ValidationErrorKind::DistanceOutOfRange]
        );
    }

    #[test]
    fn test_custom_range() {
        let config = SimulatorConfig::default().with_distance_range(5, 8);
        assert!(validate_order("Soup", 4, "c", &config).is_err());
        assert!(validate_order("Soup", 8, "c", &config).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let config = SimulatorConfig::default();
        let errors = validate_order("", 99, "", &config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].kind, ValidationErrorKind::BlankCustomerId);
        assert_eq!(errors[1].kind, ValidationErrorKind::BlankMeal);
        assert_eq!(errors[2].kind, ValidationErrorKind::DistanceOutOfRange);
    }

    #[test]
    fn test_raw_order() {
        let config = SimulatorConfig::default();
        assert_eq!(validate_raw_order("Soup", " 12 ", "c1", &config), Ok(12));
        assert_eq!(
            kinds(validate_raw_order("Soup", "51", "c1", &config)),
            vec![ValidationErrorKind::DistanceOutOfRange]
        );
        assert_eq!(
            kinds(validate_raw_order("", "ten", "c1", &config)),
            vec![
                ValidationErrorKind::BlankMeal,
                ValidationErrorKind::DistanceNotInteger
            ]
        );
    }

    #[test]
    fn test_parse_distance() {
        assert_eq!(parse_distance("12"), Ok(12));
        assert_eq!(parse_distance(" 7 "), Ok(7));
        assert_eq!(parse_distance("-3"), Ok(-3));

        for raw in ["", "3.5", "12km", "abc"] {
            let err = parse_distance(raw).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::DistanceNotInteger, "raw = {raw:?}");
        }
    }
}
