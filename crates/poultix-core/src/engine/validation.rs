//! Caller-side validation of raw pH input.

use thiserror::Error;
use tracing::warn;

use crate::models::{PH_MAX, PH_MIN};

/// Input rejected before it reaches the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid pH value: {0}")]
    InvalidPhValue(String),
}

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check that a numeric reading lies on the pH scale.
pub fn validate_ph(ph: f64) -> ValidationResult<f64> {
    if !ph.is_finite() || !(PH_MIN..=PH_MAX).contains(&ph) {
        warn!(ph, "rejected pH outside 0-14");
        return Err(ValidationError::InvalidPhValue(format!(
            "{} is outside the 0-14 scale",
            ph
        )));
    }
    Ok(ph)
}

/// Parse and validate raw user input such as `" 6.8 "`.
pub fn validate_ph_input(raw: &str) -> ValidationResult<f64> {
    let trimmed = raw.trim();
    let ph: f64 = trimmed.parse().map_err(|_| {
        warn!(input = trimmed, "rejected non-numeric pH input");
        ValidationError::InvalidPhValue(format!("'{}' is not a number", trimmed))
    })?;
    validate_ph(ph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_scale() {
        assert_eq!(validate_ph_input("0"), Ok(0.0));
        assert_eq!(validate_ph_input("14"), Ok(14.0));
        assert_eq!(validate_ph_input(" 6.8 "), Ok(6.8));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(validate_ph_input("-1"), Err(ValidationError::InvalidPhValue(_))));
        assert!(matches!(validate_ph_input("15"), Err(ValidationError::InvalidPhValue(_))));
        assert!(matches!(validate_ph_input("14.01"), Err(ValidationError::InvalidPhValue(_))));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(validate_ph_input("").is_err());
        assert!(validate_ph_input("abc").is_err());
        assert!(validate_ph_input("7,2").is_err());
        assert!(validate_ph_input("NaN").is_err());
        assert!(validate_ph_input("inf").is_err());
    }
}
