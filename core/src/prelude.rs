use serde::Serialize;

/// Reason a formula could not produce a number for the given inputs.
///
/// This is the typed replacement for the "undefined result" float used by
/// hosts: a formula either returns a finite value or one of these, and never
/// panics on ordinary out-of-domain input.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DomainError {
    #[error("{quantity} must be positive (got {value})")]
    NotPositive { quantity: &'static str, value: f64 },
    #[error("{quantity} must not be negative (got {value})")]
    Negative { quantity: &'static str, value: f64 },
    #[error("{quantity} is not a number")]
    NotANumber { quantity: &'static str },
    #[error("{quantity} = {value} is outside the valid range {min}..{max}")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{formula} produced a non-finite result")]
    NonFinite { formula: &'static str },
}

pub type FormulaResult<T = f64> = Result<T, DomainError>;

/// Rejects NaN; every other value (including infinities) passes.
pub fn require_number(quantity: &'static str, value: f64) -> FormulaResult {
    if value.is_nan() {
        Err(DomainError::NotANumber { quantity })
    } else {
        Ok(value)
    }
}

/// Accepts strictly positive values only.
pub fn require_positive(quantity: &'static str, value: f64) -> FormulaResult {
    let value = require_number(quantity, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(DomainError::NotPositive { quantity, value })
    }
}

/// Accepts zero and positive values.
pub fn require_non_negative(quantity: &'static str, value: f64) -> FormulaResult {
    let value = require_number(quantity, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(DomainError::Negative { quantity, value })
    }
}

/// Accepts values strictly inside `(min, max)`.
pub fn require_open_range(quantity: &'static str, value: f64, min: f64, max: f64) -> FormulaResult {
    let value = require_number(quantity, value)?;
    if value > min && value < max {
        Ok(value)
    } else {
        Err(DomainError::OutOfRange {
            quantity,
            value,
            min,
            max,
        })
    }
}

/// Final guard applied to every computed value.
pub fn finite(formula: &'static str, value: f64) -> FormulaResult {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { formula })
    }
}

/// Collapses a result back into the float convention (`NaN` when undefined).
pub fn or_nan(result: FormulaResult) -> f64 {
    result.unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_guard_rejects_zero_negative_and_nan() {
        assert!(require_positive("range_km", 0.0).is_err());
        assert!(require_positive("range_km", -1.0).is_err());
        assert_eq!(
            require_positive("range_km", f64::NAN),
            Err(DomainError::NotANumber {
                quantity: "range_km"
            })
        );
        assert_eq!(require_positive("range_km", 2.5), Ok(2.5));
    }

    #[test]
    fn non_negative_guard_accepts_zero() {
        assert_eq!(require_non_negative("height_m", 0.0), Ok(0.0));
        assert!(matches!(
            require_non_negative("height_m", -0.1),
            Err(DomainError::Negative { .. })
        ));
    }

    #[test]
    fn open_range_excludes_bounds() {
        assert!(require_open_range("v", 0.0, 0.0, 2.4).is_err());
        assert!(require_open_range("v", 2.4, 0.0, 2.4).is_err());
        assert_eq!(require_open_range("v", 1.0, 0.0, 2.4), Ok(1.0));
    }

    #[test]
    fn non_finite_results_collapse_to_nan() {
        assert!(finite("fspl", f64::INFINITY).is_err());
        assert!(or_nan(finite("fspl", f64::NAN)).is_nan());
        assert_eq!(or_nan(Ok(3.0)), 3.0);
    }

    #[test]
    fn domain_error_messages_name_the_quantity() {
        let err = require_positive("freq_ghz", -1.0).unwrap_err();
        assert_eq!(err.to_string(), "freq_ghz must be positive (got -1)");
    }
}
