//! # Validation Module
//!
//! The parse-and-validate boundary between raw form input and the domain.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation shell                                           │
//! │  ├── Basic format checks (empty fields)                                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Finiteness checks (the shell hands over raw floats)               │
//! │  ├── Range checks (positive quantities, non-negative prices)           │
//! │  └── Conversion to typed values (i64 quantities, Money in paise)       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Domain components                                            │
//! │  └── Business rules (stock sufficiency, invoice composition)           │
//! │                                                                         │
//! │  Nothing past layer 2 ever sees an f64.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Converts a rupee amount to paise, rounding to the nearest paisa.
///
/// The single place floating point crosses into integer money.
#[inline]
fn to_paise(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

// =============================================================================
// Required Parses (errors)
// =============================================================================

/// Parses a quantity field: finite, strictly positive, whole.
///
/// ## Example
/// ```rust
/// use yardtrack_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("quantity", 20.0).unwrap(), 20);
/// assert!(parse_quantity("quantity", 0.0).is_err());
/// assert!(parse_quantity("quantity", f64::NAN).is_err());
/// assert!(parse_quantity("quantity", 2.5).is_err());
/// ```
pub fn parse_quantity(field: &str, value: f64) -> ValidationResult<i64> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    if value.fract() != 0.0 {
        return Err(ValidationError::MustBeWholeNumber {
            field: field.to_string(),
        });
    }

    Ok(value as i64)
}

/// Parses a unit price field: finite and non-negative. Zero is allowed
/// (giveaway lines).
pub fn parse_unit_price(field: &str, value: f64) -> ValidationResult<Money> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: field.to_string(),
        });
    }

    Ok(Money::from_paise(to_paise(value)))
}

/// Parses a sale total field: finite and strictly positive.
pub fn parse_sale_total(field: &str, value: f64) -> ValidationResult<Money> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(Money::from_paise(to_paise(value)))
}

/// Parses a date key in `YYYY-MM-DD` form.
pub fn parse_date_key(field: &str, value: &str) -> ValidationResult<NaiveDate> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "expected YYYY-MM-DD".to_string(),
    })
}

// =============================================================================
// Normalizing Parses (never fail)
// =============================================================================

/// Normalizes an optional charge amount.
///
/// Anything non-finite or not strictly positive becomes zero; charges
/// are optional extras, so junk input means "no charge", not an error.
pub fn parse_charge(value: f64) -> Money {
    if !value.is_finite() || value <= 0.0 {
        return Money::zero();
    }
    Money::from_paise(to_paise(value))
}

/// Normalizes a labour head count to a non-negative whole number.
/// Fractions truncate toward zero.
pub fn parse_person_count(value: f64) -> i64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.floor() as i64
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("quantity", 1.0).unwrap(), 1);
        assert_eq!(parse_quantity("quantity", 100.0).unwrap(), 100);

        assert!(matches!(
            parse_quantity("quantity", 0.0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            parse_quantity("quantity", -3.0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            parse_quantity("quantity", f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            parse_quantity("quantity", f64::INFINITY),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(matches!(
            parse_quantity("quantity", 2.5),
            Err(ValidationError::MustBeWholeNumber { .. })
        ));
    }

    #[test]
    fn test_parse_unit_price() {
        assert_eq!(parse_unit_price("unitPrice", 450.0).unwrap().paise(), 45000);
        assert_eq!(parse_unit_price("unitPrice", 0.0).unwrap(), Money::zero());
        // Rounds to the nearest paisa
        assert_eq!(parse_unit_price("unitPrice", 6.005).unwrap().paise(), 601);

        assert!(parse_unit_price("unitPrice", -1.0).is_err());
        assert!(parse_unit_price("unitPrice", f64::NAN).is_err());
    }

    #[test]
    fn test_parse_sale_total() {
        assert_eq!(parse_sale_total("total", 9000.0).unwrap().paise(), 900000);

        assert!(parse_sale_total("total", 0.0).is_err());
        assert!(parse_sale_total("total", -5.0).is_err());
        assert!(parse_sale_total("total", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_parse_date_key() {
        assert_eq!(
            parse_date_key("saleDate", "2024-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );

        assert!(matches!(
            parse_date_key("saleDate", ""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_date_key("saleDate", "01/01/2024"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_charge_normalizes_junk_to_zero() {
        assert_eq!(parse_charge(500.0).paise(), 50000);
        assert_eq!(parse_charge(0.0), Money::zero());
        assert_eq!(parse_charge(-20.0), Money::zero());
        assert_eq!(parse_charge(f64::NAN), Money::zero());
        assert_eq!(parse_charge(f64::INFINITY), Money::zero());
    }

    #[test]
    fn test_parse_person_count() {
        assert_eq!(parse_person_count(2.0), 2);
        assert_eq!(parse_person_count(2.9), 2);
        assert_eq!(parse_person_count(0.0), 0);
        assert_eq!(parse_person_count(-4.0), 0);
        assert_eq!(parse_person_count(f64::NAN), 0);
    }
}
