// src/common/validate.rs

//! Field rules shared by the request payloads.

use rust_decimal::Decimal;
use validator::ValidationError;

/// Largest amount a `NUMERIC(12, 2)` price column holds.
pub fn max_price_per_day() -> Decimal {
    Decimal::new(999_999_999_999, 2)
}

/// Largest amount a `NUMERIC(14, 2)` total column holds.
pub fn max_total_amount() -> Decimal {
    Decimal::new(99_999_999_999_999, 2)
}

/// Required text: at least one non-whitespace character.
pub fn validate_not_blank(val: &str) -> Result<(), ValidationError> {
    if val.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Money amount: not negative, at most two decimals, within the price column.
pub fn validate_price(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() && !val.is_zero() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("The value cannot be negative.".into());
        return Err(err);
    }
    if val.normalize().scale() > 2 {
        let mut err = ValidationError::new("scale");
        err.add_param("max_decimals".into(), &2);
        err.message = Some("The value cannot have more than two decimals.".into());
        return Err(err);
    }
    if *val > max_price_per_day() {
        let mut err = ValidationError::new("range");
        err.add_param("max".into(), &max_price_per_day().to_string());
        err.message = Some("The value is too large.".into());
        return Err(err);
    }
    Ok(())
}
