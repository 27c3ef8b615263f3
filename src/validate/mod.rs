use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ValidationError {
    #[error("{field} cannot be empty")]
    EmptyValue { field: &'static str },

    #[error("Amount must be a positive number")]
    InvalidAmount,

    #[error("Date must be in YYYY-MM-DD format")]
    InvalidDate,
}

pub(crate) fn validate_title(title: &str) -> Result<(), ValidationError> {
    require_non_empty("Title", title)
}

pub(crate) fn validate_category(category: &str) -> Result<(), ValidationError> {
    require_non_empty("Category", category)
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue { field });
    }
    Ok(())
}

/// Amounts are entered as whole, unsigned numbers. The caller applies the sign.
pub(crate) fn validate_amount(amount: &str) -> Result<Decimal, ValidationError> {
    if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidAmount);
    }
    let value = Decimal::from_str(amount).map_err(|_| ValidationError::InvalidAmount)?;
    if value <= Decimal::ZERO {
        return Err(ValidationError::InvalidAmount);
    }
    Ok(value)
}

/// Accepts "YYYY-MM-DD" naming a real calendar day. An empty string is
/// accepted and means "use today" (see [`resolve_date`]).
pub(crate) fn validate_date(date: &str) -> Result<(), ValidationError> {
    if date.is_empty() {
        return Ok(());
    }
    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(ValidationError::InvalidDate);
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return Err(ValidationError::InvalidDate);
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)?;
    Ok(())
}

/// Substitute today's local date for an empty input.
pub(crate) fn resolve_date(date: &str) -> String {
    if date.is_empty() {
        Local::now().format("%Y-%m-%d").to_string()
    } else {
        date.to_string()
    }
}
