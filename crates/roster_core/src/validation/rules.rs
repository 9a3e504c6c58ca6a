//! Field validators.
//!
//! Every function here is pure: same input, same result, no side effects.

use super::ValidationError;
use chrono::NaiveDate;

/// Date format accepted by `past_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Maximum length of a company name, in characters.
pub const COMPANY_NAME_MAX_CHARS: usize = 50;
pub const MIN_SKILL_RATING: u8 = 1;
pub const MAX_SKILL_RATING: u8 = 5;

/// Fails when `value` is empty. Whitespace counts as present.
pub fn required(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingField);
    }
    Ok(())
}

/// Fails when `value` has more than `max` characters.
pub fn max_length(value: &str, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { max, actual });
    }
    Ok(())
}

/// Parses `value` as `YYYY-MM-DD` and requires it to be strictly before `today`.
pub fn past_date(value: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    required(value)?;
    let parsed = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate)?;
    if parsed < today {
        Ok(parsed)
    } else {
        Err(ValidationError::DateNotPast)
    }
}

/// Resolves a non-empty `value` through `lookup`.
///
/// Empty input resolves to `None`; pair with `required` where presence matters.
pub fn one_of<T>(
    value: &str,
    lookup: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, ValidationError> {
    if value.is_empty() {
        return Ok(None);
    }
    lookup(value)
        .map(Some)
        .ok_or(ValidationError::UnknownOption)
}

/// Parses a skill rating and requires it to be within 1..=5.
pub fn rating_in_range(value: &str) -> Result<u8, ValidationError> {
    required(value)?;
    let out_of_range = ValidationError::OutOfRange {
        min: i64::from(MIN_SKILL_RATING),
        max: i64::from(MAX_SKILL_RATING),
    };
    let rating = value.trim().parse::<u8>().map_err(|_| out_of_range.clone())?;
    if (MIN_SKILL_RATING..=MAX_SKILL_RATING).contains(&rating) {
        Ok(rating)
    } else {
        Err(out_of_range)
    }
}
