//! Name and age checks performed before any question is asked.

use crate::errors::{AppError, AppResult};

/// Inclusive age bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl Default for AgeRange {
    fn default() -> Self {
        Self { min: 12, max: 18 }
    }
}

impl AgeRange {
    pub fn contains(&self, age: u32) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

/// Non-blank, at least 2 characters once trimmed.
/// With `reject_numeric`, names made only of digits are refused too.
pub fn validate_name(raw: &str, reject_numeric: bool) -> AppResult<String> {
    let name = raw.trim();

    if name.chars().count() < 2 {
        return Err(AppError::InvalidName(
            "Please enter a valid name (at least 2 characters).".to_string(),
        ));
    }
    if reject_numeric && name.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidName(
            "Please enter a valid name (at least 2 characters, no numbers).".to_string(),
        ));
    }

    Ok(name.to_string())
}

/// Any whole number is an age, negative or huge ones included; only
/// non-numeric text is invalid.
pub fn parse_age(raw: &str) -> AppResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        AppError::InvalidAge("Please enter a valid number for your age.".to_string())
    })
}

/// The age narrowed to `u32` when it lies inside `range`.
pub fn check_age(age: i64, range: &AgeRange) -> AppResult<u32> {
    u32::try_from(age)
        .ok()
        .filter(|a| range.contains(*a))
        .ok_or(AppError::NotEligible {
            age,
            min: range.min,
            max: range.max,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligibility_holds_exactly_inside_range() {
        let range = AgeRange::default();
        for age in -5..=120 {
            assert_eq!(check_age(age, &range).is_ok(), (12..=18).contains(&age));
        }
        assert!(matches!(
            check_age(i64::MAX, &range),
            Err(AppError::NotEligible { .. })
        ));
    }

    #[test]
    fn short_or_blank_names_are_rejected() {
        assert!(validate_name("", false).is_err());
        assert!(validate_name("   ", false).is_err());
        assert!(validate_name(" J ", false).is_err());
        assert_eq!(validate_name("  Jo ", false).unwrap(), "Jo");
    }

    #[test]
    fn numeric_names_only_rejected_on_request() {
        assert!(validate_name("42", false).is_ok());
        assert!(validate_name("42", true).is_err());
        assert!(validate_name("R2", true).is_ok());
    }

    #[test]
    fn age_must_parse() {
        assert_eq!(parse_age(" 15 ").unwrap(), 15);
        assert!(matches!(parse_age("fifteen"), Err(AppError::InvalidAge(_))));
        assert_eq!(parse_age("-3").unwrap(), -3);
        assert_eq!(parse_age("99999999999").unwrap(), 99_999_999_999);
    }
}
