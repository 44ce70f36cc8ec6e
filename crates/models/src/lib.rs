use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// A single validation finding. The `Display` strings are the
/// user-facing messages rendered by the CLI and the JSON output.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Input is not exactly 11 ASCII digits.
    #[error("PESEL must be 11 digits")]
    LengthOrCharset,

    /// The two-digit month field maps to no known century band.
    #[error("Invalid month encoding in PESEL")]
    MonthEncoding,

    /// Decoded year/month/day do not form a real calendar date.
    #[error("Invalid birth date in PESEL")]
    InvalidBirthDate,

    /// Computed control digit disagrees with the 11th digit.
    #[error("Invalid checksum")]
    ChecksumMismatch,
}

// Serialize as the rendered message so JSON output reads like the
// terminal output, not like variant names.
impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Sex encoded by the 10th digit of a PESEL: odd is male, even female.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn from_digit(digit: u32) -> Sex {
        if digit % 2 == 1 {
            Sex::Male
        } else {
            Sex::Female
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sex::Female => write!(f, "F"),
            Sex::Male => write!(f, "M"),
        }
    }
}

impl Serialize for Sex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of validating one candidate PESEL.
///
/// `birth_date` is present whenever the encoded digits form a real
/// calendar date, even if the checksum failed. `sex` is present only
/// when the whole result is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    pub errors: Vec<ValidationError>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        ValidationResult {
            is_valid: true,
            birth_date: None,
            sex: None,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.is_valid = false;
        self.errors.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_is_valid_and_empty() {
        let result = ValidationResult::new();
        assert!(result.is_valid);
        assert!(result.birth_date.is_none());
        assert!(result.sex.is_none());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_add_error_invalidates_and_keeps_order() {
        let mut result = ValidationResult::new();
        result.add_error(ValidationError::InvalidBirthDate);
        result.add_error(ValidationError::ChecksumMismatch);
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec![
                ValidationError::InvalidBirthDate,
                ValidationError::ChecksumMismatch
            ]
        );
    }

    #[test]
    fn test_sex_parity() {
        assert_eq!(Sex::from_digit(0), Sex::Female);
        assert_eq!(Sex::from_digit(1), Sex::Male);
        assert_eq!(Sex::from_digit(8), Sex::Female);
        assert_eq!(Sex::from_digit(9), Sex::Male);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::LengthOrCharset.to_string(),
            "PESEL must be 11 digits"
        );
        assert_eq!(
            ValidationError::MonthEncoding.to_string(),
            "Invalid month encoding in PESEL"
        );
        assert_eq!(
            ValidationError::InvalidBirthDate.to_string(),
            "Invalid birth date in PESEL"
        );
        assert_eq!(
            ValidationError::ChecksumMismatch.to_string(),
            "Invalid checksum"
        );
    }
}
