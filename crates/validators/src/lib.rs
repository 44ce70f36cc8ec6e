// validators crate

mod checksum;
mod date;
mod structure;

pub use checksum::{checksum_matches, control_digit};
pub use date::{birth_date, decode_year_month};
pub use structure::extract_digits;

use models::{Sex, ValidationError, ValidationResult};

/// Validate a candidate PESEL string.
///
/// Pure and deterministic; every failure mode lands in the result's
/// error list, never in a panic. Structural and month-encoding
/// failures return early without checking the checksum; an impossible
/// calendar date does not, so a birth date error and a checksum error
/// can co-occur.
pub fn validate_pesel(input: &str) -> ValidationResult {
    let mut result = ValidationResult::new();

    let digits = match extract_digits(input) {
        Some(digits) => digits,
        None => {
            result.add_error(ValidationError::LengthOrCharset);
            return result;
        }
    };

    let yy = digits[0] * 10 + digits[1];
    let mm = digits[2] * 10 + digits[3];
    let dd = digits[4] * 10 + digits[5];

    let (year, month) = match decode_year_month(yy, mm) {
        Some(decoded) => decoded,
        None => {
            result.add_error(ValidationError::MonthEncoding);
            return result;
        }
    };

    result.birth_date = birth_date(year, month, dd);
    if result.birth_date.is_none() {
        result.add_error(ValidationError::InvalidBirthDate);
    }

    // Parity of the 10th digit, computed regardless of the outcome but
    // only surfaced on a fully valid result.
    let sex = Sex::from_digit(digits[9]);

    if !checksum_matches(&digits) {
        result.add_error(ValidationError::ChecksumMismatch);
    }

    if result.is_valid {
        result.sex = Some(sex);
    }

    result
}
