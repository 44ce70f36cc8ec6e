/// Weights applied to the first 10 digits when computing the control
/// digit.
const WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

/// Control digit for the first 10 digits: weighted sum mod 10,
/// subtracted from 10, mod 10 again so a clean sum maps to 0.
pub fn control_digit(digits: &[u32; 11]) -> u32 {
    let sum: u32 = digits
        .iter()
        .take(10)
        .zip(WEIGHTS.iter())
        .map(|(d, w)| d * w)
        .sum();
    (10 - sum % 10) % 10
}

/// Whether the 11th digit matches the control digit computed from the
/// first 10.
pub fn checksum_matches(digits: &[u32; 11]) -> bool {
    control_digit(digits) == digits[10]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_control_digits() {
        assert_eq!(control_digit(&[9, 0, 0, 5, 1, 2, 0, 0, 0, 0, 0]), 9);
        assert_eq!(control_digit(&[0, 3, 3, 2, 3, 1, 0, 0, 0, 1, 0]), 3);
    }

    #[test]
    fn test_exactly_one_control_digit_passes() {
        let mut digits = [9, 0, 0, 5, 1, 2, 1, 2, 3, 1, 0];
        let control = control_digit(&digits);
        for candidate in 0..10 {
            digits[10] = candidate;
            assert_eq!(checksum_matches(&digits), candidate == control);
        }
    }

    #[test]
    fn test_clean_sum_maps_to_zero() {
        // All-zero prefix sums to 0, so the control digit must be 0,
        // not 10.
        assert_eq!(control_digit(&[0; 11]), 0);
    }
}
