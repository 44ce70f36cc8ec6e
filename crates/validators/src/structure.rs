/// Parse a candidate PESEL into its 11 digits.
///
/// Returns `None` unless the input is exactly 11 ASCII digits; any
/// other length or character set is a structural failure.
pub fn extract_digits(input: &str) -> Option<[u32; 11]> {
    if input.len() != 11 {
        return None;
    }

    let mut digits = [0u32; 11];
    for (idx, ch) in input.chars().enumerate() {
        if !ch.is_ascii_digit() {
            return None;
        }
        digits[idx] = ch.to_digit(10)?;
    }
    Some(digits)
}
