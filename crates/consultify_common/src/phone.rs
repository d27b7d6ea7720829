//! US phone-number display formatting.
//!
//! The frontend applies this mask while the user types; the server applies the
//! same transform before persisting so stored numbers are uniform.

/// Formats a raw phone-number string into the US display form.
///
/// Strips all non-digit characters and truncates to 10 digits, then:
/// 0-3 digits are returned unchanged, 4-6 become `(XXX) XXX`, and 7-10
/// become `(XXX) XXX-XXXX`.
pub fn format_phone_number(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).take(10).collect();

    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_full_number() {
        assert_eq!(format_phone_number("1234567890"), "(123) 456-7890");
    }

    #[test]
    fn short_inputs_pass_through() {
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("1"), "1");
        assert_eq!(format_phone_number("123"), "123");
    }

    #[test]
    fn partial_numbers_get_area_code_mask() {
        assert_eq!(format_phone_number("1234"), "(123) 4");
        assert_eq!(format_phone_number("123456"), "(123) 456");
        assert_eq!(format_phone_number("1234567"), "(123) 456-7");
    }

    #[test]
    fn strips_non_digits() {
        assert_eq!(format_phone_number("(123) 456-7890"), "(123) 456-7890");
        assert_eq!(format_phone_number("123-456-7890"), "(123) 456-7890");
        assert_eq!(format_phone_number("abc"), "");
    }

    #[test]
    fn truncates_past_ten_digits() {
        assert_eq!(format_phone_number("123456789012345"), "(123) 456-7890");
    }
}
