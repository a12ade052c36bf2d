//! Live phone-number formatting.

/// Formats a phone draft progressively as digits accumulate.
///
/// Non-digits in the input are stripped first, so the function is idempotent
/// on its own output. Punctuation appears as digits arrive:
/// 0-3 digits stay bare, 4-6 render as `(DDD) DDD`, 7-10 as
/// `(DDD) DDD-DDDD`. Input beyond 10 digits is truncated.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(10)
        .collect();
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}
