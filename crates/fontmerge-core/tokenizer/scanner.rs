//! Numeric argument scanning for override tags
//!
//! Tag arguments such as `\b700`, `\i1` or `\p(2)` only matter for their
//! leading integer. Anything after the number is ignored and a missing number
//! reads as zero, so a sloppy argument never aborts tag processing.

/// Scan a leading signed integer from a tag argument
///
/// Accepts an optional `+`/`-` followed by one or more ASCII digits at the very
/// start of `arg`. Returns `0` when no such prefix exists. Values that do not
/// fit in an `i64` saturate, which keeps them outside every valid tag range.
///
/// # Example
///
/// ```rust
/// use fontmerge_core::tokenizer::scanner::parse_leading_int;
///
/// assert_eq!(parse_leading_int("700"), 700);
/// assert_eq!(parse_leading_int("-1"), -1);
/// assert_eq!(parse_leading_int("12px"), 12);
/// assert_eq!(parse_leading_int("bold"), 0);
/// ```
#[must_use]
pub fn parse_leading_int(arg: &str) -> i64 {
    let bytes = arg.as_bytes();
    let (negative, digits_start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let digits = bytes[digits_start..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit());

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in digits {
        seen_digit = true;
        let digit = i64::from(digit - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    if seen_digit {
        value
    } else {
        0
    }
}
