//! Raw answer interpretation shared by the flow graph and the rule engine
//!
//! Answers are kept as the exact strings the user typed. These helpers are
//! the only places that read meaning into them.

/// True when the answer is "yes", ignoring ASCII case
///
/// No trimming is applied: `" yes"` is not a yes.
pub fn is_yes(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes")
}

/// Lenient integer parse of a free-text answer
///
/// Skips leading whitespace, accepts one optional sign, then reads the
/// longest run of ASCII digits. Anything after the digits is ignored, so
/// `"42 years"` yields 42 while `"about 42"` yields `None`. Digit runs too
/// large for an `i64` saturate at `i64::MAX` (or `i64::MIN` when negative).
pub fn parse_integer(answer: &str) -> Option<i64> {
    let trimmed = answer.trim_start();
    let (sign_len, rest) = match trimmed.as_bytes().first() {
        Some(b'+') | Some(b'-') => (1, &trimmed[1..]),
        _ => (0, trimmed),
    };

    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let negative = trimmed.starts_with('-');
    let value = trimmed[..sign_len + digits]
        .parse()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX });
    Some(value)
}
