//! Score bounds and the two ways score text becomes a number.
//!
//! Typed input and stored cells are parsed differently on purpose: typed
//! text that is not a number becomes 0 and is then clamped, while a stored
//! cell that is not a number means the score has not been entered.

/// Inclusive `(min, max)` net score for a hole of `par`.
///
/// `min = -(par - 1)`, `max = par * 2`. A par of 0 is read as 1.
pub fn score_bounds(par: u8) -> (i32, i32) {
    let par = i32::from(par.max(1));
    (-(par - 1), par * 2)
}

/// Clamp a raw net score into the hole's bounds.
pub fn clamp_score(raw: i32, par: u8) -> i32 {
    let (min, max) = score_bounds(par);
    raw.clamp(min, max)
}

/// Turn typed input into the value to store: non-numeric text counts as 0,
/// then the result is clamped.
pub fn clamp_input(input: &str, par: u8) -> i32 {
    clamp_score(parse_leading_int(input).unwrap_or(0), par)
}

/// Read a stored score cell. Empty or non-numeric cells are absent.
pub fn parse_stored(cell: &str) -> Option<i32> {
    parse_leading_int(cell)
}

/// Leading-integer parse: optional whitespace, optional sign, then digits.
/// Anything after the digits is ignored; values beyond `i32` saturate.
fn parse_leading_int(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(b - b'0'))
            .min(i64::from(i32::MAX) + 1)
    });
    let value = if negative { -magnitude } else { magnitude };
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}
