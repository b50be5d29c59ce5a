//! Display formatting for evaluation results and memory values.
//!
//! Results are rendered the way a browser-hosted calculator shows them:
//! exponential notation for very large or very small magnitudes, otherwise a
//! decimal rounded to 12 places with floating-point noise collapsed.

const EXPONENTIAL_UPPER: f64 = 1e9;
const EXPONENTIAL_LOWER: f64 = 1e-6;
const FIXED_DIGITS: usize = 12;
const EXPONENT_DIGITS: usize = 6;
/// Enough fraction digits to print any `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// Format a numeric evaluation result for display.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return number_to_string(value);
    }
    let magnitude = value.abs();
    if magnitude >= EXPONENTIAL_UPPER || (magnitude > 0.0 && magnitude < EXPONENTIAL_LOWER) {
        return trimmed_exponential(value, EXPONENT_DIGITS);
    }
    let fixed = fixed_half_up(value, FIXED_DIGITS);
    let rounded = fixed.parse::<f64>().unwrap_or(value);
    number_to_string(rounded)
}

/// Format a numeric string returned by the evaluation service.
pub fn format_numeric_text(text: &str) -> String {
    format_number(text_to_number(text))
}

/// Render a number with default script-engine number-to-string rules.
///
/// Plain decimal for magnitudes in `[1e-6, 1e21)`, shortest exponential form
/// otherwise, `Infinity`/`-Infinity`/`NaN` for non-finite values.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < EXPONENTIAL_LOWER {
        return signed_exponent(&format!("{:e}", value));
    }
    format!("{}", value)
}

/// Convert text to a number the way a script engine's `Number(text)` does.
///
/// Blank text is zero, `Infinity` literals are accepted, anything that is not
/// a plain decimal literal is `NaN`.
pub fn text_to_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let is_decimal_literal = trimmed
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-'));
    if !is_decimal_literal {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse the longest numeric prefix of `text`, skipping leading whitespace.
///
/// # Returns
/// `None` when `text` does not start with a number.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut idx = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        idx += 1;
    }
    if text[idx..].starts_with("Infinity") {
        return Some(if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let digits_start = idx;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
    }
    let mut digit_count = idx - digits_start;
    if idx < bytes.len() && bytes[idx] == b'.' {
        let fraction_start = idx + 1;
        let mut end = fraction_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        digit_count += end - fraction_start;
        idx = end;
    }
    if digit_count == 0 {
        return None;
    }

    if idx < bytes.len() && matches!(bytes[idx], b'e' | b'E') {
        let mut end = idx + 1;
        if end < bytes.len() && matches!(bytes[end], b'+' | b'-') {
            end += 1;
        }
        let exponent_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > exponent_start {
            idx = end;
        }
    }

    text[..idx].parse::<f64>().ok()
}

/// Add one unit in the last place of an ASCII digit string.
///
/// # Returns
/// `true` when the carry ran off the front (`999` became `000`).
fn increment_digits(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

/// Fixed-point text with `places` fraction digits, exact ties rounded away
/// from zero.
fn fixed_half_up(value: f64, places: usize) -> String {
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let Some((int_part, frac_part)) = exact.split_once('.') else {
        return format!("{:.*}", places, value);
    };
    let mut digits: Vec<u8> = int_part.bytes().chain(frac_part.bytes().take(places)).collect();
    let round_up = frac_part.as_bytes().get(places).is_some_and(|next| *next >= b'5');
    if round_up && increment_digits(&mut digits) {
        digits.insert(0, b'1');
    }
    let split = digits.len() - places;
    let (int_digits, frac_digits) = digits.split_at(split);
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if frac_digits.is_empty() {
        return format!("{}{}", sign, String::from_utf8_lossy(int_digits));
    }
    format!(
        "{}{}.{}",
        sign,
        String::from_utf8_lossy(int_digits),
        String::from_utf8_lossy(frac_digits)
    )
}

/// Exponential text with `digits` mantissa fraction digits, exact ties rounded
/// away from zero, trailing zeros trimmed and the exponent always signed.
fn trimmed_exponential(value: f64, digits: usize) -> String {
    let exact = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return exact;
    };
    let Ok(mut exponent) = exponent.parse::<i32>() else {
        return exact;
    };
    let significant: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let mut kept: Vec<u8> = significant.iter().copied().take(digits + 1).collect();
    let round_up = significant.get(digits + 1).is_some_and(|next| *next >= b'5');
    if round_up && increment_digits(&mut kept) {
        kept.insert(0, b'1');
        kept.truncate(digits + 1);
        exponent += 1;
    }

    let Some((&lead, rest)) = kept.split_first() else {
        return exact;
    };
    let lead = char::from(lead);
    let fraction = String::from_utf8_lossy(rest);
    let fraction = fraction.trim_end_matches('0');
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let mantissa = if fraction.is_empty() {
        format!("{}{}", sign, lead)
    } else {
        format!("{}{}.{}", sign, lead, fraction)
    };
    signed_exponent(&format!("{}e{}", mantissa, exponent))
}

fn signed_exponent(raw: &str) -> String {
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => raw.to_string(),
    }
}
