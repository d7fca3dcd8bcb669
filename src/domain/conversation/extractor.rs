//! Token extraction from free-text answers.
//!
//! Each extractor returns the leftmost match in the raw message. Digits may be
//! ASCII or in the native script of a supported language (Devanagari for
//! Hindi and Marathi, Gujarati, Tamil) and come back as ASCII.

use once_cell::sync::Lazy;
use regex::Regex;

/// One digit in any script the booking languages write numbers in.
const DIGIT: &str = r"[0-9\x{0966}-\x{096F}\x{0AE6}-\x{0AEF}\x{0BE6}-\x{0BEF}]";

/// Digit zero of each native script. The other nine follow it in order.
const NATIVE_ZEROS: [char; 3] = ['\u{0966}', '\u{0AE6}', '\u{0BE6}'];

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "{DIGIT}{{1,2}}[/-]{DIGIT}{{1,2}}[/-]{DIGIT}{{2,4}}"
    ))
    .expect("date pattern is valid")
});

static DIGITS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("{DIGIT}+")).expect("digits pattern is valid"));

static CARD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"{DIGIT}{{4}}[\s-]?{DIGIT}{{4}}[\s-]?{DIGIT}{{4}}[\s-]?{DIGIT}{{4}}"
    ))
    .expect("card pattern is valid")
});

/// Maps a digit of any supported script to its ASCII form.
fn ascii_digit(c: char) -> Option<char> {
    if c.is_ascii_digit() {
        return Some(c);
    }
    NATIVE_ZEROS.iter().find_map(|&zero| {
        let offset = (c as u32).checked_sub(zero as u32)?;
        (offset < 10).then(|| char::from(b'0' + offset as u8))
    })
}

/// Rewrites native-script digits as ASCII and leaves everything else alone.
fn normalize_digits(token: &str) -> String {
    token.chars().map(|c| ascii_digit(c).unwrap_or(c)).collect()
}

/// Finds the first `D/M/Y`-shaped token (separators `/` or `-`).
pub fn extract_date_token(message: &str) -> Option<String> {
    DATE_PATTERN
        .find(message)
        .map(|m| normalize_digits(m.as_str()))
}

/// Finds the first run of digits.
pub fn extract_ticket_digits(message: &str) -> Option<String> {
    DIGITS_PATTERN
        .find(message)
        .map(|m| normalize_digits(m.as_str()))
}

/// Finds the first 16-digit card number, optionally grouped in fours by
/// spaces or dashes, and returns it with the separators removed.
pub fn extract_card_number(message: &str) -> Option<String> {
    CARD_PATTERN
        .find(message)
        .map(|m| m.as_str().chars().filter_map(ascii_digit).collect())
}
