//! Card number checksum validation.
//!
//! Only the number itself is checked (length and Luhn mod-10). There is no
//! issuer lookup and no payment gateway behind this.

/// Shortest card number accepted.
pub const MIN_CARD_LENGTH: usize = 13;

/// Longest card number accepted.
pub const MAX_CARD_LENGTH: usize = 19;

/// Validates card numbers with the Luhn checksum.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardValidator;

impl CardValidator {
    /// Returns true if `digits` is an ASCII digit string of 13 to 19
    /// characters whose Luhn checksum is divisible by ten.
    pub fn validate(digits: &str) -> bool {
        if !(MIN_CARD_LENGTH..=MAX_CARD_LENGTH).contains(&digits.len()) {
            return false;
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }

        let checksum: u32 = digits
            .bytes()
            .rev()
            .map(|b| u32::from(b - b'0'))
            .enumerate()
            .map(|(position, digit)| {
                if position % 2 == 1 {
                    let doubled = digit * 2;
                    if doubled >= 10 {
                        doubled - 9
                    } else {
                        doubled
                    }
                } else {
                    digit
                }
            })
            .sum();

        checksum % 10 == 0
    }
}
