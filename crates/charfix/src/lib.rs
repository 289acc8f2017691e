//! Shared character repair tables for postcode transcription noise.
//!
//! Repairs:
//! - OCR confusions (`0`/`O`, `1`/`I`) in either direction
//! - shift-key slips where a symbol was typed instead of the digit
//!   on the same key (`!` for `1`, `£` for `3`, ...)
//!
//! Both tables are pure per-character substitutions; characters outside a
//! table pass through unchanged.

/// Repair a single character of a letter-bearing field (area, unit).
///
/// Digits that are OCR-confusable with letters are replaced: `1` becomes
/// `I` and `0` becomes `O`. Every other character is returned as-is.
#[must_use]
pub fn letter_for(c: char) -> char {
    match c {
        '1' => 'I',
        '0' => 'O',
        _ => c,
    }
}

/// Repair a single character of a digit-bearing field (district, sector).
///
/// Letters that are OCR-confusable with digits and symbols produced by
/// over-eager use of the shift key are replaced by the digit they stand
/// in for. Every other character is returned as-is.
#[must_use]
pub fn digit_for(c: char) -> char {
    match c {
        'I' | '!' => '1',
        'O' | ')' => '0',
        '"' => '2',
        '£' => '3',
        '$' => '4',
        '%' => '5',
        '^' => '6',
        '&' => '7',
        '*' => '8',
        '(' => '9',
        _ => c,
    }
}

/// Apply [`letter_for`] to every character of `s`.
#[must_use]
pub fn repair_letters(s: &str) -> String {
    s.chars().map(letter_for).collect()
}

/// Apply [`digit_for`] to every character of `s`.
#[must_use]
pub fn repair_digits(s: &str) -> String {
    s.chars().map(digit_for).collect()
}

#[cfg(test)]
mod tests {
    use super::{repair_digits, repair_letters};

    #[test]
    fn digits_become_letters() {
        assert_eq!(repair_letters("0PW"), "OPW");
        assert_eq!(repair_letters("1A"), "IA");
        assert_eq!(repair_letters("AB"), "AB");
    }

    #[test]
    fn letters_and_symbols_become_digits() {
        assert_eq!(repair_digits("IA"), "1A");
        assert_eq!(repair_digits("O"), "0");
        assert_eq!(repair_digits("!\"$%^&*()"), "124567890");
        assert_eq!(repair_digits("£"), "3");
        assert_eq!(repair_digits("42"), "42");
    }

    #[test]
    fn unknown_characters_pass_through() {
        assert_eq!(repair_letters("xyz 123"), "xyz I23");
        assert_eq!(repair_digits("xyz"), "xyz");
    }
}
