//! Character classes of the postcode grammar.
//!
//! Each class deliberately overlaps the "clean" alphabet with the noisy
//! characters the repair tables can fix afterwards: area and unit admit the
//! digits `0`/`1` standing in for `O`/`I`, while district and sector admit
//! the letters `I`/`O` and the shift-key symbol row (`!` for `1`, `£` for
//! `3`, ...). Classes are checked against the upper-cased input.

/// First (required) area character: `A-P R-U W Y Z 0 1`.
///
/// `Q`, `V`, and `X` never start a UK postcode area.
pub(crate) fn is_area_first(c: char) -> bool {
    matches!(c, 'A'..='P' | 'R'..='U' | 'W' | 'Y' | 'Z' | '0' | '1')
}

/// Second (optional) area character: any letter plus `0`/`1`.
pub(crate) fn is_area_second(c: char) -> bool {
    matches!(c, 'A'..='Z' | '0' | '1')
}

/// First (required) district character: digits, OCR-confusable `I`/`O`,
/// and the shift-key symbol set.
pub(crate) fn is_district_first(c: char) -> bool {
    matches!(c, '0'..='9' | 'I' | 'O' | '!' | '"' | '$' | '%' | '^' | '&' | '*' | '(' | ')' | '£')
}

/// Second (optional) district character: the first-character set widened
/// with the letters `A-K M N P-Y` (everything but `L` and `Z`).
pub(crate) fn is_district_second(c: char) -> bool {
    is_district_first(c) || matches!(c, 'A'..='K' | 'M' | 'N' | 'P'..='Y')
}

/// Sector character: same class as the first district character.
pub(crate) fn is_sector(c: char) -> bool {
    is_district_first(c)
}

/// Unit character: `A B D-H J L N P-Z`, plus `1`/`0` standing in for
/// `I`/`O`. The letters `C I K M O` never appear in a unit.
pub(crate) fn is_unit(c: char) -> bool {
    matches!(c, 'A' | 'B' | 'D'..='H' | 'J' | 'L' | 'N' | 'P'..='Z' | '1' | '0')
}

/// Insignificant separator whitespace: ASCII whitespace plus vertical tab.
pub(crate) fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\u{0B}'
}
