//! Postcode matchers — whole-string grammar matching with explicit
//! backtracking.
//!
//! The compact form of a postcode has no delimiters between fields
//! (`SW1A0AA`), so the area/district boundary is ambiguous. The matcher
//! replicates greedy-with-backtrack semantics by hand: it prefers the
//! longest area, then the longest district, then a present sector+unit
//! group over an absent one, and returns the first split that consumes
//! the entire input. No match leaves every capture absent.

use super::classes::{
    is_area_first, is_area_second, is_district_first, is_district_second, is_sector, is_space,
    is_unit,
};

// ─── Captures ───────────────────────────────────────────────────────────────

/// Raw (unrepaired, upper-cased) captures of the standard grammar.
///
/// `sector` and `unit` are both present or both absent: the grammar only
/// admits the incode as a complete sector+unit group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardCaptures {
    /// 1–2 character area capture.
    pub area: String,
    /// 1–2 character district capture.
    pub district: String,
    /// Single sector character, when the incode group matched.
    pub sector: Option<String>,
    /// Exactly 2 unit characters, when the incode group matched.
    pub unit: Option<String>,
}

/// Captures of the BFPO grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfpoCaptures {
    /// Whether the optional `c/o` marker was present.
    pub care_of: bool,
    /// The 1–4 digit BFPO number.
    pub number: String,
}

// ─── Standard grammar ───────────────────────────────────────────────────────

/// Match `raw` against the standard postcode grammar.
///
/// The input is upper-cased first; leading and trailing whitespace is
/// insignificant, as is whitespace between the district and the sector.
/// The entire string must match — trailing unmatched characters fail the
/// whole match.
#[must_use]
pub fn match_standard(raw: &str) -> Option<StandardCaptures> {
    let chars: Vec<char> = raw.to_uppercase().chars().collect();
    let n = chars.len();
    let at = |i: usize, class: fn(char) -> bool| i < n && class(chars[i]);
    let slice = |from: usize, to: usize| chars[from..to].iter().collect::<String>();

    let a0 = skip_space(&chars, 0);
    // Longest area first, then longest district, then incode-present before
    // incode-absent. This ordering is load-bearing: it decides how compact
    // inputs like "B11AB" split.
    for area_len in [2, 1] {
        let area_ok = at(a0, is_area_first)
            && (area_len == 1 || at(a0 + 1, is_area_second));
        if !area_ok {
            continue;
        }
        let d0 = a0 + area_len;
        for district_len in [2, 1] {
            let district_ok = at(d0, is_district_first)
                && (district_len == 1 || at(d0 + 1, is_district_second));
            if !district_ok {
                continue;
            }
            let rest = d0 + district_len;
            let s0 = skip_space(&chars, rest);
            if at(s0, is_sector)
                && at(s0 + 1, is_unit)
                && at(s0 + 2, is_unit)
                && skip_space(&chars, s0 + 3) == n
            {
                return Some(StandardCaptures {
                    area: slice(a0, d0),
                    district: slice(d0, rest),
                    sector: Some(slice(s0, s0 + 1)),
                    unit: Some(slice(s0 + 1, s0 + 3)),
                });
            }
            if skip_space(&chars, rest) == n {
                return Some(StandardCaptures {
                    area: slice(a0, d0),
                    district: slice(d0, rest),
                    sector: None,
                    unit: None,
                });
            }
        }
    }
    None
}

// ─── BFPO grammar ───────────────────────────────────────────────────────────

/// Match `raw` against the BFPO grammar, case-insensitively.
///
/// Accepts optional whitespace, the literal `BFP` followed by `O` or `0`,
/// an optional `c/o` marker, and a 1–4 digit number. The entire string
/// must match.
#[must_use]
pub fn match_bfpo(raw: &str) -> Option<BfpoCaptures> {
    let chars: Vec<char> = raw.chars().collect();
    let n = chars.len();

    let mut i = skip_space(&chars, 0);
    i = eat_bfpo_literal(&chars, i)?;
    i = skip_space(&chars, i);

    let care_of = match eat_care_of(&chars, i) {
        Some(j) => {
            i = skip_space(&chars, j);
            true
        }
        None => false,
    };

    let mut number = String::new();
    while i < n && chars[i].is_ascii_digit() && number.len() < 4 {
        number.push(chars[i]);
        i += 1;
    }
    if number.is_empty() || skip_space(&chars, i) != n {
        return None;
    }
    Some(BfpoCaptures { care_of, number })
}

/// Prefix-only dispatch check: optional leading whitespace followed by
/// `BFP` and then `O` or `0`, case-insensitive.
///
/// Deliberately looser than [`match_bfpo`]: `"BFPOx"` still dispatches to
/// the BFPO variant even though its full grammar will not match.
#[must_use]
pub fn has_bfpo_prefix(raw: &str) -> bool {
    let chars: Vec<char> = raw.chars().collect();
    let i = skip_space(&chars, 0);
    eat_bfpo_literal(&chars, i).is_some()
}

// ─── Scanning helpers ───────────────────────────────────────────────────────

/// Smallest index `>= i` that is not separator whitespace.
fn skip_space(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && is_space(chars[i]) {
        i += 1;
    }
    i
}

/// Consume the literal `BFP` + (`O`|`0`) at `i`, case-insensitively.
fn eat_bfpo_literal(chars: &[char], i: usize) -> Option<usize> {
    if i + 4 > chars.len() {
        return None;
    }
    let lit_ok = chars[i].eq_ignore_ascii_case(&'b')
        && chars[i + 1].eq_ignore_ascii_case(&'f')
        && chars[i + 2].eq_ignore_ascii_case(&'p')
        && (chars[i + 3].eq_ignore_ascii_case(&'o') || chars[i + 3] == '0');
    lit_ok.then_some(i + 4)
}

/// Consume the optional `c/o` marker at `i`, case-insensitively.
fn eat_care_of(chars: &[char], i: usize) -> Option<usize> {
    if i + 3 > chars.len() {
        return None;
    }
    let marker_ok = chars[i].eq_ignore_ascii_case(&'c')
        && chars[i + 1] == '/'
        && chars[i + 2].eq_ignore_ascii_case(&'o');
    marker_ok.then_some(i + 3)
}

#[cfg(test)]
mod tests {
    use super::{match_bfpo, match_standard};

    fn caps(raw: &str) -> (String, String, Option<String>, Option<String>) {
        let c = match_standard(raw).unwrap_or_else(|| panic!("'{raw}' should match"));
        (c.area, c.district, c.sector, c.unit)
    }

    #[test]
    fn compact_input_backtracks_to_a_full_split() {
        // "B11AB": the two-character area "B1" leaves no valid district, so
        // the matcher falls back to area "B", district "1", incode "1AB".
        let (area, district, sector, unit) = caps("B11AB");
        assert_eq!(area, "B");
        assert_eq!(district, "1");
        assert_eq!(sector.as_deref(), Some("1"));
        assert_eq!(unit.as_deref(), Some("AB"));
    }

    #[test]
    fn longest_area_and_district_win_when_consistent() {
        let (area, district, sector, unit) = caps("SW1A0AA");
        assert_eq!(area, "SW");
        assert_eq!(district, "1A");
        assert_eq!(sector.as_deref(), Some("0"));
        assert_eq!(unit.as_deref(), Some("AA"));
    }

    #[test]
    fn outcode_only_matches_without_incode_group() {
        let (area, district, sector, unit) = caps(" EH99 ");
        assert_eq!(area, "EH");
        assert_eq!(district, "99");
        assert_eq!(sector, None);
        assert_eq!(unit, None);
    }

    #[test]
    fn partial_matches_are_rejected() {
        assert!(match_standard("W1A 1A").is_none(), "truncated unit");
        assert!(match_standard("W").is_none(), "truncated outcode");
        assert!(match_standard("W1A 1AA junk").is_none(), "trailing garbage");
        assert!(match_standard("").is_none(), "empty input");
    }

    #[test]
    fn bfpo_number_is_capped_at_four_digits() {
        assert!(match_bfpo("BFPO 1234").is_some());
        assert!(match_bfpo("BFPO 12345").is_none());
    }

    #[test]
    fn bfpo_care_of_requires_a_number() {
        assert!(match_bfpo("BFPO c/o").is_none());
        let c = match_bfpo("bfp0 C/O 7").unwrap();
        assert!(c.care_of);
        assert_eq!(c.number, "7");
    }
}
