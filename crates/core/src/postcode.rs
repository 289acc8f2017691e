//! Postcode value types and the variant dispatcher.
//!
//! A [`UkPostcode`] wraps the raw input string exactly as supplied and
//! projects repaired fields out of a single, lazily-computed grammar match.
//! Malformed input never fails construction: every accessor simply returns
//! `None` and [`normalized`](UkPostcode::normalized) returns the empty
//! string.

use std::fmt;
use std::sync::OnceLock;

use crate::grammar::matcher::{self, BfpoCaptures, StandardCaptures};
use ukpostcode_charfix::{repair_digits, repair_letters};

// ─── Dispatcher ─────────────────────────────────────────────────────────────

/// A UK postcode, either standard or British Forces (BFPO).
///
/// Construct via [`UkPostcode::parse`], which inspects the input prefix to
/// select the variant. All accessors delegate to the variant.
#[derive(Clone)]
pub enum UkPostcode {
    /// A standard postcode, e.g. `W1A 1AA`.
    Standard(StandardPostcode),
    /// A British Forces postcode, e.g. `BFPO 43`.
    BritishForces(BfpoPostcode),
}

impl UkPostcode {
    /// Parse a raw string into the appropriate postcode variant.
    ///
    /// Any input whose prefix is optional whitespace followed by `BFP` and
    /// `O` or `0` (case-insensitive) becomes a [`BfpoPostcode`]; everything
    /// else becomes a [`StandardPostcode`]. The prefix check is looser than
    /// the BFPO grammar, so a BFPO-prefixed string that fails the full
    /// grammar still yields an (invalid) BFPO instance.
    #[must_use]
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if matcher::has_bfpo_prefix(&raw) {
            Self::BritishForces(BfpoPostcode::new(raw))
        } else {
            Self::Standard(StandardPostcode::new(raw))
        }
    }

    /// True iff the outcode is present.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Standard(p) => p.is_valid(),
            Self::BritishForces(p) => p.is_valid(),
        }
    }

    /// True iff both outcode and incode are present.
    #[must_use]
    pub fn is_full(&self) -> bool {
        match self {
            Self::Standard(p) => p.is_full(),
            Self::BritishForces(p) => p.is_full(),
        }
    }

    /// The left-hand part of the postcode, e.g. `W1A 1AA` -> `W1A`.
    #[must_use]
    pub fn outcode(&self) -> Option<&str> {
        match self {
            Self::Standard(p) => p.outcode(),
            Self::BritishForces(p) => p.outcode(),
        }
    }

    /// The right-hand part of the postcode, e.g. `W1A 1AA` -> `1AA`.
    #[must_use]
    pub fn incode(&self) -> Option<&str> {
        match self {
            Self::Standard(p) => p.incode(),
            Self::BritishForces(p) => p.incode(),
        }
    }

    /// The first part of the outcode, e.g. `W1A 2AB` -> `W`. Always absent
    /// for BFPO postcodes.
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        match self {
            Self::Standard(p) => p.area(),
            Self::BritishForces(_) => None,
        }
    }

    /// The second part of the outcode, e.g. `W1A 2AB` -> `1A`. Always
    /// absent for BFPO postcodes.
    #[must_use]
    pub fn district(&self) -> Option<&str> {
        match self {
            Self::Standard(p) => p.district(),
            Self::BritishForces(_) => None,
        }
    }

    /// The first part of the incode, e.g. `W1A 2AB` -> `2`. Always absent
    /// for BFPO postcodes.
    #[must_use]
    pub fn sector(&self) -> Option<&str> {
        match self {
            Self::Standard(p) => p.sector(),
            Self::BritishForces(_) => None,
        }
    }

    /// The second part of the incode, e.g. `W1A 2AB` -> `AB`. Always
    /// absent for BFPO postcodes.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::Standard(p) => p.unit(),
            Self::BritishForces(_) => None,
        }
    }

    /// Render the postcode in canonical form: upper case, repaired, with a
    /// single space between outcode and incode. Empty iff the postcode is
    /// not valid. Idempotent.
    #[must_use]
    pub fn normalized(&self) -> String {
        match self {
            Self::Standard(p) => p.normalized(),
            Self::BritishForces(p) => p.normalized(),
        }
    }

    /// The raw input exactly as supplied, byte-for-byte.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard(p) => p.as_str(),
            Self::BritishForces(p) => p.as_str(),
        }
    }
}

impl fmt::Display for UkPostcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for UkPostcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Render as the variant's `<TypeName raw>` diagnostic form.
        match self {
            Self::Standard(p) => fmt::Debug::fmt(p, f),
            Self::BritishForces(p) => fmt::Debug::fmt(p, f),
        }
    }
}

// ─── Standard variant ───────────────────────────────────────────────────────

/// Repaired fields of a matched standard postcode.
///
/// The outcode/incode concatenations are materialized here so that every
/// accessor can hand out a borrowed `&str`.
#[derive(Debug, Clone)]
struct StandardFields {
    area: String,
    district: String,
    sector: Option<String>,
    unit: Option<String>,
    outcode: String,
    incode: Option<String>,
}

impl StandardFields {
    fn repair(caps: StandardCaptures) -> Self {
        let area = repair_letters(&caps.area);
        let district = repair_digits(&caps.district);
        let sector = caps.sector.as_deref().map(repair_digits);
        let unit = caps.unit.as_deref().map(repair_letters);
        let outcode = format!("{area}{district}");
        let incode = match (&sector, &unit) {
            (Some(s), Some(u)) => Some(format!("{s}{u}")),
            _ => None,
        };
        Self {
            area,
            district,
            sector,
            unit,
            outcode,
            incode,
        }
    }
}

/// A standard-format UK postcode, e.g. `W1A 1AA` or the outcode `W1A`.
#[derive(Clone)]
pub struct StandardPostcode {
    raw: String,
    // Lazily populated on first field access; OnceLock serializes
    // concurrent first computation. The raw string never changes, so the
    // computed value is invariant.
    fields: OnceLock<Option<StandardFields>>,
}

impl StandardPostcode {
    /// Wrap a raw postcode string. Construction never fails; validity is
    /// reported by [`is_valid`](Self::is_valid).
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            fields: OnceLock::new(),
        }
    }

    fn fields(&self) -> Option<&StandardFields> {
        self.fields
            .get_or_init(|| matcher::match_standard(&self.raw).map(StandardFields::repair))
            .as_ref()
    }

    /// True iff the outcode is present.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outcode().is_some()
    }

    /// True iff both outcode and incode are present.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.outcode().is_some() && self.incode().is_some()
    }

    /// The left-hand part of the postcode, e.g. `W1A 1AA` -> `W1A`.
    #[must_use]
    pub fn outcode(&self) -> Option<&str> {
        self.fields().map(|f| f.outcode.as_str())
    }

    /// The right-hand part of the postcode, e.g. `W1A 1AA` -> `1AA`.
    #[must_use]
    pub fn incode(&self) -> Option<&str> {
        self.fields().and_then(|f| f.incode.as_deref())
    }

    /// The first part of the outcode, e.g. `W1A 2AB` -> `W`.
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        self.fields().map(|f| f.area.as_str())
    }

    /// The second part of the outcode, e.g. `W1A 2AB` -> `1A`.
    #[must_use]
    pub fn district(&self) -> Option<&str> {
        self.fields().map(|f| f.district.as_str())
    }

    /// The first part of the incode, e.g. `W1A 2AB` -> `2`.
    #[must_use]
    pub fn sector(&self) -> Option<&str> {
        self.fields().and_then(|f| f.sector.as_deref())
    }

    /// The second part of the incode, e.g. `W1A 2AB` -> `AB`.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.fields().and_then(|f| f.unit.as_deref())
    }

    /// Canonical rendering: `outcode`, or `outcode + " " + incode`. Empty
    /// iff not valid.
    #[must_use]
    pub fn normalized(&self) -> String {
        join_normalized(self.outcode(), self.incode())
    }

    /// The raw input exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for StandardPostcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl fmt::Debug for StandardPostcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<StandardPostcode {}>", self.raw)
    }
}

// ─── BFPO variant ───────────────────────────────────────────────────────────

/// Repaired fields of a matched BFPO postcode. The outcode is always the
/// fixed literal `BFPO`; only the incode varies.
#[derive(Debug, Clone)]
struct BfpoFields {
    incode: Option<String>,
}

impl BfpoFields {
    fn from_captures(caps: BfpoCaptures) -> Self {
        let incode = if caps.care_of {
            format!("c/o {}", caps.number)
        } else {
            caps.number
        };
        // Empty coerces to absent; the grammar requires at least one digit,
        // so this is a contract guard rather than a reachable state.
        Self {
            incode: (!incode.is_empty()).then_some(incode),
        }
    }
}

/// A British Forces Post Office postcode, e.g. `BFPO 43` or `BFPO c/o 12`.
#[derive(Clone)]
pub struct BfpoPostcode {
    raw: String,
    fields: OnceLock<Option<BfpoFields>>,
}

impl BfpoPostcode {
    /// Wrap a raw BFPO postcode string. Construction never fails; validity
    /// is reported by [`is_valid`](Self::is_valid).
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            fields: OnceLock::new(),
        }
    }

    fn fields(&self) -> Option<&BfpoFields> {
        self.fields
            .get_or_init(|| matcher::match_bfpo(&self.raw).map(BfpoFields::from_captures))
            .as_ref()
    }

    /// True iff the outcode is present.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.outcode().is_some()
    }

    /// True iff both outcode and incode are present.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.outcode().is_some() && self.incode().is_some()
    }

    /// `"BFPO"` when the full grammar matched, otherwise absent.
    #[must_use]
    pub fn outcode(&self) -> Option<&str> {
        self.fields().map(|_| "BFPO")
    }

    /// The BFPO number, prefixed with `c/o ` when the marker was present.
    /// Rendered in lower case.
    #[must_use]
    pub fn incode(&self) -> Option<&str> {
        self.fields().and_then(|f| f.incode.as_deref())
    }

    /// Canonical rendering, e.g. `BFPO c/o 3`. Empty iff not valid.
    #[must_use]
    pub fn normalized(&self) -> String {
        join_normalized(self.outcode(), self.incode())
    }

    /// The raw input exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for BfpoPostcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl fmt::Debug for BfpoPostcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<BfpoPostcode {}>", self.raw)
    }
}

// ─── Shared rendering ───────────────────────────────────────────────────────

/// Compose the canonical form from optional outcode/incode parts.
fn join_normalized(outcode: Option<&str>, incode: Option<&str>) -> String {
    match (outcode, incode) {
        (Some(out), Some(inc)) => format!("{out} {inc}"),
        (Some(out), None) => out.to_string(),
        (None, _) => String::new(),
    }
}
