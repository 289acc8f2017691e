//! JSON serialization helpers for postcode results.
//!
//! [`PostcodeView`] is a flat, serializable projection of a parsed
//! postcode, intended for bindings and diagnostic tooling that want the
//! whole field breakdown in one structure.

use serde::Serialize;

use crate::postcode::UkPostcode;

/// Serializable summary of a parsed postcode.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostcodeView {
    /// Variant name: `"standard"` or `"bfpo"`.
    pub variant: &'static str,
    /// The raw input exactly as supplied.
    pub raw: String,
    /// Whether the outcode is present.
    pub valid: bool,
    /// Whether both outcode and incode are present.
    pub full: bool,
    /// Repaired outcode, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcode: Option<String>,
    /// Repaired incode, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incode: Option<String>,
    /// Repaired area, if present (standard variant only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Repaired district, if present (standard variant only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// Repaired sector, if present (standard variant only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    /// Repaired unit, if present (standard variant only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Canonical rendering; empty when not valid.
    pub normalized: String,
}

impl PostcodeView {
    /// Build a view of `postcode`.
    #[must_use]
    pub fn of(postcode: &UkPostcode) -> Self {
        let own = |s: Option<&str>| s.map(str::to_string);
        Self {
            variant: match postcode {
                UkPostcode::Standard(_) => "standard",
                UkPostcode::BritishForces(_) => "bfpo",
            },
            raw: postcode.as_str().to_string(),
            valid: postcode.is_valid(),
            full: postcode.is_full(),
            outcode: own(postcode.outcode()),
            incode: own(postcode.incode()),
            area: own(postcode.area()),
            district: own(postcode.district()),
            sector: own(postcode.sector()),
            unit: own(postcode.unit()),
            normalized: postcode.normalized(),
        }
    }
}

/// Serialize a postcode's [`PostcodeView`] to a pretty-printed JSON string.
#[must_use]
pub fn to_pretty_json(postcode: &UkPostcode) -> String {
    serde_json::to_string_pretty(&PostcodeView::of(postcode))
        .expect("PostcodeView serialization cannot fail")
}
