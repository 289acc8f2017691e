//! UK postcode toolchain core library.
//!
//! Provides parsing, validation, and normalization of United Kingdom
//! postcodes, including the British Forces Post Office (BFPO) format.
//! The main entry point is [`UkPostcode::parse`], which dispatches to the
//! appropriate variant; [`dump::to_pretty_json`] renders a serializable
//! field breakdown.
//!
//! Malformed input is never an error: accessors return `None` and
//! normalization returns the empty string. Repair of common transcription
//! noise (OCR confusions, shift-key slips, spacing, case) is applied
//! field-by-field after grammar matching.

#![warn(missing_docs)]

/// Postcode grammar: character classes and matchers.
pub mod grammar;
/// Postcode value types and the variant dispatcher.
pub mod postcode;
/// JSON serialization helpers for postcode results.
pub mod dump;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Value types and dispatcher
pub use postcode::{BfpoPostcode, StandardPostcode, UkPostcode};

// Matchers
pub use grammar::matcher::{BfpoCaptures, StandardCaptures, match_bfpo, match_standard};

// Serialization helpers
pub use dump::{PostcodeView, to_pretty_json};
