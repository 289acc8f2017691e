//! Tests for the British Forces (BFPO) postcode variant.

use ukpostcode_core::BfpoPostcode;

#[test]
fn outcode_is_the_fixed_bfpo_literal() {
    assert_eq!(BfpoPostcode::new("BFPO 3").outcode(), Some("BFPO"));
    assert_eq!(BfpoPostcode::new("BFP0 3").outcode(), Some("BFPO"));
}

#[test]
fn incode_is_the_bfpo_number() {
    assert_eq!(BfpoPostcode::new("BFPO 3").incode(), Some("3"));
    assert_eq!(BfpoPostcode::new("BFPO 1234").incode(), Some("1234"));
}

#[test]
fn incode_includes_the_care_of_marker() {
    assert_eq!(BfpoPostcode::new("BFPO c/o 3").incode(), Some("c/o 3"));
}

#[test]
fn missing_number_yields_no_fields() {
    let postcode = BfpoPostcode::new("BFPO");
    assert_eq!(postcode.incode(), None);
    assert!(!postcode.is_full());
    let postcode = BfpoPostcode::new("BFPO c/o");
    assert_eq!(postcode.incode(), None);
    assert!(!postcode.is_valid());
}

#[test]
fn structural_fields_are_always_absent() {
    use ukpostcode_core::UkPostcode;

    let postcode = UkPostcode::parse("BFPO 3");
    assert_eq!(postcode.area(), None);
    assert_eq!(postcode.district(), None);
    assert_eq!(postcode.sector(), None);
    assert_eq!(postcode.unit(), None);
}

#[test]
fn validity_requires_a_full_grammar_match() {
    let postcode = BfpoPostcode::new("BFPO 3");
    assert!(postcode.is_valid());
    assert!(postcode.is_full());

    let postcode = BfpoPostcode::new("foo");
    assert!(!postcode.is_valid());
    assert!(!postcode.is_full());
    assert_eq!(postcode.normalized(), "");
}

#[test]
fn number_is_capped_at_four_digits() {
    assert!(BfpoPostcode::new("BFPO 12345").incode().is_none());
    assert_eq!(BfpoPostcode::new("BFPO 0007").incode(), Some("0007"));
}

#[test]
fn normalization_repairs_case_and_spacing() {
    assert_eq!(
        BfpoPostcode::new("  bfpo  C/O  3 ").normalized(),
        "BFPO c/o 3"
    );
    assert_eq!(BfpoPostcode::new("bfp0 43").normalized(), "BFPO 43");
}

#[test]
fn raw_input_is_returned_verbatim() {
    for sample in ["BFPO 3", "  bfpo  C/O  3 ", "foo"] {
        let postcode = BfpoPostcode::new(sample);
        assert_eq!(postcode.as_str(), sample);
        assert_eq!(postcode.to_string(), sample);
    }
}

#[test]
fn debug_renders_type_name_and_raw_input() {
    let postcode = BfpoPostcode::new("BFPO 3");
    assert_eq!(format!("{postcode:?}"), "<BfpoPostcode BFPO 3>");
}
