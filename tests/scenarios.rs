//! End-to-end decode scenarios covering the fast path, ambiguity
//! reconstruction, and check-digit failure handling.

use gs1_decode::{decode, DecodeOptions, DiagnosticTag, TypedValue};

fn ai_values(result: &gs1_decode::DecodeResult) -> Vec<(String, String)> {
    result
        .elements
        .iter()
        .map(|e| (e.ai.clone(), e.raw_value.clone()))
        .collect()
}

fn assert_common_invariants(result: &gs1_decode::DecodeResult, input: &str) {
    assert!((0.0..=1.0).contains(&result.confidence));
    let expected_normalized = input
        .strip_prefix("]d2")
        .or_else(|| input.strip_prefix("]C1"))
        .or_else(|| input.strip_prefix("]e0"))
        .or_else(|| input.strip_prefix("]e1"))
        .or_else(|| input.strip_prefix("]e2"))
        .or_else(|| input.strip_prefix("]Q3"))
        .unwrap_or(input)
        .replace("<GS>", "\u{1D}");
    assert_eq!(result.normalized, expected_normalized);
}

#[test]
fn s1_canonical_pharma_order() {
    let input = "01062867400002491728043010GB2C2171490437969853";
    let result = decode(input, DecodeOptions::default());
    assert_common_invariants(&result, input);
    assert_eq!(
        ai_values(&result),
        vec![
            ("01".to_owned(), "06286740000249".to_owned()),
            ("17".to_owned(), "280430".to_owned()),
            ("10".to_owned(), "GB2C".to_owned()),
            ("21".to_owned(), "71490437969853".to_owned()),
        ]
    );
    assert!(result.elements[0].valid, "GTIN mod-10 should pass");
    assert!(result.confidence >= 0.8);
}

#[test]
fn s2_short_lot_code() {
    let input = "01062850960028771726033110HN8X2172869453519267";
    let result = decode(input, DecodeOptions::default());
    assert_common_invariants(&result, input);
    assert_eq!(
        ai_values(&result),
        vec![
            ("01".to_owned(), "06285096002877".to_owned()),
            ("17".to_owned(), "260331".to_owned()),
            ("10".to_owned(), "HN8X".to_owned()),
            ("21".to_owned(), "72869453519267".to_owned()),
        ]
    );
}

#[test]
fn s3_embedded_date_before_lot() {
    let input = "01062911037315552164SSI54CE688QZ1727021410C601";
    let result = decode(input, DecodeOptions::default());
    assert_common_invariants(&result, input);
    assert_eq!(
        ai_values(&result),
        vec![
            ("01".to_owned(), "06291103731555".to_owned()),
            ("21".to_owned(), "64SSI54CE688QZ".to_owned()),
            ("17".to_owned(), "270214".to_owned()),
            ("10".to_owned(), "C601".to_owned()),
        ]
    );
}

#[test]
fn s4_trailing_digits_absorbed_into_serial() {
    let input = "010622300001036517270903103056442130564439945626";
    let result = decode(input, DecodeOptions::default());
    assert_common_invariants(&result, input);
    assert_eq!(
        ai_values(&result),
        vec![
            ("01".to_owned(), "06223000010365".to_owned()),
            ("17".to_owned(), "270903".to_owned()),
            ("10".to_owned(), "305644".to_owned()),
            ("21".to_owned(), "30564439945626".to_owned()),
        ]
    );
    // No element should be a spurious Internal-range AI (90-99).
    assert!(!result.elements.iter().any(|e| matches!(e.ai.as_str(), "90"..="99")));
}

#[test]
fn s5_legacy_day_unspecified_date() {
    let input = "010625115902606717290400104562202106902409792902";
    let result = decode(input, DecodeOptions::default());
    assert_common_invariants(&result, input);
    assert_eq!(
        ai_values(&result),
        vec![
            ("01".to_owned(), "06251159026067".to_owned()),
            ("17".to_owned(), "290400".to_owned()),
            ("10".to_owned(), "456220".to_owned()),
            ("21".to_owned(), "06902409792902".to_owned()),
        ]
    );
    let date_element = result.elements.iter().find(|e| e.ai == "17").unwrap();
    assert!(matches!(
        date_element.typed_value,
        TypedValue::Date { day_unspecified: true, .. }
    ));
}

#[test]
fn s6_symbology_prefix_and_separator_with_failed_check_digit() {
    let input = "]d2010611800002210021SERIAL123<GS>17270301";
    let result = decode(input, DecodeOptions::default());
    assert_common_invariants(&result, input);
    assert_eq!(result.symbology.as_deref(), Some("GS1 DataMatrix"));
    assert!(result.separators_present);
    assert_eq!(
        ai_values(&result),
        vec![
            ("01".to_owned(), "06118000022100".to_owned()),
            ("21".to_owned(), "SERIAL123".to_owned()),
            ("17".to_owned(), "270301".to_owned()),
        ]
    );
    let gtin = &result.elements[0];
    assert!(!gtin.valid);
    assert!(gtin.errors.contains(&DiagnosticTag::InvalidCheckDigit));
}
