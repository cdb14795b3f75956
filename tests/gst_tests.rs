#![cfg(feature = "gst")]

use storefront::core::{GstStateMapping, StateEntry};
use storefront::gst::*;

// ---------------------------------------------------------------------------
// Resolution against the built-in tables
// ---------------------------------------------------------------------------

#[test]
fn delhi_end_to_end() {
    let r = resolve("07AAAAA0000A1Z5");
    assert_eq!(r.normalized, "07AAAAA0000A1Z5");
    assert_eq!(r.state, "Delhi");
    assert_eq!(r.state_code, "DL");
    assert_eq!(r.error, None);
}

#[test]
fn common_states() {
    let cases = [
        ("27AAPFU0939F1ZV", "Maharashtra", "MH"),
        ("29ABCDE1234F1Z5", "Karnataka", "KA"),
        ("33ABCDE1234F1Z5", "Tamil Nadu", "TN"),
        ("36ABCDE1234F1Z5", "Telangana", "TG"),
        ("37ABCDE1234F1Z5", "Andhra Pradesh", "AP"),
        ("19ABCDE1234F1Z5", "West Bengal", "WB"),
        ("26ABCDE1234F1Z5", "Dadra and Nagar Haveli and Daman and Diu", "DH"),
    ];
    for (gst, state, code) in cases {
        let r = resolve(gst);
        assert_eq!(r.state, state, "{gst}");
        assert_eq!(r.state_code, code, "{gst}");
    }
}

#[test]
fn empty_input() {
    let r = resolve("");
    assert_eq!(r.normalized, "");
    assert_eq!(r.state, "");
    assert_eq!(r.state_code, "");
    assert_eq!(r.error, None);
}

#[test]
fn reserved_prefix_precedes_format() {
    // Well-formed but reserved.
    assert_eq!(resolve("97AAAAA0000A1Z5").error, Some(GstError::ReservedPrefix));
    // Malformed and reserved: still reported as reserved.
    assert_eq!(resolve("99").error, Some(GstError::ReservedPrefix));
    assert_eq!(resolve("99zzzz").error, Some(GstError::ReservedPrefix));
}

#[test]
fn invalid_format_clears_state() {
    for raw in ["0", "07", "07AAAAA0000A1Z", "AAAAAAA0000A1Z5", "07AAAAA0000A1X5"] {
        let r = resolve(raw);
        assert_eq!(r.error, Some(GstError::InvalidFormat), "{raw}");
        assert!(r.state.is_empty());
        assert!(r.state_code.is_empty());
    }
}

#[test]
fn truncation_happens_before_validation() {
    let long = resolve("07AAAAA0000A1Z5EXTRA");
    let short = resolve("07AAAAA0000A1Z5");
    assert_eq!(long, short);
}

#[test]
fn sentinel_prefixes() {
    for raw in ["25AAAAA0000A1Z5", "28AAAAA0000A1Z5"] {
        let r = resolve(raw);
        assert_eq!(r.state, "-");
        assert_eq!(r.state_code, "");
        assert_eq!(r.error, None);
    }
}

// ---------------------------------------------------------------------------
// Custom tables
// ---------------------------------------------------------------------------

static STATES: &[StateEntry] = &[
    StateEntry::new("DL", "Delhi"),
    StateEntry::new("GA", "Goa"),
];

static CODES: &[GstStateMapping] = &[
    ("07", "Delhi"),
    ("30", "Goa"),
    ("31", "-"),
    ("32", "Kerala"),
];

#[test]
fn custom_tables() {
    let resolver = GstResolver::new(STATES, CODES);
    let r = resolver.resolve("30ABCDE1234F1Z5");
    assert_eq!((r.state.as_str(), r.state_code.as_str()), ("Goa", "GA"));

    let r = resolver.resolve("31ABCDE1234F1Z5");
    assert_eq!((r.state.as_str(), r.state_code.as_str()), ("-", ""));
}

#[test]
fn custom_table_inconsistency_is_silent() {
    let resolver = GstResolver::new(STATES, CODES);
    // "32" maps to Kerala, which is not in STATES.
    let r = resolver.resolve("32ABCDE1234F1Z5");
    assert_eq!(r.error, None);
    assert_eq!(r.state, "");
    assert_eq!(r.state_code, "");
    // "27" is not mapped at all.
    let r = resolver.resolve("27AAPFU0939F1ZV");
    assert_eq!(r.error, None);
    assert_eq!(r.state, "");
}

#[test]
fn default_resolver_matches_free_function() {
    let resolver = GstResolver::default();
    for raw in ["", "07AAAAA0000A1Z5", "99", "27aapfu0939f1zv", "xx"] {
        assert_eq!(resolver.resolve(raw), resolve(raw));
    }
}

// ---------------------------------------------------------------------------
// GstCode
// ---------------------------------------------------------------------------

#[test]
fn gst_code_parse() {
    let code: GstCode = " 07AAAAA0000A1Z5".trim().parse().unwrap();
    assert_eq!(code.state_prefix(), "07");
    assert_eq!(code.as_str(), "07AAAAA0000A1Z5");
    assert_eq!(code.to_string(), "07AAAAA0000A1Z5");
    assert!("07AAAAA0000A1Z".parse::<GstCode>().is_err());
}

#[test]
fn error_display_snapshot() {
    insta::assert_snapshot!(GstError::ReservedPrefix.to_string(), @"Please enter a GST number for a different state");
    insta::assert_snapshot!(GstError::InvalidFormat.to_string(), @"Invalid GST Number format");
}

#[test]
fn resolution_serializes() {
    let json = serde_json::to_value(resolve("99")).unwrap();
    assert_eq!(json["normalized"], "99");
    assert_eq!(json["error"], "ReservedPrefix");
    let json = serde_json::to_value(resolve("07AAAAA0000A1Z5")).unwrap();
    assert!(json["error"].is_null());
}
