// Round-trip and fixture-driven tests for parsing and serialization
use mozprefs::{parse, Pref, PrefFlags, PrefMap};
use std::collections::HashMap;

/// Serialize, re-parse and compare, also checking the reported byte count
fn check_round_trip(prefs: &PrefMap) {
    let mut buf = Vec::new();

    let n = prefs.write_to(&mut buf).expect("serialization failed");
    assert_eq!(n, buf.len() as u64);

    let parsed = parse(&buf).expect("re-parse failed");
    assert_eq!(&parsed, prefs);
}

fn pref_map(entries: &[(&str, Pref)]) -> PrefMap {
    entries
        .iter()
        .map(|(name, pref)| (name.to_string(), pref.clone()))
        .collect()
}

#[test]
fn test_round_trip_value_kinds_and_flags() {
    let prefs = pref_map(&[
        ("val-false", Pref::new(false)),
        ("val-true", Pref::new(true)),
        ("val-sticky", Pref::with_flags(900, PrefFlags::STICKY)),
        ("val-locked", Pref::with_flags("Hello", PrefFlags::LOCKED)),
        (
            "val-sticky-locked",
            Pref::with_flags("World", PrefFlags::LOCKED | PrefFlags::STICKY),
        ),
        (
            "val-user",
            Pref::with_flags(1, PrefFlags::USER_PREF),
        ),
        ("val-negative", Pref::new(-123)),
        ("val-int", Pref::new(1 << 15)),
    ]);

    check_round_trip(&prefs);
}

#[test]
fn test_round_trip_empty_map() {
    check_round_trip(&PrefMap::new());
}

#[test]
fn test_round_trip_i32_boundaries() {
    let prefs = pref_map(&[
        ("min", Pref::new(i32::MIN)),
        ("max", Pref::new(i32::MAX)),
        ("zero", Pref::new(0)),
    ]);

    check_round_trip(&prefs);
}

#[test]
fn test_round_trip_awkward_strings() {
    let prefs = pref_map(&[
        ("empty", Pref::new("")),
        ("quotes", Pref::new("say \"hi\" and 'bye'")),
        ("backslashes", Pref::new("C:\\path\\to\\file")),
        ("controls", Pref::new("tab\there\nnewline\rcr\x08\x0c\x00")),
        ("unicode", Pref::new("snowman \u{2603} emoji \u{1f600}")),
        ("commas", Pref::new("pref(\"fake\", 1, sticky);")),
    ]);

    check_round_trip(&prefs);
}

#[test]
fn test_round_trip_names_needing_escapes() {
    let prefs = pref_map(&[
        ("name with \"quotes\"", Pref::new(1)),
        ("name\\with\\backslashes", Pref::new(2)),
    ]);

    check_round_trip(&prefs);
}

// Expected parser output can be described as a JSON object mapping names to
// {"value": ..., "flags": N}, the same shape external fixtures use.
fn expected_from_json(fixture: &str) -> PrefMap {
    let decoded: HashMap<String, Pref> =
        serde_json::from_str(fixture).expect("invalid fixture JSON");
    decoded.into_iter().collect()
}

#[test]
fn test_parse_matches_json_fixture() {
    let input = br#"
        // Defaults
        pref("app.update.auto", false);
        pref("browser.display.use_document_fonts", 1, sticky);
        user_pref("browser.startup.homepage", "about:blank", locked);
    "#;

    let expected = expected_from_json(
        r#"{
            "app.update.auto": {"value": false, "flags": 0},
            "browser.display.use_document_fonts": {"value": 1, "flags": 1},
            "browser.startup.homepage": {"value": "about:blank", "flags": 6}
        }"#,
    );

    let prefs = parse(input).expect("parse failed");
    assert_eq!(prefs, expected);

    check_round_trip(&prefs);
}

#[test]
fn test_parse_fixture_with_escapes() {
    let input = br#"user_pref("path", "C:\\Users\\test\r\n\x41\u00e9");"#;

    let expected = expected_from_json(
        r#"{"path": {"value": "C:\\Users\\test\r\nA\u00e9", "flags": 4}}"#,
    );

    let prefs = parse(input).expect("parse failed");
    assert_eq!(prefs, expected);

    check_round_trip(&prefs);
}

#[test]
fn test_untyped_conversion_round_trip() {
    let mut values = serde_json::Map::new();
    values.insert("Hello".to_string(), "World".into());
    values.insert("test".to_string(), false.into());
    values.insert("port".to_string(), 8080.into());

    let prefs = PrefMap::from_values(values.clone(), PrefFlags::STICKY);

    for pref in prefs.values() {
        assert_eq!(pref.flags, PrefFlags::STICKY);
    }
    assert_eq!(prefs.to_values(), values);

    check_round_trip(&prefs);
}
