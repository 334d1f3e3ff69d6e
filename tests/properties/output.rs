//! Property tests for provisioning output validation.

use proptest::prelude::*;

use shipit::domain::services::{validate_json, validate_raw};

fn value() -> impl Strategy<Value = String> {
    // No leading "Warning:" and no surrounding whitespace
    proptest::string::string_regex("[A-Za-z0-9][A-Za-z0-9:/._-]{0,40}")
        .unwrap()
        .prop_filter("not a warning", |s| !s.starts_with("Warning:"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Raw answers are trimmed and otherwise untouched.
    #[test]
    fn property_raw_trims_padding(
        v in value(),
        before in "[ \t\n]{0,4}",
        after in "[ \t\n]{0,4}",
    ) {
        let text = format!("{before}{v}{after}");
        let out = validate_raw("api_url", &text, false).unwrap();
        prop_assert_eq!(out.value, v);
    }

    /// PROPERTY: A JSON-encoded string decodes to the string itself.
    #[test]
    fn property_json_string_decodes(v in value()) {
        let text = format!("{}\n", serde_json::to_string(&v).unwrap());
        let out = validate_json("frontend_bucket_name", &text, false).unwrap();
        prop_assert_eq!(out.value, v);
    }

    /// PROPERTY: Validators never panic, and an accepted required value is never empty.
    #[test]
    fn property_validators_never_panic(text in ".{0,120}", allow_empty in any::<bool>()) {
        for result in [
            validate_raw("x", &text, allow_empty),
            validate_json("x", &text, allow_empty),
        ] {
            if let Ok(out) = result {
                prop_assert!(allow_empty || !out.value.is_empty());
            }
        }
    }
}
