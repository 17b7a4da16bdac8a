//! Property-based tests for CDMI format primitives

use cdmi_format::constants::SYSMD_ID_SIZE;
use cdmi_format::scalar::parse_u64_auto;
use cdmi_format::{Dict, FileType, FixedId, Value};
use proptest::prelude::*;

proptest! {
    #[test]
    fn parse_u64_auto_decimal_property(value in any::<u64>()) {
        prop_assert_eq!(parse_u64_auto(&value.to_string()), value);
    }

    #[test]
    fn parse_u64_auto_hex_property(value in any::<u64>()) {
        let text = format!("0x{:x}", value);
        prop_assert_eq!(parse_u64_auto(&text), value);
    }

    #[test]
    fn parse_u64_auto_octal_property(value in 1u64..u64::MAX) {
        let text = format!("0{:o}", value);
        prop_assert_eq!(parse_u64_auto(&text), value);
    }

    #[test]
    fn parse_u64_auto_ignores_suffix_property(
        value in any::<u64>(),
        suffix in "[a-wyzA-WYZ. ][a-zA-Z0-9. ]{0,8}",
    ) {
        let text = format!("{}{}", value, suffix);
        prop_assert_eq!(parse_u64_auto(&text), value);
    }

    #[test]
    fn fixed_id_is_prefix_of_source_property(text in "\\PC{0,100}") {
        let id = FixedId::new(&text);
        prop_assert!(id.as_str().len() <= SYSMD_ID_SIZE);
        prop_assert!(text.starts_with(id.as_str()));
        if text.len() <= SYSMD_ID_SIZE {
            prop_assert_eq!(id.as_str(), text.as_str());
        }
    }

    #[test]
    fn get_lowered_finds_any_casing_property(key in "[a-zA-Z_]{1,16}") {
        let mut dict = Dict::new();
        dict.add(key.as_str(), "v").unwrap();

        prop_assert!(dict.get_lowered(&key.to_ascii_lowercase()).is_ok());
        prop_assert!(dict.get_lowered(&key.to_ascii_uppercase()).is_ok());
    }

    #[test]
    fn filter_prefix_only_keeps_prefixed_keys_property(
        keys in prop::collection::hash_set("[A-Za-z-]{1,12}", 0..20),
        prefixed in prop::collection::hash_set("[A-Za-z]{1,12}", 0..20),
    ) {
        let prefix = "X-Object-Meta-";
        let mut headers = Dict::new();
        for key in &keys {
            headers.add(key.as_str(), "plain").unwrap();
        }
        for key in &prefixed {
            headers.add(format!("{}{}", prefix, key), key).unwrap();
        }

        let filtered = headers.filter_prefix(prefix).unwrap();
        for key in &prefixed {
            prop_assert_eq!(filtered.get_value(key), Some(&Value::from(key.as_str())));
        }
        for (key, var) in filtered.iter() {
            let original = headers.get_value(&format!("{}{}", prefix, key));
            prop_assert_eq!(original, Some(&var.value));
        }
    }

    #[test]
    fn unknown_content_types_are_undefined_property(text in "[a-z/+-]{0,40}") {
        let ftype = FileType::from_content_type(&text);
        match ftype.content_type() {
            Some(content_type) => prop_assert_eq!(content_type, text.as_str()),
            None => prop_assert_eq!(ftype, FileType::Undefined),
        }
    }
}
