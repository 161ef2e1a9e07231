//! Property tests for `%name%` parameter expansion.

use std::collections::BTreeMap;

use proptest::prelude::*;

use assetpack::config::expand_parameters;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: text without `%` is returned unchanged.
    #[test]
    fn property_plain_text_is_unchanged(value in "[^%]{0,64}") {
        prop_assert_eq!(expand_parameters(&value, &BTreeMap::new()).unwrap(), value);
    }

    /// PROPERTY: a defined parameter is substituted wherever it appears.
    #[test]
    fn property_defined_parameter_is_substituted(
        prefix in "[a-z/]{0,10}",
        suffix in "[a-z/.]{0,10}",
        replacement in "[A-Za-z0-9/]{0,16}",
    ) {
        let parameters = BTreeMap::from([("wwwDir".to_string(), replacement.clone())]);
        let value = format!("{prefix}%wwwDir%{suffix}");

        prop_assert_eq!(
            expand_parameters(&value, &parameters).unwrap(),
            format!("{prefix}{replacement}{suffix}")
        );
    }

    /// PROPERTY: expansion never panics on arbitrary input.
    #[test]
    fn property_expansion_never_panics(value in "(?s).{0,128}") {
        let parameters = BTreeMap::from([("a".to_string(), "x".to_string())]);
        let _ = expand_parameters(&value, &parameters);
    }
}
