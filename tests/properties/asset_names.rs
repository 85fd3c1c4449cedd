//! Property tests for asset name validation.

use proptest::prelude::*;

use assetstage::AssetName;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation never panics on arbitrary input.
    #[test]
    fn property_validation_never_panics(
        s in "(?s).{0,128}"
    ) {
        let _ = AssetName::new(s);
    }

    /// PROPERTY: an accepted name never escapes the target directory.
    #[test]
    fn property_accepted_names_stay_inside(
        s in "[A-Za-z0-9./_-]{0,48}"
    ) {
        if let Ok(name) = AssetName::new(s) {
            let root = std::path::Path::new("/target");
            let joined = root.join(name.as_path());
            prop_assert!(joined.starts_with(root));
            prop_assert!(!name
                .as_path()
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir)));
        }
    }
}
