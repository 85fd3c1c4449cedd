//! Property tests for materialization.

use std::collections::BTreeMap;

use proptest::prelude::*;

use assetstage::{
    AssetErrorKind, AssetStatus, Manifest, MaterializeOptions, MaterializeUseCase, MemorySource,
};

fn asset_set() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    let name = proptest::string::string_regex("[a-z0-9_-]{1,12}\\.(bin|jpg|ttf)").unwrap();
    let content = proptest::collection::vec(any::<u8>(), 0..3000);
    proptest::collection::btree_map(name, content, 1..8)
}

fn source_from(assets: &BTreeMap<String, Vec<u8>>) -> MemorySource {
    let mut source = MemorySource::new();
    for (name, content) in assets {
        source.insert(name.clone(), content.clone());
    }
    source
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every asset present in the source is materialized byte-for-byte,
    /// whatever the buffer size.
    #[test]
    fn property_round_trip_bytes(
        assets in asset_set(),
        buffer_size in 1usize..10_000
    ) {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::new(assets.keys().cloned()).unwrap();
        let options = MaterializeOptions::new(dir.path()).with_buffer_size(buffer_size);

        let report = MaterializeUseCase::new(source_from(&assets)).execute(&manifest, &options);

        prop_assert!(report.is_complete());
        for (name, content) in &assets {
            let written = std::fs::read(dir.path().join(name)).unwrap();
            prop_assert_eq!(&written, content);
        }
    }

    /// PROPERTY: one missing asset only fails that asset.
    #[test]
    fn property_missing_asset_is_isolated(
        assets in asset_set(),
        pick in any::<prop::sample::Index>()
    ) {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::new(assets.keys().cloned()).unwrap();
        let missing = manifest.names()[pick.index(manifest.len())].to_string();
        let mut source = source_from(&assets);
        source.remove(&missing);

        let report = MaterializeUseCase::new(source)
            .execute(&manifest, &MaterializeOptions::new(dir.path()));

        prop_assert_eq!(report.failed_count(), 1);
        for outcome in report.outcomes() {
            if outcome.name.as_str() == missing {
                prop_assert_eq!(
                    outcome.error().map(|e| e.kind()),
                    Some(AssetErrorKind::SourceUnavailable)
                );
                prop_assert!(!dir.path().join(&missing).exists());
            } else {
                let is_copied = matches!(outcome.status, AssetStatus::Copied { .. });
                prop_assert!(is_copied);
            }
        }
    }

    /// PROPERTY: materializing twice leaves the same contents as once.
    #[test]
    fn property_idempotent(
        assets in asset_set(),
        atomic in any::<bool>()
    ) {
        let dir = tempfile::tempdir().unwrap();
        let manifest = Manifest::new(assets.keys().cloned()).unwrap();
        let options = MaterializeOptions::new(dir.path()).with_atomic_writes(atomic);
        let use_case = MaterializeUseCase::new(source_from(&assets));

        use_case.execute(&manifest, &options);
        let first: Vec<Vec<u8>> = assets
            .keys()
            .map(|n| std::fs::read(dir.path().join(n)).unwrap())
            .collect();
        use_case.execute(&manifest, &options);
        let second: Vec<Vec<u8>> = assets
            .keys()
            .map(|n| std::fs::read(dir.path().join(n)).unwrap())
            .collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), assets.len());
    }
}
