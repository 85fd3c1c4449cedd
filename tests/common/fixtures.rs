//! Reusable test content.

/// Manifest config naming two assets, only one of which is usually bundled
pub const TWO_ASSET_CONFIG: &str = r#"
[manifest]
assets = ["a.txt", "b.txt"]
"#;

/// Deterministic binary payload of `len` bytes
pub fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 % 256) as u8).collect()
}
