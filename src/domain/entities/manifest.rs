//! Asset Manifest Entity
//!
//! The ordered list of assets to materialize.

use std::collections::HashSet;

use crate::domain::value_objects::AssetName;
use crate::error::{StageError, StageResult};

/// Assets bundled with the demo application: a bump map, the six skybox
/// faces and the UI font.
pub const DEFAULT_ASSETS: &[&str] = &[
    "bump.jpg",
    "skybox-negx.jpg",
    "skybox-negy.jpg",
    "skybox-negz.jpg",
    "skybox-posx.jpg",
    "skybox-posy.jpg",
    "skybox-posz.jpg",
    "Roboto-Medium.ttf",
];

/// An ordered, duplicate-free list of asset names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    names: Vec<AssetName>,
}

impl Manifest {
    /// Build a manifest from raw names, validating each one.
    ///
    /// Order is preserved; a repeated name is an error.
    pub fn new<I, S>(names: I) -> StageResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut validated = Vec::new();
        for name in names {
            let name = AssetName::new(name)?;
            if !seen.insert(name.clone()) {
                return Err(StageError::DuplicateAsset {
                    name: name.as_str().to_string(),
                });
            }
            validated.push(name);
        }
        Ok(Self { names: validated })
    }

    /// The built-in manifest
    pub fn builtin() -> Self {
        Self {
            names: DEFAULT_ASSETS
                .iter()
                .map(|n| AssetName::new(*n))
                .collect::<StageResult<Vec<_>>>()
                .unwrap_or_default(),
        }
    }

    pub fn names(&self) -> &[AssetName] {
        &self.names
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssetName> {
        self.names.iter()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a AssetName;
    type IntoIter = std::slice::Iter<'a, AssetName>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
