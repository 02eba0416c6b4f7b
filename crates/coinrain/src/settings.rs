//! # Preview Settings
//!
//! One TOML file describing a coin layer:
//!
//! ```toml
//! seed = 42            # omit for OS entropy
//!
//! [generator]
//! count = 20
//! size_min = 14.0
//! size_max = 26.0
//! duration_min = 6.0
//! duration_max = 11.0
//! asset = "/coin.svg"
//!
//! [layer]
//! placement = "behind_content"   # or "above_content"
//! height = 120.0
//! ```

use std::path::Path;

use coinrain_core::{GeneratorConfig, RainError, RainSeed};
use coinrain_ui::{CoinLayer, LayerPlacement, DEFAULT_LAYER_HEIGHT};
use serde::{Deserialize, Serialize};

use crate::error::PreviewResult;

/// Layer section of the settings file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerSettings {
    /// Z-order relative to header content.
    pub placement: LayerPlacement,
    /// Layer height (px).
    pub height: f32,
}

impl Default for LayerSettings {
    fn default() -> Self {
        Self {
            placement: LayerPlacement::default(),
            height: DEFAULT_LAYER_HEIGHT,
        }
    }
}

/// A complete preview description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Fixed seed. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Generator bounds.
    pub generator: GeneratorConfig,
    /// Layer placement and size.
    pub layer: LayerSettings,
}

impl PreviewSettings {
    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns a parse error if the text does not match the schema.
    pub fn from_toml_str(text: &str) -> PreviewResult<Self> {
        toml::from_str(text).map_err(|err| RainError::from(err).into())
    }

    /// Reads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a parse error.
    pub fn from_toml_file(path: impl AsRef<Path>) -> PreviewResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RainError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The configured seed, or a fresh one from the OS.
    #[must_use]
    pub fn seed(&self) -> RainSeed {
        self.seed.map_or_else(RainSeed::from_entropy, RainSeed::new)
    }

    /// Builds the layer these settings describe.
    #[must_use]
    pub fn build_layer(&self) -> CoinLayer {
        CoinLayer::new(self.generator.clone())
            .with_placement(self.layer.placement)
            .with_height(self.layer.height)
    }
}
