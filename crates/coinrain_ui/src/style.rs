//! Style binding for DOM hosts.
//!
//! Each coin is a `<span class="coin">` whose stylesheet reads the custom
//! properties below. The layer itself is an absolutely positioned,
//! non-interactive overlay on its parent.

use coinrain_core::ParticleDescriptor;
use serde::{Deserialize, Serialize};

/// Where the coin layer sits relative to the header content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerPlacement {
    /// Above the background, below header text and buttons.
    #[default]
    BehindContent,
    /// Over the header content.
    AboveContent,
}

impl LayerPlacement {
    /// CSS `z-index` for this placement.
    #[must_use]
    pub const fn z_index(self) -> i32 {
        match self {
            Self::BehindContent => 1,
            Self::AboveContent => 10,
        }
    }
}

/// Inline style of the layer container.
#[must_use]
pub fn layer_style(placement: LayerPlacement) -> String {
    format!(
        "position:absolute;inset:0;overflow:hidden;pointer-events:none;z-index:{}",
        placement.z_index()
    )
}

/// Custom properties for one coin, in declaration order.
#[must_use]
pub fn custom_properties(descriptor: &ParticleDescriptor) -> [(&'static str, String); 5] {
    [
        ("--x", format!("{}%", descriptor.horizontal_position)),
        ("--delay", format!("{}s", descriptor.delay_seconds)),
        ("--dur", format!("{}s", descriptor.duration_seconds)),
        ("--size", format!("{}px", descriptor.size_pixels)),
        ("--yStart", format!("{}px", descriptor.vertical_start_offset)),
    ]
}

/// Full inline style for one coin, including its image.
#[must_use]
pub fn coin_style(descriptor: &ParticleDescriptor, asset: &str) -> String {
    let vars: String = custom_properties(descriptor)
        .iter()
        .map(|(name, value)| format!("{name}:{value};"))
        .collect();
    format!("{vars}background-image:url(\"{asset}\")")
}
