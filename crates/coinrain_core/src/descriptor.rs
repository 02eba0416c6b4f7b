//! Coin descriptors.
//!
//! A descriptor is immutable for the lifetime of its batch. Batches are
//! replaced wholesale, never edited in place.

// bytemuck derives expand to `unsafe impl`.
#![allow(unsafe_code)]

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// Lowest starting offset above the layer (px).
pub const VERTICAL_OFFSET_MIN: f32 = -160.0;
/// Highest starting offset above the layer (px).
pub const VERTICAL_OFFSET_MAX: f32 = -40.0;
/// Horizontal placement range (percent of layer width).
pub const HORIZONTAL_RANGE: (f32, f32) = (0.0, 100.0);

/// One coin's animation parameters.
///
/// 24 bytes, no padding. Can be uploaded directly as an instance buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleDescriptor {
    /// Index within the batch, used as the render key.
    pub id: u32,
    /// Horizontal placement, percent of layer width (0-100).
    pub horizontal_position: f32,
    /// Rendered size (px).
    pub size_pixels: f32,
    /// Length of one fall cycle (seconds).
    pub duration_seconds: f32,
    /// Non-positive start offset so the coin is mid-fall at mount (seconds).
    pub delay_seconds: f32,
    /// Starting offset above the layer (px, -160 to -40).
    pub vertical_start_offset: f32,
}

impl ParticleDescriptor {
    /// Size of a descriptor in bytes.
    pub const SIZE: usize = std::mem::size_of::<Self>();
}

/// A shared, immutable batch of descriptors.
pub type Batch = Arc<[ParticleDescriptor]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_is_tightly_packed() {
        assert_eq!(ParticleDescriptor::SIZE, 24);

        let batch = [ParticleDescriptor::default(); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&batch);
        assert_eq!(bytes.len(), 72);
    }

    #[test]
    fn test_json_uses_host_field_names() {
        let descriptor = ParticleDescriptor {
            id: 7,
            horizontal_position: 50.0,
            size_pixels: 20.0,
            duration_seconds: 8.0,
            delay_seconds: -2.0,
            vertical_start_offset: -100.0,
        };
        let json = serde_json::to_string(&descriptor).unwrap();
        assert!(json.contains("\"horizontalPosition\":50.0"));
        assert!(json.contains("\"verticalStartOffset\":-100.0"));

        let back: ParticleDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, descriptor);
    }
}
