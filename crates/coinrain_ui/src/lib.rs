//! # COINRAIN UI
//!
//! Render surface adapter for the coin rain layer.
//!
//! ## Pipeline
//!
//! ```text
//! GeneratorConfig ──► BatchCache ──► Batch
//!                                     │
//!             ┌───────────────────────┼──────────────────────┐
//!             ▼                       ▼                      ▼
//!     FallAnimation::sample     coin_style (CSS vars)   layer_style
//!      (per-frame sprites)       (DOM hosts)             (z-order)
//! ```
//!
//! No coin is ever regenerated by this crate. It reads the batch for the
//! current config and maps it to whatever the host draws with.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod render;
pub mod style;

pub use animation::{FallAnimation, FallKeyframes, SpriteFrame, Track};
pub use render::{CoinLayer, LayerFrame, RenderCommand, DEFAULT_LAYER_HEIGHT};
pub use style::{coin_style, custom_properties, layer_style, LayerPlacement};
