//! # COINRAIN
//!
//! The falling-coin header layer, assembled.
//!
//! - `coinrain_core`: config, seeds, generator, batch cache
//! - `coinrain_ui`: keyframes, style binding, render commands
//! - this crate: settings files and the `rain_preview` tool
//!
//! ## Example
//!
//! ```rust
//! use coinrain::settings::PreviewSettings;
//!
//! let settings = PreviewSettings::from_toml_str("seed = 1\n[generator]\ncount = 5").unwrap();
//! let mut rng = settings.seed().rng();
//! let mut layer = settings.build_layer();
//!
//! let frame = layer.frame(0.5, &mut rng);
//! assert_eq!(frame.commands.len(), 5);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod cli;
pub mod error;
pub mod settings;

pub use coinrain_core;
pub use coinrain_ui;

pub use error::{PreviewError, PreviewResult};
pub use settings::{LayerSettings, PreviewSettings};
