//! # COINRAIN Core
//!
//! Randomized parameters for the decorative "coin rain" header layer.
//!
//! ## Design Principles
//!
//! 1. **Pure**: a batch depends only on the config and the random stream
//! 2. **Deterministic**: same `RainSeed` + same config = same batch
//! 3. **Forgiving**: inverted ranges and negative counts or durations are normalized, never fatal
//! 4. **Stable**: a fixed config never regenerates (see `BatchCache`)
//!
//! ## Core Components
//!
//! - `GeneratorConfig`: count, size and duration bounds, asset reference
//! - `ParticleDescriptor`: one coin's position, size and timing
//! - `generate`: one batch of descriptors
//! - `BatchCache`: memoizes the batch by `GenerationKey`
//! - `RainSeed` / `SharedRng`: injected random sources
//!
//! ## Example
//!
//! ```rust
//! use coinrain_core::{generate, GeneratorConfig, RainSeed};
//!
//! let config = GeneratorConfig::default().with_count(3);
//! let mut rng = RainSeed::new(42).rng();
//!
//! let batch = generate(&config, &mut rng);
//! assert_eq!(batch.len(), 3);
//! assert!(batch.iter().all(|d| (0.0..=100.0).contains(&d.horizontal_position)));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod cache;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod seed;

pub use cache::{BatchCache, CacheStats};
pub use config::{GenerationKey, GeneratorConfig, ResolvedConfig};
pub use descriptor::{Batch, ParticleDescriptor};
pub use error::{BoundField, ConfigIssue, RainError, RainResult};
pub use generator::{generate, generate_into, generate_resolved_into};
pub use seed::{RainSeed, SharedRng};
