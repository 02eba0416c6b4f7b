//! # Random Sources
//!
//! The generator never reaches for ambient randomness. Callers inject a
//! source:
//!
//! - `RainSeed::rng()` for reproducible batches (tests, previews)
//! - `RainSeed::from_entropy()` for production
//! - `SharedRng` when several threads draw batches from one stream
//!
//! ## Determinism Guarantee
//!
//! `ChaCha8Rng` output is fully specified, so the same seed produces the
//! same batch on every platform.

use parking_lot::Mutex;
use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::GeneratorConfig;
use crate::descriptor::ParticleDescriptor;
use crate::generator::generate;

/// Seed for deterministic batch generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RainSeed(u64);

impl RainSeed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Draws a seed from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self(OsRng.next_u64())
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a sub-seed for an independent stream (e.g. one per layer).
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        // FNV-1a style mixing
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }

    /// Creates a generator seeded from this value.
    #[must_use]
    pub fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }
}

impl Default for RainSeed {
    fn default() -> Self {
        Self(0xC011_C011_C011_C011)
    }
}

/// A random stream shared between threads.
///
/// The lock is held for exactly one batch, so concurrent callers each get a
/// complete, contiguous draw.
#[derive(Debug)]
pub struct SharedRng {
    inner: Mutex<ChaCha8Rng>,
}

impl SharedRng {
    /// Creates a shared stream from a seed.
    #[must_use]
    pub fn new(seed: RainSeed) -> Self {
        Self {
            inner: Mutex::new(seed.rng()),
        }
    }

    /// Creates a shared stream seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(RainSeed::from_entropy())
    }

    /// Restarts the stream from a new seed.
    pub fn reseed(&self, seed: RainSeed) {
        *self.inner.lock() = seed.rng();
    }

    /// Generates one batch under the lock.
    #[must_use]
    pub fn generate(&self, config: &GeneratorConfig) -> Vec<ParticleDescriptor> {
        let mut rng = self.inner.lock();
        generate(config, &mut *rng)
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::new(RainSeed::default())
    }
}
