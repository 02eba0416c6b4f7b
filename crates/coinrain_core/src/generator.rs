//! # Particle Parameter Generator
//!
//! Draws one batch of coin descriptors. For each index, five independent
//! uniform samples in this order:
//!
//! | Field | Range |
//! |---|---|
//! | `horizontal_position` | `[0, 100]` |
//! | `size_pixels` | `[size_min, size_max]` |
//! | `duration_seconds` | `[duration_min, duration_max]` |
//! | `delay_seconds` | `-[0, duration_max]` |
//! | `vertical_start_offset` | `-[40, 160]` |
//!
//! No draw looks at any other coin. Coins may coincide.

use rand::Rng;

use crate::config::{GeneratorConfig, ResolvedConfig};
use crate::descriptor::{ParticleDescriptor, HORIZONTAL_RANGE, VERTICAL_OFFSET_MAX, VERTICAL_OFFSET_MIN};

/// Generates a fresh batch of `config.count` descriptors.
///
/// Malformed bounds are normalized first (see [`GeneratorConfig::resolve`]).
#[must_use]
pub fn generate<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Vec<ParticleDescriptor> {
    let mut batch = Vec::new();
    generate_into(config, rng, &mut batch);
    batch
}

/// Generates a batch into `out`, reusing its allocation.
///
/// `out` is cleared first.
pub fn generate_into<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
    out: &mut Vec<ParticleDescriptor>,
) {
    generate_resolved_into(&config.resolve(), rng, out);
}

/// Generates a batch from already-normalized bounds.
pub fn generate_resolved_into<R: Rng + ?Sized>(
    config: &ResolvedConfig,
    rng: &mut R,
    out: &mut Vec<ParticleDescriptor>,
) {
    let (size_min, size_max) = config.size_range();
    let (duration_min, duration_max) = config.duration_range();
    let (x_min, x_max) = HORIZONTAL_RANGE;

    out.clear();
    out.reserve(config.count() as usize);

    for id in 0..config.count() {
        out.push(ParticleDescriptor {
            id,
            horizontal_position: uniform(rng, x_min, x_max),
            size_pixels: uniform(rng, size_min, size_max),
            duration_seconds: uniform(rng, duration_min, duration_max),
            delay_seconds: -uniform(rng, 0.0, duration_max),
            vertical_start_offset: -uniform(rng, -VERTICAL_OFFSET_MAX, -VERTICAL_OFFSET_MIN),
        });
    }
}

/// Uniform sample in `[lo, hi]`. Requires `lo <= hi`, both finite.
///
/// Convex combination, so `hi - lo` beyond `f32::MAX` cannot overflow.
/// Clamped so rounding can never leave the range, and a zero-width range
/// returns `lo` exactly.
#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    let t: f32 = rng.gen();
    (lo * (1.0 - t) + hi * t).clamp(lo, hi)
}
