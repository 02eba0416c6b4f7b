//! # Batch Cache
//!
//! Holds the batch for the current config so per-frame redraws do not
//! restart every coin's animation.
//!
//! Single slot: a new key replaces the held batch wholesale.

use std::sync::Arc;

use rand::Rng;

use crate::config::{GenerationKey, GeneratorConfig};
use crate::descriptor::Batch;
use crate::generator::generate_resolved_into;

/// Cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the held batch.
    pub hits: u64,
    /// Lookups that generated a new batch.
    pub regenerations: u64,
}

/// Memoizes one batch by [`GenerationKey`].
#[derive(Debug, Default)]
pub struct BatchCache {
    slot: Option<(GenerationKey, Batch)>,
    stats: CacheStats,
}

impl BatchCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the held batch if `config` has the same key, otherwise
    /// generates and holds a new one.
    ///
    /// The returned `Arc` is pointer-identical across calls while the key
    /// is unchanged.
    pub fn get_or_generate<R: Rng + ?Sized>(&mut self, config: &GeneratorConfig, rng: &mut R) -> Batch {
        let key = config.key();
        if let Some((held, batch)) = &self.slot {
            if *held == key {
                self.stats.hits += 1;
                return Arc::clone(batch);
            }
        }

        let resolved = config.resolve();
        let mut descriptors = Vec::new();
        generate_resolved_into(&resolved, rng, &mut descriptors);
        let batch: Batch = descriptors.into();

        self.stats.regenerations += 1;
        tracing::debug!(
            "coin batch regenerated: {} descriptors (regeneration #{})",
            batch.len(),
            self.stats.regenerations
        );

        self.slot = Some((key, Arc::clone(&batch)));
        batch
    }

    /// Returns the held batch, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Batch> {
        self.slot.as_ref().map(|(_, batch)| batch)
    }

    /// Drops the held batch. The next lookup regenerates.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    /// Returns the cache counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::RainSeed;

    #[test]
    fn test_same_config_reuses_batch() {
        let mut cache = BatchCache::new();
        let mut rng = RainSeed::new(1).rng();
        let config = GeneratorConfig::default();

        let first = cache.get_or_generate(&config, &mut rng);
        let second = cache.get_or_generate(&config.clone(), &mut rng);

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats(), CacheStats { hits: 1, regenerations: 1 });
    }

    #[test]
    fn test_changed_bound_regenerates() {
        let mut cache = BatchCache::new();
        let mut rng = RainSeed::new(1).rng();

        let first = cache.get_or_generate(&GeneratorConfig::default(), &mut rng);
        let second = cache.get_or_generate(&GeneratorConfig::default().with_duration(6.0, 12.0), &mut rng);

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats().regenerations, 2);
        assert!(Arc::ptr_eq(cache.current().unwrap(), &second));
    }

    #[test]
    fn test_changed_count_regenerates() {
        let mut cache = BatchCache::new();
        let mut rng = RainSeed::new(1).rng();

        cache.get_or_generate(&GeneratorConfig::default(), &mut rng);
        let batch = cache.get_or_generate(&GeneratorConfig::default().with_count(5), &mut rng);

        assert_eq!(batch.len(), 5);
        assert_eq!(cache.stats().regenerations, 2);
    }

    #[test]
    fn test_asset_change_keeps_batch() {
        let mut cache = BatchCache::new();
        let mut rng = RainSeed::new(1).rng();

        let first = cache.get_or_generate(&GeneratorConfig::default(), &mut rng);
        let second = cache.get_or_generate(&GeneratorConfig::default().with_asset("/coin.png"), &mut rng);

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_invalidate_forces_regeneration() {
        let mut cache = BatchCache::new();
        let mut rng = RainSeed::new(1).rng();
        let config = GeneratorConfig::default();

        let first = cache.get_or_generate(&config, &mut rng);
        cache.invalidate();
        assert!(cache.current().is_none());

        let second = cache.get_or_generate(&config, &mut rng);
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats().regenerations, 2);
    }
}
