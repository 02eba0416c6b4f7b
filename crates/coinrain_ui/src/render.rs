//! Coin layer: config + cached batch -> per-frame render commands.
//!
//! The layer asks its `BatchCache` for the batch on every frame. Only a
//! config whose key differs produces new coins, so continuous redraws
//! never restart the rain.

use coinrain_core::{Batch, BatchCache, CacheStats, GeneratorConfig};
use rand::Rng;

use crate::animation::{FallAnimation, SpriteFrame};
use crate::style::{coin_style, layer_style, LayerPlacement};

/// Default layer height (px), roughly a two-row sticky header.
pub const DEFAULT_LAYER_HEIGHT: f32 = 120.0;

/// A draw instruction for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw the coin image at the sampled position.
    Sprite(SpriteFrame),
}

/// Everything drawn for the layer on one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerFrame {
    /// Z-index for sorting against other layers.
    pub z_index: i32,
    /// Image every sprite uses.
    pub asset: String,
    /// One command per coin, in batch order.
    pub commands: Vec<RenderCommand>,
}

/// The decorative coin layer.
#[derive(Debug)]
pub struct CoinLayer {
    config: GeneratorConfig,
    cache: BatchCache,
    animation: FallAnimation,
    placement: LayerPlacement,
    height: f32,
}

impl CoinLayer {
    /// Creates a layer. No coins are generated until the first frame.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            cache: BatchCache::new(),
            animation: FallAnimation::default(),
            placement: LayerPlacement::default(),
            height: DEFAULT_LAYER_HEIGHT,
        }
    }

    /// Sets the z-order placement.
    #[must_use]
    pub fn with_placement(mut self, placement: LayerPlacement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the layer height (px).
    #[must_use]
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Sets the fall animation.
    #[must_use]
    pub fn with_animation(mut self, animation: FallAnimation) -> Self {
        self.animation = animation;
        self
    }

    /// Current config.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Replaces the config. Regeneration happens on the next lookup, and
    /// only if the generation key changed.
    pub fn set_config(&mut self, config: GeneratorConfig) {
        if config.key() != self.config.key() {
            tracing::debug!("coin layer config changed: count={}", config.count);
        }
        self.config = config;
    }

    /// Resizes the layer (px). Does not regenerate.
    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    /// The batch for the current config.
    pub fn batch<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Batch {
        self.cache.get_or_generate(&self.config, rng)
    }

    /// Samples every coin at `elapsed` seconds since mount.
    pub fn frame<R: Rng + ?Sized>(&mut self, elapsed: f32, rng: &mut R) -> LayerFrame {
        let batch = self.batch(rng);
        let commands = batch
            .iter()
            .map(|descriptor| RenderCommand::Sprite(self.animation.sample(descriptor, elapsed, self.height)))
            .collect();

        LayerFrame {
            z_index: self.placement.z_index(),
            asset: self.config.asset.clone(),
            commands,
        }
    }

    /// Inline style of each coin, in batch order.
    pub fn inline_styles<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<String> {
        let batch = self.batch(rng);
        batch
            .iter()
            .map(|descriptor| coin_style(descriptor, &self.config.asset))
            .collect()
    }

    /// Inline style of the layer container.
    #[must_use]
    pub fn container_style(&self) -> String {
        layer_style(self.placement)
    }

    /// Cache counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl Default for CoinLayer {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinrain_core::RainSeed;

    #[test]
    fn test_frames_do_not_regenerate() {
        let mut layer = CoinLayer::default();
        let mut rng = RainSeed::new(5).rng();

        for i in 0..120 {
            let frame = layer.frame(i as f32 / 60.0, &mut rng);
            assert_eq!(frame.commands.len(), 20);
        }
        assert_eq!(layer.stats().regenerations, 1);
    }

    #[test]
    fn test_config_change_regenerates_once() {
        let mut layer = CoinLayer::default();
        let mut rng = RainSeed::new(5).rng();

        layer.frame(0.0, &mut rng);
        layer.set_config(GeneratorConfig::default().with_count(8));
        layer.frame(0.1, &mut rng);
        let frame = layer.frame(0.2, &mut rng);

        assert_eq!(frame.commands.len(), 8);
        assert_eq!(layer.stats().regenerations, 2);
    }

    #[test]
    fn test_asset_swap_keeps_coins() {
        let mut layer = CoinLayer::default();
        let mut rng = RainSeed::new(5).rng();

        let before = layer.batch(&mut rng);
        layer.set_config(GeneratorConfig::default().with_asset("/coin.png"));
        let frame = layer.frame(0.0, &mut rng);

        assert_eq!(frame.asset, "/coin.png");
        assert!(std::sync::Arc::ptr_eq(&before, &layer.batch(&mut rng)));
    }

    #[test]
    fn test_frame_carries_placement_and_keys() {
        let mut layer = CoinLayer::default()
            .with_placement(LayerPlacement::AboveContent)
            .with_height(80.0);
        let mut rng = RainSeed::new(5).rng();

        let frame = layer.frame(1.0, &mut rng);
        assert_eq!(frame.z_index, 10);
        for (i, RenderCommand::Sprite(sprite)) in frame.commands.iter().enumerate() {
            assert_eq!(sprite.id as usize, i);
            assert!((0.0..=1.0).contains(&sprite.opacity));
        }
    }

    #[test]
    fn test_inline_styles_use_config_asset() {
        let mut layer = CoinLayer::new(GeneratorConfig::default().with_count(2).with_asset("/gold.svg"));
        let mut rng = RainSeed::new(5).rng();

        let styles = layer.inline_styles(&mut rng);
        assert_eq!(styles.len(), 2);
        assert!(styles.iter().all(|s| s.starts_with("--x:") && s.ends_with("url(\"/gold.svg\")")));
        assert!(layer.container_style().contains("z-index:1"));
    }
}
