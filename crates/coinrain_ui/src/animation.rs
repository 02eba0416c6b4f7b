//! Fall animation: keyframe tracks and per-frame sampling.
//!
//! The layer uses one keyframe set for every coin. Coins differ only in
//! their descriptor timing (duration, delay) and start offset.
//!
//! ```text
//!   0%   translateY(-20%)   opacity 0
//!  10%                      opacity 1
//! 100%   translateY(110%)   opacity 1
//! ```

use coinrain_core::ParticleDescriptor;

/// One animated property: `(offset, value)` stops, offsets ascending in 0-1.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    stops: Vec<(f32, f32)>,
}

impl Track {
    /// Creates a track. Stops are sorted by offset; offsets are clamped to 0-1.
    #[must_use]
    pub fn new(stops: impl IntoIterator<Item = (f32, f32)>) -> Self {
        let mut stops: Vec<(f32, f32)> = stops
            .into_iter()
            .map(|(offset, value)| (offset.clamp(0.0, 1.0), value))
            .collect();
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { stops }
    }

    /// Value at `t` (0-1), linear between stops, held flat past the ends.
    ///
    /// An empty track samples as 0.
    #[must_use]
    pub fn sample(&self, t: f32) -> f32 {
        let Some(&(first_at, first)) = self.stops.first() else {
            return 0.0;
        };
        if t <= first_at {
            return first;
        }
        for pair in self.stops.windows(2) {
            let (a_at, a) = pair[0];
            let (b_at, b) = pair[1];
            if t <= b_at {
                let span = b_at - a_at;
                if span <= f32::EPSILON {
                    return b;
                }
                return a + (b - a) * ((t - a_at) / span);
            }
        }
        self.stops.last().map_or(first, |&(_, value)| value)
    }
}

/// Keyframes of one fall cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct FallKeyframes {
    /// Vertical translation, percent of layer height.
    pub translate_y: Track,
    /// Opacity (0-1).
    pub opacity: Track,
}

impl Default for FallKeyframes {
    fn default() -> Self {
        Self {
            translate_y: Track::new([(0.0, -20.0), (1.0, 110.0)]),
            opacity: Track::new([(0.0, 0.0), (0.1, 1.0), (1.0, 1.0)]),
        }
    }
}

/// Where one coin is drawn on one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteFrame {
    /// Descriptor id (render key).
    pub id: u32,
    /// Left edge, percent of layer width.
    pub left_percent: f32,
    /// Top edge relative to the layer top (px).
    pub top_px: f32,
    /// Coin size (px).
    pub size_px: f32,
    /// Opacity (0-1).
    pub opacity: f32,
}

/// Samples descriptors against a keyframe set, repeating forever.
#[derive(Debug, Clone, Default)]
pub struct FallAnimation {
    keyframes: FallKeyframes,
}

impl FallAnimation {
    /// Creates an animation from custom keyframes.
    #[must_use]
    pub fn new(keyframes: FallKeyframes) -> Self {
        Self { keyframes }
    }

    /// Position within the current cycle (0-1) at `elapsed` seconds.
    ///
    /// The negative delay puts the coin mid-cycle at `elapsed = 0`.
    /// A zero duration stays at phase 0.
    #[must_use]
    pub fn phase(descriptor: &ParticleDescriptor, elapsed: f32) -> f32 {
        let duration = descriptor.duration_seconds;
        if duration <= 0.0 {
            return 0.0;
        }
        let local = elapsed - descriptor.delay_seconds;
        (local.rem_euclid(duration) / duration).clamp(0.0, 1.0)
    }

    /// Samples one coin at `elapsed` seconds for a layer `layer_height` px tall.
    #[must_use]
    pub fn sample(&self, descriptor: &ParticleDescriptor, elapsed: f32, layer_height: f32) -> SpriteFrame {
        let t = Self::phase(descriptor, elapsed);
        let translate = self.keyframes.translate_y.sample(t);

        SpriteFrame {
            id: descriptor.id,
            left_percent: descriptor.horizontal_position,
            top_px: descriptor.vertical_start_offset + translate / 100.0 * layer_height,
            size_px: descriptor.size_pixels,
            opacity: self.keyframes.opacity.sample(t).clamp(0.0, 1.0),
        }
    }
}
