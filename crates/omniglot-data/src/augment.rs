use std::f32::consts::PI;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Magnitudes of the random jitter applied to augmented renders.
///
/// Translations are drawn uniformly from `[-max_translation, max_translation)`
/// (in source pixels) independently on both axes, and the angle jitter from
/// `[-max_angle_jitter, max_angle_jitter)` radians.
///
/// # Example
///
/// ```
/// use omniglot_data::AugmentPolicy;
///
/// let policy = AugmentPolicy::default().with_max_translation(3.0);
///
/// assert_eq!(policy.max_translation, 3.0);
/// assert_eq!(policy.max_angle_jitter, std::f32::consts::PI / 16.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentPolicy {
    /// Largest absolute translation on each axis, in source pixels.
    pub max_translation: f32,
    /// Largest absolute angle jitter, in radians.
    pub max_angle_jitter: f32,
}

impl Default for AugmentPolicy {
    fn default() -> Self {
        Self {
            max_translation: 10.0,
            max_angle_jitter: PI / 16.0,
        }
    }
}

impl AugmentPolicy {
    /// A policy that never perturbs the render.
    pub fn none() -> Self {
        Self {
            max_translation: 0.0,
            max_angle_jitter: 0.0,
        }
    }

    /// Set the largest absolute translation.
    pub fn with_max_translation(mut self, max_translation: f32) -> Self {
        self.max_translation = max_translation;
        self
    }

    /// Set the largest absolute angle jitter.
    pub fn with_max_angle_jitter(mut self, max_angle_jitter: f32) -> Self {
        self.max_angle_jitter = max_angle_jitter;
        self
    }

    /// Draw jittered render parameters around `base_angle`.
    pub fn sample_params<R: Rng + ?Sized>(&self, base_angle: f32, rng: &mut R) -> RenderParams {
        let translate_x = symmetric(rng, self.max_translation);
        let translate_y = symmetric(rng, self.max_translation);
        let angle = base_angle + symmetric(rng, self.max_angle_jitter);
        RenderParams {
            angle,
            translate_x,
            translate_y,
        }
    }
}

// uniform in [-max, max)
fn symmetric<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    rng.random::<f32>() * 2.0 * max - max
}

/// Resolved geometry of a single render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParams {
    /// Counter-clockwise rotation in radians.
    pub angle: f32,
    /// Horizontal shift in source pixels.
    pub translate_x: f32,
    /// Vertical shift in source pixels.
    pub translate_y: f32,
}

impl RenderParams {
    /// Parameters of a plain rotation without translation.
    pub fn fixed(angle: f32) -> Self {
        Self {
            angle,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }
}
