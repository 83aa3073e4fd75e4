//! Construction parameters for a [`StarField`](crate::starfield::StarField).

use crate::error::ConfigError;

/// Radius used when no base radius is given: single-pixel stars.
pub const MIN_STAR_RADIUS: f32 = 1.0;

/// Everything needed to build a star field. There is no file or CLI layer;
/// hosts fill this in directly or start from [`StarFieldConfig::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct StarFieldConfig {
    /// Viewport width in pixels.
    pub width: usize,
    /// Viewport height in pixels.
    pub height: usize,
    /// Number of stars; fixed for the life of the field.
    pub star_count: usize,
    /// Speed of a star at depth 1.0, in pixels per tick. Positive scrolls
    /// down, negative scrolls up.
    pub base_speed: f32,
    /// Depth of the farthest stars.
    pub max_depth: f32,
    /// Depth of the nearest stars.
    pub min_depth: f32,
    /// Radius of a star at depth 1.0. `None` falls back to [`MIN_STAR_RADIUS`].
    pub base_radius: Option<f32>,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            star_count: 100,
            base_speed: -2.0,
            max_depth: 5.0,
            min_depth: 1.0,
            base_radius: Some(3.0),
        }
    }
}

impl StarFieldConfig {
    /// Config with the given viewport and motion parameters and single-pixel stars.
    pub fn new(
        width: usize,
        height: usize,
        star_count: usize,
        base_speed: f32,
        max_depth: f32,
        min_depth: f32,
    ) -> Self {
        Self {
            width,
            height,
            star_count,
            base_speed,
            max_depth,
            min_depth,
            base_radius: None,
        }
    }

    pub fn with_base_radius(mut self, radius: f32) -> Self {
        self.base_radius = Some(radius);
        self
    }

    /// Base radius with the default applied.
    pub fn base_radius(&self) -> f32 {
        self.base_radius.unwrap_or(MIN_STAR_RADIUS)
    }

    /// Reject parameters that would produce division by zero, NaN positions
    /// or non-positive radii further down.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.min_depth.is_finite() && self.min_depth > 0.0) {
            return Err(ConfigError::NonPositiveMinDepth(self.min_depth));
        }
        if !(self.max_depth.is_finite() && self.max_depth > self.min_depth) {
            return Err(ConfigError::DepthRange {
                min: self.min_depth,
                max: self.max_depth,
            });
        }
        if !self.base_speed.is_finite() {
            return Err(ConfigError::NonFiniteSpeed(self.base_speed));
        }
        let radius = self.base_radius();
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(radius));
        }
        Ok(())
    }
}
