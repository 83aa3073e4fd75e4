use crate::config::MIN_STAR_RADIUS;

/// One star. Plain value stored inline in the field's `Vec`.
///
/// `speed` and `radius` are derived from `depth` once, when the star is
/// seeded; depth never changes afterwards, so the three always agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub(crate) x: f32,
    pub(crate) y: f32,
    depth: f32,
    speed: f32,
    radius: f32,
}

impl Star {
    /// Seed a star at `(x, y)`. Speed and radius both scale with `1 / depth`.
    pub fn new(x: f32, y: f32, depth: f32, base_speed: f32, base_radius: f32) -> Self {
        Self {
            x,
            y,
            depth,
            speed: base_speed / depth,
            radius: (base_radius / depth).max(MIN_STAR_RADIUS),
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// 1.0-ish is nearest, larger is farther.
    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Pixels per tick along y; sign follows the scroll direction.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Disc radius in pixels, never below one pixel.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}
