//! The star field simulation: seeding, per-tick motion with edge recycling,
//! horizontal shifts, and the render snapshot.
//!
//! The field never draws anything itself. A host calls [`StarField::tick`] at
//! a fixed logical rate and reads [`StarField::snapshot_for_render`] once per
//! displayed frame.

use image::Rgba;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace, warn};

use crate::appearance::star_color;
use crate::config::StarFieldConfig;
use crate::error::Error;
use crate::star::Star;

/// Draw parameters for one star, ready for a filled-circle call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarSprite {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgba<u8>,
}

/// Fixed-size collection of stars plus the random source used to seed and
/// recycle them.
pub struct StarField<R = ChaCha8Rng> {
    stars: Vec<Star>,
    rng: R,
    width: f32,
    height: f32,
    config: StarFieldConfig,
}

impl StarField<ChaCha8Rng> {
    /// Build a field whose layout and recycling are fully determined by `seed`.
    pub fn seeded(config: StarFieldConfig, seed: u64) -> Result<Self, Error> {
        debug!(seed, "seeding star field");
        Self::new(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> StarField<R> {
    /// Validate `config`, then allocate and seed every star.
    ///
    /// Depths are stratified: `[min_depth, max_depth]` is cut into
    /// `star_count` equal bands, star `i` starts at the low edge of band `i`,
    /// gets up to half a band of jitter either way and is clamped back into
    /// range. Positions are uniform over the viewport.
    pub fn new(config: StarFieldConfig, mut rng: R) -> Result<Self, Error> {
        config.validate()?;

        let width = config.width as f32;
        let height = config.height as f32;
        let base_radius = config.base_radius();
        let count = config.star_count;

        let mut stars = Vec::with_capacity(count);
        if count > 0 {
            let depth_step = (config.max_depth - config.min_depth) / count as f32;
            let half_step = depth_step / 2.0;

            for i in 0..count {
                let mut depth = config.min_depth + i as f32 * depth_step;
                depth += rng.random_range(-half_step..=half_step);
                let depth = depth.clamp(config.min_depth, config.max_depth);

                let x = rng.random_range(0.0..width);
                let y = rng.random_range(0.0..height);
                stars.push(Star::new(x, y, depth, config.base_speed, base_radius));
            }
        }

        info!(
            stars = count,
            width = config.width,
            height = config.height,
            min_depth = config.min_depth,
            max_depth = config.max_depth,
            base_speed = config.base_speed,
            "star field created"
        );

        Ok(Self {
            stars,
            rng,
            width,
            height,
            config,
        })
    }

    /// Advance every star by its speed. A star that leaves through the bottom
    /// re-enters at the top and vice versa, at a fresh random x. Depth, speed
    /// and radius are untouched, so the depth distribution never drifts.
    pub fn tick(&mut self) {
        let bottom = last_row_below(self.height);

        for (i, star) in self.stars.iter_mut().enumerate() {
            star.y += star.speed();

            let reentry = if star.y >= self.height {
                0.0
            } else if star.y < 0.0 {
                bottom
            } else {
                continue;
            };

            star.y = reentry;
            star.x = self.rng.random_range(0.0..self.width);
            trace!(star = i, x = star.x, y = star.y, "recycled");
        }
    }

    /// Move every star `distance` pixels left, wrapping around the viewport.
    pub fn shift_left(&mut self, distance: f32) {
        self.shift(-distance);
    }

    /// Move every star `distance` pixels right, wrapping around the viewport.
    pub fn shift_right(&mut self, distance: f32) {
        self.shift(distance);
    }

    fn shift(&mut self, dx: f32) {
        if !dx.is_finite() {
            warn!(dx, "ignoring non-finite shift");
            return;
        }
        let width = self.width;
        for star in &mut self.stars {
            star.x = wrap(star.x + dx, width);
        }
    }

    /// Per-star draw parameters for the current state.
    pub fn snapshot_for_render(&self) -> impl Iterator<Item = StarSprite> + '_ {
        let (min, max) = (self.config.min_depth, self.config.max_depth);
        self.stars.iter().map(move |star| StarSprite {
            x: star.x(),
            y: star.y(),
            radius: star.radius(),
            color: star_color(star.depth(), min, max),
        })
    }
}

impl<R> StarField<R> {
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn config(&self) -> &StarFieldConfig {
        &self.config
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

/// Largest `f32` strictly below `edge`, so a star re-entering from the
/// bottom still satisfies `y < height`.
fn last_row_below(edge: f32) -> f32 {
    debug_assert!(edge > 0.0 && edge.is_finite());
    f32::from_bits(edge.to_bits() - 1)
}

/// `v` modulo `width`, in `[0, width)`.
fn wrap(v: f32, width: f32) -> f32 {
    let w = v.rem_euclid(width);
    // rem_euclid of a tiny negative value rounds up to `width`
    if w >= width { 0.0 } else { w }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(star_count: usize, base_speed: f32) -> StarField {
        let config = StarFieldConfig::new(800, 600, star_count, base_speed, 5.0, 1.0);
        StarField::seeded(config, 42).unwrap()
    }

    #[test]
    fn test_star_count_matches_config() {
        assert_eq!(field(100, 2.0).len(), 100);
    }

    #[test]
    fn test_empty_field_is_harmless() {
        let mut f = field(0, 2.0);
        assert!(f.is_empty());
        f.tick();
        f.shift_left(10.0);
        assert_eq!(f.snapshot_for_render().count(), 0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = StarFieldConfig::new(800, 600, 10, 2.0, 1.0, 5.0);
        let result = StarField::seeded(config, 1);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_seeded_stars_inside_viewport_and_depth_range() {
        let f = field(500, 2.0);
        for star in f.stars() {
            assert!((0.0..800.0).contains(&star.x()));
            assert!((0.0..600.0).contains(&star.y()));
            assert!((1.0..=5.0).contains(&star.depth()));
            assert!(star.radius() >= 1.0);
        }
    }

    #[test]
    fn test_depths_are_stratified() {
        let f = field(100, 2.0);
        let step = 4.0 / 100.0;
        let half = step / 2.0 + 1e-5;

        for (i, star) in f.stars().iter().enumerate() {
            let band = 1.0 + i as f32 * step;
            assert!(
                (star.depth() - band).abs() <= half,
                "star {i} depth {} strayed from band {band}",
                star.depth()
            );
        }
        // Discounting one jitter width, depths never go backwards.
        for pair in f.stars().windows(2) {
            assert!(pair[1].depth() + step + 1e-5 >= pair[0].depth());
        }
    }

    #[test]
    fn test_star_leaving_bottom_reenters_at_top() {
        let mut f = field(1, 3.0);
        f.stars[0] = Star::new(123.0, 599.5, 1.0, 3.0, 1.0);
        f.tick();

        let star = f.stars()[0];
        assert_eq!(star.y(), 0.0);
        assert!((0.0..800.0).contains(&star.x()));
        assert_eq!(star.depth(), 1.0);
        assert_eq!(star.speed(), 3.0);
    }

    #[test]
    fn test_star_landing_exactly_on_height_wraps() {
        let mut f = field(1, 2.0);
        f.stars[0] = Star::new(10.0, 598.0, 1.0, 2.0, 1.0);
        f.tick();
        assert_eq!(f.stars()[0].y(), 0.0);
    }

    #[test]
    fn test_star_leaving_top_reenters_at_bottom() {
        let mut f = field(1, -3.0);
        f.stars[0] = Star::new(123.0, 0.5, 1.0, -3.0, 1.0);
        f.tick();

        let star = f.stars()[0];
        assert!(star.y() < 600.0);
        assert!(star.y() > 599.0);
        assert!((0.0..800.0).contains(&star.x()));
    }

    #[test]
    fn test_upward_scroll_stays_in_viewport() {
        let mut f = field(50, -2.0);
        for _ in 0..2000 {
            f.tick();
            for star in f.stars() {
                assert!((0.0..600.0).contains(&star.y()), "y = {}", star.y());
            }
        }
    }

    #[test]
    fn test_recycle_only_moves_position() {
        let mut f = field(20, 2.0);
        let before: Vec<(f32, f32, f32)> = f
            .stars()
            .iter()
            .map(|s| (s.depth(), s.speed(), s.radius()))
            .collect();
        for _ in 0..3000 {
            f.tick();
        }
        let after: Vec<(f32, f32, f32)> = f
            .stars()
            .iter()
            .map(|s| (s.depth(), s.speed(), s.radius()))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_same_seed_same_field() {
        let mut a = field(30, 2.0);
        let mut b = field(30, 2.0);
        for _ in 0..500 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn test_shift_wraps_around_width() {
        let mut f = field(1, 2.0);
        f.stars[0] = Star::new(5.0, 300.0, 2.0, 2.0, 1.0);

        f.shift_left(10.0);
        assert_eq!(f.stars()[0].x(), 795.0);
        assert_eq!(f.stars()[0].y(), 300.0);
        assert_eq!(f.stars()[0].depth(), 2.0);

        f.shift_right(10.0);
        assert_eq!(f.stars()[0].x(), 5.0);

        f.shift_right(1600.0);
        assert_eq!(f.stars()[0].x(), 5.0);
    }

    #[test]
    fn test_shift_keeps_every_star_in_range() {
        let mut f = field(100, 2.0);
        for _ in 0..100 {
            f.shift_left(37.5);
        }
        for _ in 0..73 {
            f.shift_right(111.0);
        }
        assert!(f.stars().iter().all(|s| (0.0..800.0).contains(&s.x())));
    }

    #[test]
    fn test_wrap_never_returns_width() {
        assert_eq!(wrap(-1e-9, 800.0), 0.0);
        assert_eq!(wrap(800.0, 800.0), 0.0);
        assert_eq!(wrap(-10.0, 800.0), 790.0);
    }

    #[test]
    fn test_snapshot_matches_stars() {
        let config = StarFieldConfig::new(800, 600, 10, 2.0, 5.0, 1.0).with_base_radius(3.0);
        let f = StarField::seeded(config, 7).unwrap();

        let sprites: Vec<StarSprite> = f.snapshot_for_render().collect();
        assert_eq!(sprites.len(), 10);
        for (sprite, star) in sprites.iter().zip(f.stars()) {
            assert_eq!((sprite.x, sprite.y), star.position());
            assert_eq!(sprite.radius, star.radius());
            assert_eq!(sprite.color, star_color(star.depth(), 1.0, 5.0));
            assert_eq!(sprite.color.0[3], 255);
        }
        // The nearest star is the brightest and the largest.
        assert!(sprites[0].color.0[0] > sprites[9].color.0[0]);
        assert!(sprites[0].radius >= sprites[9].radius);
    }
}
