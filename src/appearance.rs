//! Depth to color mapping used by the render path.
//!
//! Near stars are bright and close to white; far stars fade out and pick up
//! a blue haze.

use image::Rgba;

/// Peak blue tint, reached at `max_depth`.
pub const MAX_BLUE_TINT: f32 = 200.0;

/// `255` at `min_depth` falling linearly to `0` at `max_depth`.
pub fn brightness(depth: f32, min_depth: f32, max_depth: f32) -> u8 {
    let b = 255.0 * (max_depth - depth) / (max_depth - min_depth);
    to_channel(b)
}

/// Blue haze proportional to depth: `200 * depth / max_depth`.
pub fn blue_tint(depth: f32, max_depth: f32) -> u8 {
    to_channel(MAX_BLUE_TINT * depth / max_depth)
}

/// Opaque color for a star at `depth`. The blue channel saturates at 255
/// instead of wrapping when brightness and tint are summed.
pub fn star_color(depth: f32, min_depth: f32, max_depth: f32) -> Rgba<u8> {
    let b = brightness(depth, min_depth, max_depth);
    let blue = b.saturating_add(blue_tint(depth, max_depth));
    Rgba([b, b, blue, u8::MAX])
}

/// Pack into the `0x00RRGGBB` layout minifb expects. Alpha is dropped.
#[inline]
pub fn pack_rgb(color: Rgba<u8>) -> u32 {
    let [r, g, b, _] = color.0;
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

// NaN maps to 0 through the saturating float cast.
#[inline]
fn to_channel(v: f32) -> u8 {
    v.clamp(0.0, 255.0) as u8
}
