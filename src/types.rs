// Software frame buffer shared by the drawing helpers and the window.

use image::{Rgb, RgbImage};

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// Allocate a black frame of `width * height` pixels.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    pub fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Pixel at (x,y), or None outside the frame.
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Unpack into an RGB image for encoding (screenshots).
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let px = self.pixels[y as usize * self.width + x as usize];
            Rgb([((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_and_get() {
        let mut fb = FrameBuffer::new(4, 3);
        assert_eq!(fb.pixels.len(), 12);
        fb.clear(0x00_11_22_33);
        assert_eq!(fb.get(3, 2), Some(0x00_11_22_33));
        assert_eq!(fb.get(4, 0), None);
    }

    #[test]
    fn test_rgb_image_unpacks_channels() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.pixels[3] = 0x00_AA_BB_CC;
        let img = fb.to_rgb_image();
        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(*img.get_pixel(1, 1), Rgb([0xAA, 0xBB, 0xCC]));
        assert_eq!(*img.get_pixel(0, 0), Rgb([0, 0, 0]));
    }
}
