//! A 2D debug image represented as a flat array of RGBA pixels.

use std::io::Write;

/// A 2D debug image stored as row-major RGBA pixels.
#[derive(Clone, Debug)]
pub struct DebugImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data in row-major RGBA format. Length = `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl DebugImage {
    /// Create a new transparent black image with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Set a single pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = self.offset(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Get a pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.offset(x, y);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Encode the image as an 8-bit RGBA PNG.
    pub fn write_png<W: Write>(&self, writer: W) -> Result<(), png::EncodingError> {
        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        writer.finish()
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        (y as usize * self.width as usize + x as usize) * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_image_correct_dimensions() {
        let image = DebugImage::new(256, 128);
        assert_eq!(image.dimensions(), (256, 128));
        assert_eq!(image.pixels.len(), 256 * 128 * 4);
    }

    #[test]
    fn test_get_pixel_roundtrip() {
        let mut image = DebugImage::new(8, 8);
        image.set_pixel(2, 3, [10, 20, 30, 40]);
        assert_eq!(image.get_pixel(2, 3), [10, 20, 30, 40]);
        assert_eq!(image.get_pixel(3, 2), [0, 0, 0, 0]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_pixel_panics() {
        let mut image = DebugImage::new(4, 4);
        image.set_pixel(4, 0, [1, 2, 3, 4]);
    }

    #[test]
    fn test_write_png_signature() {
        let mut image = DebugImage::new(3, 2);
        image.set_pixel(1, 1, [255, 0, 0, 255]);
        let mut buf = Vec::new();
        image.write_png(&mut buf).unwrap();
        assert_eq!(&buf[..8], b"\x89PNG\r\n\x1a\n");
    }
}
