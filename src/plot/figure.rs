// Plot - RGB raster and PNG output
use png::{BitDepth, ColorType, Encoder};
use std::io::BufWriter;
use std::path::Path;

use crate::error::Result;

pub const BACKGROUND: [u8; 3] = [255, 255, 255];
pub const AXIS: [u8; 3] = [200, 200, 200];

/// An in-memory RGB image with a title
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    width: u32,
    height: u32,
    title: String,
    pixels: Vec<u8>,
}

impl Figure {
    pub fn new(width: u32, height: u32, title: impl Into<String>) -> Self {
        let pixels = BACKGROUND
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self {
            width,
            height,
            title: title.into(),
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Row-major RGB bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.offset(x, y);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 3]) {
        if x < self.width && y < self.height {
            let i = self.offset(x, y);
            self.pixels[i..i + 3].copy_from_slice(&color);
        }
    }

    /// Alpha-blend `color` over the existing pixel
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: [u8; 3], alpha: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        let i = self.offset(x, y);
        for (c, &src) in color.iter().enumerate() {
            let dst = self.pixels[i + c] as f32;
            self.pixels[i + c] = (src as f32 * alpha + dst * (1.0 - alpha)).round() as u8;
        }
    }

    /// Vertical span `[y0, y1]` (either order) in column `x`
    pub fn vline(&mut self, x: u32, y0: u32, y1: u32, color: [u8; 3], alpha: f32) {
        let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        for y in top..=bottom.min(self.height.saturating_sub(1)) {
            self.blend_pixel(x, y, color, alpha);
        }
    }

    pub fn hline(&mut self, y: u32, color: [u8; 3]) {
        for x in 0..self.width {
            self.set_pixel(x, y, color);
        }
    }

    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(ColorType::Rgb);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
        }
        Ok(buf)
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        let mut encoder = Encoder::new(BufWriter::new(file), self.width, self.height);
        encoder.set_color(ColorType::Rgb);
        encoder.set_depth(BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        writer.finish()?;
        log::info!("Saved '{}' to {}", self.title, path.as_ref().display());
        Ok(())
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }
}
