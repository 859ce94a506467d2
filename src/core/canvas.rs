//! Square RGBA raster the icon is drawn on.
//!
//! Rectangles are inclusive on both ends and clipped to the canvas, so the
//! fractional layout never has to special-case tiny icon sizes.

use crate::domain::model::{Color, Rect};
use crate::utils::error::Result;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(size: u32, background: Color) -> Self {
        Self {
            image: RgbaImage::from_pixel(size, size, Rgba(background)),
        }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.image.get_pixel(x, y).0
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Clips `rect` to the canvas; `None` when nothing is left.
    fn clip(&self, rect: Rect) -> Option<Rect> {
        let max = self.size() as i64 - 1;
        let clipped = Rect::new(
            rect.x0.max(0),
            rect.y0.max(0),
            rect.x1.min(max),
            rect.y1.min(max),
        );
        (!clipped.is_empty() && max >= 0).then_some(clipped)
    }

    /// Replaces every pixel inside `rect`, alpha included.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(r) = self.clip(rect) else {
            return;
        };
        for y in r.y0..=r.y1 {
            for x in r.x0..=r.x1 {
                self.image.put_pixel(x as u32, y as u32, Rgba(color));
            }
        }
    }

    /// One pixel wide outline along the edges of `rect`.
    pub fn outline_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.fill_rect(Rect::new(rect.x0, rect.y0, rect.x1, rect.y0), color);
        self.fill_rect(Rect::new(rect.x0, rect.y1, rect.x1, rect.y1), color);
        self.fill_rect(Rect::new(rect.x0, rect.y0, rect.x0, rect.y1), color);
        self.fill_rect(Rect::new(rect.x1, rect.y0, rect.x1, rect.y1), color);
    }

    /// Blends `color` into the pixel at (`x`, `y`) by `coverage` (0..=255),
    /// channel by channel, alpha included.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Color, coverage: u8) {
        let size = self.size() as i64;
        if coverage == 0 || x < 0 || y < 0 || x >= size || y >= size {
            return;
        }
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        let cov = coverage as u32;
        for (dst, src) in pixel.0.iter_mut().zip(color) {
            let blended = (src as u32 * cov + *dst as u32 * (255 - cov) + 127) / 255;
            *dst = blended as u8;
        }
    }

    /// Lossless PNG, RGBA8. The encoder embeds no timestamps, so equal
    /// canvases encode to equal bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }
}
