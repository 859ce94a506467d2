//! Measuring and drawing a single centered glyph.

use crate::core::bitmap_font::{self, BitmapGlyph};
use crate::core::canvas::Canvas;
use crate::core::font::{FontFace, FontHandle};
use crate::domain::model::Color;
use crate::utils::error::{IconError, Result};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};

/// Tight ink box of a glyph in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphBox {
    pub width: f32,
    pub height: f32,
}

fn glyph_error(ch: char, reason: impl Into<String>) -> IconError {
    IconError::GlyphError {
        glyph: ch.to_string(),
        reason: reason.into(),
    }
}

pub fn measure(font: &FontHandle, ch: char) -> Result<GlyphBox> {
    match &font.face {
        FontFace::Outline { data, index } => {
            let face = ttf_parser::Face::parse(data, *index)
                .map_err(|e| glyph_error(ch, e.to_string()))?;
            let outline = OutlineGlyph::prepare(&face, font.size, ch)?;
            Ok(outline.glyph_box())
        }
        FontFace::Bitmap => {
            let (glyph, scale) = bitmap_glyph(font.size, ch)?;
            let bounds = glyph.bounds();
            Ok(GlyphBox {
                width: (bounds.width() * scale) as f32,
                height: (bounds.height() * scale) as f32,
            })
        }
    }
}

/// Draws `ch` so its ink box, as reported by [`measure`], sits in the
/// middle of the canvas.
pub fn draw_centered(canvas: &mut Canvas, font: &FontHandle, ch: char, color: Color) -> Result<()> {
    let glyph_box = measure(font, ch)?;
    let size = canvas.size() as f32;
    let left = ((size - glyph_box.width) / 2.0).floor();
    let top = ((size - glyph_box.height) / 2.0).floor();

    match &font.face {
        FontFace::Outline { data, index } => {
            let face = ttf_parser::Face::parse(data, *index)
                .map_err(|e| glyph_error(ch, e.to_string()))?;
            let outline = OutlineGlyph::prepare(&face, font.size, ch)?;
            outline.draw(&face, canvas, left, top, color)
        }
        FontFace::Bitmap => draw_bitmap(canvas, font.size, ch, left as i64, top as i64, color),
    }
}

fn bitmap_glyph(font_size: u32, ch: char) -> Result<(BitmapGlyph, u32)> {
    let glyph = BitmapGlyph::lookup(ch)
        .ok_or_else(|| glyph_error(ch, "not covered by the built-in font"))?;
    let scale = bitmap_font::cell_scale(font_size);
    if scale == 0 {
        return Err(glyph_error(
            ch,
            format!("point size {} is below one bitmap cell", font_size),
        ));
    }
    Ok((glyph, scale))
}

fn draw_bitmap(
    canvas: &mut Canvas,
    font_size: u32,
    ch: char,
    left: i64,
    top: i64,
    color: Color,
) -> Result<()> {
    let (glyph, scale) = bitmap_glyph(font_size, ch)?;
    let bounds = glyph.bounds();
    let scale = scale as i64;

    for (col, row) in glyph.cells() {
        let x0 = left + (col - bounds.min_col) as i64 * scale;
        let y0 = top + (row - bounds.min_row) as i64 * scale;
        for y in y0..y0 + scale {
            for x in x0..x0 + scale {
                canvas.blend_pixel(x, y, color, 255);
            }
        }
    }
    Ok(())
}

struct OutlineGlyph {
    ch: char,
    id: ttf_parser::GlyphId,
    bbox: ttf_parser::Rect,
    scale: f32,
}

impl OutlineGlyph {
    fn prepare(face: &ttf_parser::Face, font_size: u32, ch: char) -> Result<Self> {
        if font_size == 0 {
            return Err(glyph_error(ch, "point size must be positive"));
        }
        let id = face
            .glyph_index(ch)
            .ok_or_else(|| glyph_error(ch, "glyph missing from font"))?;
        let bbox = face
            .glyph_bounding_box(id)
            .ok_or_else(|| glyph_error(ch, "glyph has no outline"))?;
        let scale = font_size as f32 / face.units_per_em() as f32;
        Ok(Self { ch, id, bbox, scale })
    }

    fn glyph_box(&self) -> GlyphBox {
        GlyphBox {
            width: (self.bbox.x_max as f32 - self.bbox.x_min as f32) * self.scale,
            height: (self.bbox.y_max as f32 - self.bbox.y_min as f32) * self.scale,
        }
    }

    fn draw(
        &self,
        face: &ttf_parser::Face,
        canvas: &mut Canvas,
        left: f32,
        top: f32,
        color: Color,
    ) -> Result<()> {
        let size = canvas.size();

        // Pen origin such that the ink box starts at (left, top).
        let origin_x = left - self.bbox.x_min as f32 * self.scale;
        let baseline_y = top + self.bbox.y_max as f32 * self.scale;

        let mut builder = GlyphPathBuilder::new(origin_x, baseline_y, self.scale);
        face.outline_glyph(self.id, &mut builder)
            .ok_or_else(|| glyph_error(self.ch, "glyph has no outline"))?;
        let path = builder
            .finish()
            .ok_or_else(|| glyph_error(self.ch, "empty outline"))?;

        let mut pixmap = Pixmap::new(size, size)
            .ok_or_else(|| glyph_error(self.ch, "cannot allocate glyph mask"))?;
        let mut paint = Paint::default();
        paint.set_color_rgba8(255, 255, 255, 255);
        paint.anti_alias = true;
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        // 以遮罩覆蓋率混合字形顏色
        for (i, px) in pixmap.pixels().iter().enumerate() {
            let x = (i as u32 % size) as i64;
            let y = (i as u32 / size) as i64;
            canvas.blend_pixel(x, y, color, px.alpha());
        }
        Ok(())
    }
}

/// Collects a glyph outline into a tiny-skia path, flipping font units
/// (y up) into canvas pixels (y down).
struct GlyphPathBuilder {
    path_builder: PathBuilder,
    x: f32,
    y: f32,
    scale: f32,
}

impl GlyphPathBuilder {
    fn new(x: f32, y: f32, scale: f32) -> Self {
        Self {
            path_builder: PathBuilder::new(),
            x,
            y,
            scale,
        }
    }

    fn px(&self, gx: f32) -> f32 {
        self.x + gx * self.scale
    }

    fn py(&self, gy: f32) -> f32 {
        self.y - gy * self.scale
    }

    fn finish(self) -> Option<tiny_skia::Path> {
        self.path_builder.finish()
    }
}

impl ttf_parser::OutlineBuilder for GlyphPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path_builder.move_to(self.px(x), self.py(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path_builder.line_to(self.px(x), self.py(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1, x, y) = (self.px(x1), self.py(y1), self.px(x), self.py(y));
        self.path_builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = (self.px(x1), self.py(y1));
        let (x2, y2) = (self.px(x2), self.py(y2));
        let (x, y) = (self.px(x), self.py(y));
        self.path_builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.path_builder.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = [0, 0, 0, 255];
    const WHITE: Color = [255, 255, 255, 255];

    #[test]
    fn test_bitmap_measure() {
        let font = FontHandle::builtin(14);
        let glyph_box = measure(&font, 'H').unwrap();
        assert_eq!(glyph_box.width, 10.0);
        assert_eq!(glyph_box.height, 14.0);
    }

    #[test]
    fn test_bitmap_glyph_is_centered() {
        let mut canvas = Canvas::new(20, BG);
        let font = FontHandle::builtin(14);
        draw_centered(&mut canvas, &font, 'H', WHITE).unwrap();

        // 10x14 ink box centered in 20x20 starts at (5, 3)
        assert_eq!(canvas.pixel(5, 3), WHITE);
        assert_eq!(canvas.pixel(14, 16), WHITE);
        assert_eq!(canvas.pixel(4, 3), BG);
        assert_eq!(canvas.pixel(5, 2), BG);
        assert_eq!(canvas.pixel(15, 16), BG);
        // the gap in the middle of the H
        assert_eq!(canvas.pixel(9, 3), BG);
    }

    #[test]
    fn test_drawn_ink_matches_measured_box() {
        let font = FontHandle::builtin(14);
        let glyph_box = measure(&font, 'A').unwrap();
        let mut canvas = Canvas::new(21, BG);
        draw_centered(&mut canvas, &font, 'A', WHITE).unwrap();

        let ink: Vec<(u32, u32)> = (0..21)
            .flat_map(|y| (0..21).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.pixel(x, y) == WHITE)
            .collect();
        let x0 = ink.iter().map(|p| p.0).min().unwrap();
        let x1 = ink.iter().map(|p| p.0).max().unwrap();
        let y0 = ink.iter().map(|p| p.1).min().unwrap();
        let y1 = ink.iter().map(|p| p.1).max().unwrap();

        // odd leftover space rounds toward the top left
        assert_eq!((x0, y0), (5, 3));
        assert_eq!((x1 - x0 + 1) as f32, glyph_box.width);
        assert_eq!((y1 - y0 + 1) as f32, glyph_box.height);
    }

    #[test]
    fn test_cjk_missing_from_builtin() {
        let mut canvas = Canvas::new(48, BG);
        let font = FontHandle::builtin(16);
        let err = draw_centered(&mut canvas, &font, '词', WHITE).unwrap_err();
        assert!(matches!(err, IconError::GlyphError { .. }));
        assert!(measure(&font, '词').is_err());
    }

    #[test]
    fn test_bitmap_too_small() {
        let mut canvas = Canvas::new(16, BG);
        let font = FontHandle::builtin(5);
        assert!(draw_centered(&mut canvas, &font, 'A', WHITE).is_err());
    }

    #[test]
    fn test_corrupt_outline_font_fails_cleanly() {
        let font = FontHandle {
            source: "corrupt".to_string(),
            size: 12,
            face: FontFace::Outline {
                data: std::sync::Arc::new(vec![0u8; 16]),
                index: 0,
            },
        };
        let mut canvas = Canvas::new(32, BG);
        assert!(draw_centered(&mut canvas, &font, 'A', WHITE).is_err());
    }
}
