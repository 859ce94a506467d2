use crate::core::canvas::Canvas;
use crate::core::font::FontChain;
use crate::core::glyph;
use crate::core::layout::Layout;
use crate::domain::model::{GlyphOutcome, Palette, RenderReport};
use crate::utils::error::{IconError, Result};
use std::path::Path;

/// The default overlay character, "word".
pub const DEFAULT_GLYPH: char = '词';

pub struct IconRenderer {
    fonts: FontChain,
    palette: Palette,
    glyph: char,
}

impl IconRenderer {
    pub fn new(fonts: FontChain, palette: Palette, glyph: char) -> Self {
        Self {
            fonts,
            palette,
            glyph,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Draws the icon in memory.
    pub fn render_canvas(&self, size: u32) -> (Canvas, GlyphOutcome) {
        let layout = Layout::new(size);
        let mut canvas = Canvas::new(size, self.palette.background);

        // 書頁
        canvas.fill_rect(layout.page(), self.palette.page);
        canvas.outline_rect(layout.page_border(), self.palette.border);

        // 文字行
        for bar in layout.text_bars() {
            canvas.fill_rect(bar, self.palette.text_bar);
        }

        let font = self.fonts.acquire(layout.font_size());
        if font.is_builtin() {
            tracing::debug!("Size {}: no font file loaded, using {}", size, font.source);
        }
        let outcome = match glyph::draw_centered(&mut canvas, &font, self.glyph, self.palette.glyph)
        {
            Ok(()) => GlyphOutcome::Drawn {
                source: font.source.clone(),
            },
            Err(e) => {
                tracing::debug!("Size {}: {}, drawing placeholder", size, e);
                canvas.fill_rect(layout.placeholder(), self.palette.placeholder);
                GlyphOutcome::Placeholder {
                    reason: e.to_string(),
                }
            }
        };

        (canvas, outcome)
    }

    pub fn render_png(&self, size: u32) -> Result<(Vec<u8>, GlyphOutcome)> {
        let (canvas, outcome) = self.render_canvas(size);
        let bytes = canvas.encode_png()?;
        Ok((bytes, outcome))
    }

    /// Renders one icon and writes it to `output_path`.
    pub fn render(&self, size: u32, output_path: impl AsRef<Path>) -> Result<RenderReport> {
        let path = output_path.as_ref();
        let (bytes, glyph) = self.render_png(size)?;
        std::fs::write(path, bytes).map_err(|source| IconError::WriteError {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(RenderReport {
            size,
            path: path.to_path_buf(),
            glyph,
        })
    }
}

impl Default for IconRenderer {
    fn default() -> Self {
        Self::new(FontChain::default(), Palette::default(), DEFAULT_GLYPH)
    }
}

/// Renders one icon with the default fonts, palette and glyph.
pub fn render(size: u32, output_path: impl AsRef<Path>) -> Result<RenderReport> {
    IconRenderer::default().render(size, output_path)
}
