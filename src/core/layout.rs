use crate::domain::model::Rect;

/// Number of horizontal "text line" bars on the page.
pub const TEXT_BAR_COUNT: i64 = 3;

/// Icon geometry, all coordinates integer fractions of the edge length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    size: i64,
}

impl Layout {
    pub fn new(size: u32) -> Self {
        Self { size: size as i64 }
    }

    /// The white page in the middle half of the icon.
    pub fn page(&self) -> Rect {
        let s = self.size;
        Rect::new(s / 4, s / 4, s * 3 / 4, s * 3 / 4)
    }

    /// Thin border two pixels inside the page.
    pub fn page_border(&self) -> Rect {
        let page = self.page();
        Rect::new(page.x0 + 2, page.y0 + 2, page.x1 - 2, page.y1 - 2)
    }

    pub fn line_spacing(&self) -> i64 {
        self.size / 12
    }

    pub fn text_bars(&self) -> Vec<Rect> {
        let s = self.size;
        let start_y = s / 3;
        (0..TEXT_BAR_COUNT)
            .map(|i| {
                let y = start_y + i * self.line_spacing();
                Rect::new(s / 3, y, s * 2 / 3, y + 2)
            })
            .collect()
    }

    /// Stand-in book shape used when the glyph cannot be drawn.
    pub fn placeholder(&self) -> Rect {
        let s = self.size;
        Rect::new(s / 3, s / 6, s * 2 / 3, s * 5 / 6)
    }

    pub fn font_size(&self) -> u32 {
        (self.size / 3) as u32
    }
}
