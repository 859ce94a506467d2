//! Built-in 5x7 bitmap font, the last entry of every font chain.
//!
//! Covers ASCII digits and letters (lower case maps to upper case). Anything
//! else, CJK included, is reported as missing so the renderer falls back to
//! the placeholder shape.

pub const CELL_WIDTH: u32 = 5;
pub const CELL_HEIGHT: u32 = 7;

const DIGITS: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

const LETTERS: [[u8; 7]; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
    [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
    [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
    [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapGlyph {
    rows: [u8; 7],
}

/// Tight box of the lit cells, in cell units, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    pub min_col: u32,
    pub min_row: u32,
    pub max_col: u32,
    pub max_row: u32,
}

impl CellBounds {
    pub fn width(&self) -> u32 {
        self.max_col - self.min_col + 1
    }

    pub fn height(&self) -> u32 {
        self.max_row - self.min_row + 1
    }
}

impl BitmapGlyph {
    pub fn lookup(ch: char) -> Option<Self> {
        let ch = ch.to_ascii_uppercase();
        let rows = match ch {
            '0'..='9' => DIGITS[(ch as u8 - b'0') as usize],
            'A'..='Z' => LETTERS[(ch as u8 - b'A') as usize],
            _ => return None,
        };
        Some(Self { rows })
    }

    pub fn is_set(&self, col: u32, row: u32) -> bool {
        if col >= CELL_WIDTH || row >= CELL_HEIGHT {
            return false;
        }
        self.rows[row as usize] & (1 << (CELL_WIDTH - 1 - col)) != 0
    }

    /// Every glyph in the table lights at least one cell.
    pub fn bounds(&self) -> CellBounds {
        let mut bounds = CellBounds {
            min_col: CELL_WIDTH - 1,
            min_row: CELL_HEIGHT - 1,
            max_col: 0,
            max_row: 0,
        };
        for row in 0..CELL_HEIGHT {
            for col in 0..CELL_WIDTH {
                if self.is_set(col, row) {
                    bounds.min_col = bounds.min_col.min(col);
                    bounds.min_row = bounds.min_row.min(row);
                    bounds.max_col = bounds.max_col.max(col);
                    bounds.max_row = bounds.max_row.max(row);
                }
            }
        }
        bounds
    }

    /// Lit cells as (col, row) pairs.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..CELL_HEIGHT)
            .flat_map(|row| (0..CELL_WIDTH).map(move |col| (col, row)))
            .filter(|&(col, row)| self.is_set(col, row))
    }
}

/// Edge length in pixels of one font cell at the given point size.
pub fn cell_scale(font_size: u32) -> u32 {
    font_size / CELL_HEIGHT
}
