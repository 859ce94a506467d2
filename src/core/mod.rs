pub mod bitmap_font;
pub mod canvas;
pub mod engine;
pub mod font;
pub mod glyph;
pub mod layout;
pub mod renderer;

pub use crate::domain::model::{GlyphOutcome, Palette, Rect, RenderReport};
pub use crate::domain::ports::{ConfigProvider, Storage, WritePolicy};
pub use crate::utils::error::Result;
