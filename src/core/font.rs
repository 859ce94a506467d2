//! Font acquisition: an ordered chain of sources, first success wins, with
//! the built-in bitmap font as the sentinel that never fails.

use crate::utils::error::{IconError, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const DEFAULT_FONT_CANDIDATES: [&str; 2] = ["arial.ttf", "simsun.ttc"];

pub const BUILTIN_FONT_NAME: &str = "built-in 5x7";

#[derive(Debug, Clone)]
pub enum FontFace {
    /// TrueType/OpenType data, already checked to parse at `index`.
    Outline { data: Arc<Vec<u8>>, index: u32 },
    Bitmap,
}

#[derive(Debug, Clone)]
pub struct FontHandle {
    pub source: String,
    /// Em size in pixels.
    pub size: u32,
    pub face: FontFace,
}

impl FontHandle {
    pub fn builtin(size: u32) -> Self {
        Self {
            source: BUILTIN_FONT_NAME.to_string(),
            size,
            face: FontFace::Bitmap,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, FontFace::Bitmap)
    }
}

pub trait FontSource: Send + Sync {
    fn name(&self) -> &str;
    fn load(&self, size: u32) -> Result<FontHandle>;
}

/// A font file given by path, or by bare file name looked up in the usual
/// system font directories.
#[derive(Debug, Clone)]
pub struct FileFontSource {
    name: String,
    search_dirs: Vec<PathBuf>,
}

impl FileFontSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            search_dirs: system_font_dirs(),
        }
    }

    pub fn with_search_dirs(name: impl Into<String>, search_dirs: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            search_dirs,
        }
    }

    fn resolve(&self) -> Option<PathBuf> {
        let direct = Path::new(&self.name);
        if direct.is_file() {
            return Some(direct.to_path_buf());
        }
        // 只有純檔名才去系統字型目錄找
        if direct.components().count() != 1 {
            return None;
        }
        self.search_dirs
            .iter()
            .map(|dir| dir.join(&self.name))
            .find(|candidate| candidate.is_file())
    }

    fn error(&self, reason: impl Into<String>) -> IconError {
        IconError::FontError {
            source_name: self.name.clone(),
            reason: reason.into(),
        }
    }
}

impl FontSource for FileFontSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self, size: u32) -> Result<FontHandle> {
        if size == 0 {
            return Err(self.error("point size must be positive"));
        }

        let path = self
            .resolve()
            .ok_or_else(|| self.error("file not found"))?;
        let data = std::fs::read(&path)
            .map_err(|e| self.error(format!("{}: {}", path.display(), e)))?;

        // Collections (.ttc) use their first face.
        let index = 0;
        ttf_parser::Face::parse(&data, index)
            .map_err(|e| self.error(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Loaded font {} from {}", self.name, path.display());
        Ok(FontHandle {
            source: path.display().to_string(),
            size,
            face: FontFace::Outline {
                data: Arc::new(data),
                index,
            },
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFontSource;

impl FontSource for BuiltinFontSource {
    fn name(&self) -> &str {
        BUILTIN_FONT_NAME
    }

    fn load(&self, size: u32) -> Result<FontHandle> {
        Ok(FontHandle::builtin(size))
    }
}

pub struct FontChain {
    sources: Vec<Box<dyn FontSource>>,
}

impl FontChain {
    /// File candidates in order, then the built-in font.
    pub fn from_candidates<S: AsRef<str>>(candidates: &[S]) -> Self {
        let sources = candidates
            .iter()
            .map(|name| Box::new(FileFontSource::new(name.as_ref())) as Box<dyn FontSource>)
            .collect();
        Self::new(sources)
    }

    /// The built-in font is always appended after `sources`.
    pub fn new(mut sources: Vec<Box<dyn FontSource>>) -> Self {
        sources.push(Box::new(BuiltinFontSource));
        Self { sources }
    }

    pub fn builtin_only() -> Self {
        Self::new(Vec::new())
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    pub fn acquire(&self, size: u32) -> FontHandle {
        for source in &self.sources {
            match source.load(size) {
                Ok(handle) => return handle,
                Err(e) => tracing::debug!("Skipping font source: {}", e),
            }
        }
        FontHandle::builtin(size)
    }
}

impl Default for FontChain {
    fn default() -> Self {
        Self::from_candidates(&DEFAULT_FONT_CANDIDATES)
    }
}

fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(windir) = std::env::var("WINDIR") {
        dirs.push(PathBuf::from(windir).join("Fonts"));
    }
    dirs.extend(
        [
            "/usr/share/fonts/truetype",
            "/usr/share/fonts",
            "/usr/local/share/fonts",
            "/Library/Fonts",
            "/System/Library/Fonts",
        ]
        .iter()
        .map(PathBuf::from),
    );
    if let Ok(home) = std::env::var("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    dirs
}
