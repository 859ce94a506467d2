use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Font source '{source_name}' unavailable: {reason}")]
    FontError { source_name: String, reason: String },

    #[error("Cannot render glyph '{glyph}': {reason}")]
    GlyphError { glyph: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Output,
    Font,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl IconError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IconError::ConfigValidationError { .. } | IconError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            IconError::IoError(_) | IconError::WriteError { .. } => ErrorCategory::Output,
            IconError::FontError { .. } => ErrorCategory::Font,
            IconError::ImageError(_) | IconError::GlyphError { .. } => ErrorCategory::Rendering,
        }
    }

    /// 字型與字形錯誤都有備援路徑，不會讓整個流程失敗
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            IconError::FontError { .. } | IconError::GlyphError { .. } => ErrorSeverity::Low,
            IconError::ConfigValidationError { .. } | IconError::InvalidConfigValueError { .. } => {
                ErrorSeverity::High
            }
            IconError::IoError(_) | IconError::WriteError { .. } => ErrorSeverity::Medium,
            IconError::ImageError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IconError::WriteError { path, .. } => {
                format!("Could not write icon file {}", path.display())
            }
            IconError::IoError(e) => format!("File system error: {}", e),
            IconError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            IconError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for {}: {}", value, field, reason),
            IconError::FontError { source_name, .. } => {
                format!("Font '{}' could not be loaded", source_name)
            }
            IconError::GlyphError { glyph, .. } => format!("Glyph '{}' could not be drawn", glyph),
            IconError::ImageError(e) => format!("PNG encoding failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command line flags and the TOML config file, then retry"
            }
            ErrorCategory::Output => {
                "Make sure the output directory exists and is writable, or use --on-write-error skip"
            }
            ErrorCategory::Font => "Pass an existing font file with --font",
            ErrorCategory::Rendering => "Report this as a bug together with the requested sizes",
        }
    }

    /// 依嚴重程度決定程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, IconError>;
