pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::IconConfig, Settings};

pub use core::{
    engine::IconEngine,
    font::FontChain,
    renderer::{render, IconRenderer},
};
pub use domain::model::{GlyphOutcome, Palette, RenderReport, RunSummary};
pub use domain::ports::WritePolicy;
pub use utils::error::{IconError, Result};
