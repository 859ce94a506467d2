use crate::domain::model::Palette;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub trait Storage: Send + Sync {
    /// Writes `data` to `name` and returns the full path of the written file.
    fn write_file(&self, name: &str, data: &[u8]) -> Result<PathBuf>;

    /// Path a file named `name` would be written to.
    fn resolve(&self, name: &str) -> PathBuf;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum WritePolicy {
    /// Abort the run on the first write error
    #[default]
    Fail,
    /// Log the error, skip that size and continue
    Skip,
}

pub trait ConfigProvider: Send + Sync {
    fn output_dir(&self) -> &Path;
    fn file_name_template(&self) -> &str;
    fn sizes(&self) -> &[u32];
    fn glyph(&self) -> char;
    fn font_candidates(&self) -> &[String];
    fn palette(&self) -> &Palette;
    fn write_policy(&self) -> WritePolicy;
}
