pub mod cli;
pub mod toml_config;

use crate::core::engine::{DEFAULT_FILE_NAME, DEFAULT_SIZES};
use crate::core::font::DEFAULT_FONT_CANDIDATES;
use crate::core::renderer::DEFAULT_GLYPH;
use crate::core::ConfigProvider;
use crate::domain::model::Palette;
use crate::domain::ports::WritePolicy;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use toml_config::IconConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "ext-icons")]
#[command(about = "Generate browser-extension icons (icon16.png ... icon128.png)")]
pub struct CliConfig {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the icons are written to [default: .]
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Icon edge lengths in pixels [default: 16,32,48,128]
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<u32>>,

    /// Character drawn in the middle of the icon [default: 词]
    #[arg(long)]
    pub glyph: Option<String>,

    /// Font file to try, in order; replaces the default candidates
    #[arg(long = "font")]
    pub fonts: Vec<String>,

    /// What to do when an icon file cannot be written
    #[arg(long, value_enum)]
    pub on_write_error: Option<WritePolicy>,

    /// Print the files that would be written and exit
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Resolved configuration: command line over TOML over built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub file_name: String,
    pub sizes: Vec<u32>,
    pub glyph: char,
    pub fonts: Vec<String>,
    pub palette: Palette,
    pub on_write_error: WritePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            file_name: DEFAULT_FILE_NAME.to_string(),
            sizes: DEFAULT_SIZES.to_vec(),
            glyph: DEFAULT_GLYPH,
            fonts: DEFAULT_FONT_CANDIDATES.iter().map(|s| s.to_string()).collect(),
            palette: Palette::default(),
            on_write_error: WritePolicy::default(),
        }
    }
}

impl Settings {
    pub fn apply_toml(mut self, config: &IconConfig) -> Result<Self> {
        config.validate()?;

        if let Some(dir) = &config.output.dir {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(file_name) = &config.output.file_name {
            self.file_name = file_name.clone();
        }
        if let Some(sizes) = &config.output.sizes {
            self.sizes = sizes.clone();
        }
        if let Some(policy) = config.output.on_write_error {
            self.on_write_error = policy;
        }
        if let Some(text) = &config.glyph.text {
            self.glyph = validation::validate_single_char("glyph.text", text)?;
        }
        if let Some(fonts) = &config.glyph.fonts {
            self.fonts = fonts.clone();
        }
        if let Some(palette) = config.palette {
            self.palette = palette;
        }
        Ok(self)
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli(mut self, cli: &CliConfig) -> Result<Self> {
        if let Some(dir) = &cli.output_dir {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(sizes) = &cli.sizes {
            self.sizes = sizes.clone();
        }
        if let Some(glyph) = &cli.glyph {
            self.glyph = validation::validate_single_char("--glyph", glyph)?;
        }
        if !cli.fonts.is_empty() {
            self.fonts = cli.fonts.clone();
        }
        if let Some(policy) = cli.on_write_error {
            self.on_write_error = policy;
        }
        Ok(self)
    }

    /// Loads the TOML file named by `--config`, if any, then applies the
    /// command line on top.
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(path) = &cli.config {
            let file = IconConfig::from_file(path)?;
            settings = settings.apply_toml(&file)?;
        }
        let settings = settings.apply_cli(cli)?;
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("output_dir", &self.output_dir.to_string_lossy())?;
        validation::validate_file_name_template("file_name", &self.file_name)?;
        validation::validate_sizes("sizes", &self.sizes)?;
        for font in &self.fonts {
            validation::validate_path("fonts", font)?;
        }
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn file_name_template(&self) -> &str {
        &self.file_name
    }

    fn sizes(&self) -> &[u32] {
        &self.sizes
    }

    fn glyph(&self) -> char {
        self.glyph
    }

    fn font_candidates(&self) -> &[String] {
        &self.fonts
    }

    fn palette(&self) -> &Palette {
        &self.palette
    }

    fn write_policy(&self) -> WritePolicy {
        self.on_write_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_extension_icon_set() {
        let settings = Settings::default();
        assert_eq!(settings.sizes, vec![16, 32, 48, 128]);
        assert_eq!(settings.file_name, "icon{size}.png");
        assert_eq!(settings.glyph, '词');
        assert_eq!(settings.fonts, vec!["arial.ttf", "simsun.ttc"]);
        assert_eq!(settings.on_write_error, WritePolicy::Fail);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let file = IconConfig::from_toml_str(
            "[output]\nsizes = [64]\n[glyph]\ntext = \"W\"\nfonts = []\n",
        )
        .unwrap();
        let settings = Settings::default().apply_toml(&file).unwrap();

        assert_eq!(settings.sizes, vec![64]);
        assert_eq!(settings.glyph, 'W');
        assert!(settings.fonts.is_empty());
        assert_eq!(settings.file_name, "icon{size}.png");
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_toml() {
        let file = IconConfig::from_toml_str("[output]\nsizes = [64]\ndir = \"from-toml\"\n").unwrap();
        let cli = CliConfig::parse_from([
            "ext-icons",
            "--sizes",
            "16,32",
            "--font",
            "a.ttf",
            "--font",
            "b.ttf",
            "--on-write-error",
            "skip",
        ]);

        let settings = Settings::default()
            .apply_toml(&file)
            .unwrap()
            .apply_cli(&cli)
            .unwrap();

        assert_eq!(settings.sizes, vec![16, 32]);
        assert_eq!(settings.output_dir, PathBuf::from("from-toml"));
        assert_eq!(settings.fonts, vec!["a.ttf", "b.ttf"]);
        assert_eq!(settings.on_write_error, WritePolicy::Skip);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_resolve_rejects_bad_glyph() {
        let cli = CliConfig::parse_from(["ext-icons", "--glyph", "词典"]);
        assert!(Settings::resolve(&cli).is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_resolve_rejects_zero_size() {
        let cli = CliConfig::parse_from(["ext-icons", "--sizes", "0"]);
        assert!(Settings::resolve(&cli).is_err());
    }
}
