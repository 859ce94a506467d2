use crate::domain::model::Palette;
use crate::domain::ports::WritePolicy;
use crate::utils::error::{IconError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub output: OutputConfig,
    pub glyph: GlyphConfig,
    pub palette: Option<Palette>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: Option<String>,
    pub file_name: Option<String>,
    pub sizes: Option<Vec<u32>>,
    pub on_write_error: Option<WritePolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub text: Option<String>,
    pub fonts: Option<Vec<String>>,
}

impl IconConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(IconError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| IconError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${FONT_DIR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| IconError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(dir) = &self.output.dir {
            validation::validate_path("output.dir", dir)?;
        }

        if let Some(template) = &self.output.file_name {
            validation::validate_file_name_template("output.file_name", template)?;
        }

        if let Some(sizes) = &self.output.sizes {
            validation::validate_sizes("output.sizes", sizes)?;
        }

        if let Some(text) = &self.glyph.text {
            validation::validate_single_char("glyph.text", text)?;
        }

        if let Some(fonts) = &self.glyph.fonts {
            for font in fonts {
                validation::validate_path("glyph.fonts", font)?;
            }
        }

        Ok(())
    }
}

impl Validate for IconConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[output]
dir = "./icons"
file_name = "logo{size}.png"
sizes = [16, 48]
on_write_error = "skip"

[glyph]
text = "A"
fonts = ["DejaVuSans.ttf"]

[palette]
background = [0, 0, 0, 255]
"#;

        let config = IconConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.output.dir.as_deref(), Some("./icons"));
        assert_eq!(config.output.sizes, Some(vec![16, 48]));
        assert_eq!(config.output.on_write_error, Some(WritePolicy::Skip));
        assert_eq!(config.glyph.text.as_deref(), Some("A"));

        // 未指定的顏色沿用預設值
        let palette = config.palette.unwrap();
        assert_eq!(palette.background, [0, 0, 0, 255]);
        assert_eq!(palette.placeholder, Palette::default().placeholder);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = IconConfig::from_toml_str("").unwrap();
        assert!(config.output.sizes.is_none());
        assert!(config.palette.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EXT_ICONS_TEST_OUT", "/tmp/ext-icons");

        let toml_content = r#"
[output]
dir = "${EXT_ICONS_TEST_OUT}"
file_name = "${EXT_ICONS_UNDEFINED_VAR}{size}.png"
"#;

        let config = IconConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output.dir.as_deref(), Some("/tmp/ext-icons"));
        assert_eq!(
            config.output.file_name.as_deref(),
            Some("${EXT_ICONS_UNDEFINED_VAR}{size}.png")
        );

        std::env::remove_var("EXT_ICONS_TEST_OUT");
    }

    #[test]
    fn test_config_validation() {
        let config = IconConfig::from_toml_str("[output]\nsizes = [16, 0]\n").unwrap();
        assert!(config.validate().is_err());

        let config = IconConfig::from_toml_str("[glyph]\ntext = \"ab\"\n").unwrap();
        assert!(config.validate().is_err());

        assert!(IconConfig::from_toml_str("[output]\non_write_error = \"retry\"\n").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nsizes = [128]\n")
            .unwrap();

        let config = IconConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output.sizes, Some(vec![128]));
    }
}
