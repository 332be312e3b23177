use serde::Deserialize;
use std::path::Path;

use crate::encoders::int::ByteOrder;

const DEFAULT_INT_WIDTH: usize = 4;
const DEFAULT_SPAN_PRECISION: i32 = 5;

/// Global settings for convkit.
///
/// Every field is optional so that override files only need to name what
/// they change.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Charset label for text conversions (blank or unknown means UTF-8)
    #[serde(default)]
    pub charset: Option<String>,
    /// Byte order for fixed-width integers
    #[serde(default)]
    pub byte_order: Option<ByteOrder>,
    /// Width in bytes for fixed-width integers
    #[serde(default)]
    pub int_width: Option<usize>,
    /// Units shown when formatting time spans
    #[serde(default)]
    pub span_precision: Option<i32>,
}

impl Settings {
    /// Overlays the fields `other` sets onto `self`.
    pub fn merge(&mut self, other: Settings) {
        if other.charset.is_some() {
            self.charset = other.charset;
        }
        if other.byte_order.is_some() {
            self.byte_order = other.byte_order;
        }
        if other.int_width.is_some() {
            self.int_width = other.int_width;
        }
        if other.span_precision.is_some() {
            self.span_precision = other.span_precision;
        }
    }

    pub fn charset(&self) -> &str {
        self.charset.as_deref().unwrap_or("")
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order.unwrap_or_default()
    }

    pub fn int_width(&self) -> usize {
        self.int_width.unwrap_or(DEFAULT_INT_WIDTH)
    }

    pub fn span_precision(&self) -> i32 {
        self.span_precision.unwrap_or(DEFAULT_SPAN_PRECISION)
    }
}

/// Configuration loaded from TOML files.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConvertConfig {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl ConvertConfig {
    /// Parses configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in configuration.
    ///
    /// Returns the defaults bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../convkit.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in settings (from library)
    /// 2. `~/.config/convkit/convkit.toml` (user overrides)
    /// 3. `./convkit.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones field by field.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            config.merge_file(&config_dir.join("convkit").join("convkit.toml"), "user");
        }
        config.merge_file(Path::new("convkit.toml"), "local");

        Ok(config)
    }

    /// Merges the file at `path` when it exists.
    ///
    /// A file that exists but cannot be loaded leaves `self` unchanged and
    /// returns false after printing a warning naming `label`.
    pub fn merge_file(&mut self, path: &Path, label: &str) -> bool {
        if !path.exists() {
            return false;
        }

        match Self::load_from_file(path) {
            Ok(overrides) => {
                tracing::debug!(path = %path.display(), label, "merged config overrides");
                self.merge(overrides);
                true
            }
            Err(e) => {
                eprintln!(
                    "Warning: Failed to load {} config from {}: {}",
                    label,
                    path.display(),
                    e
                );
                false
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Settings present in `other` replace those in `self`.
    pub fn merge(&mut self, other: ConvertConfig) {
        self.settings.merge(other.settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = ConvertConfig::load_default().unwrap();
        assert_eq!(config.settings.charset(), "UTF-8");
        assert_eq!(config.settings.byte_order(), ByteOrder::Big);
        assert_eq!(config.settings.int_width(), 4);
        assert_eq!(config.settings.span_precision(), 5);
    }

    #[test]
    fn test_empty_config_uses_fallbacks() {
        let config = ConvertConfig::from_toml("").unwrap();
        assert_eq!(config.settings, Settings::default());
        assert_eq!(config.settings.charset(), "");
        assert_eq!(config.settings.byte_order(), ByteOrder::Big);
        assert_eq!(config.settings.int_width(), 4);
    }

    #[test]
    fn test_load_from_toml_string() {
        let toml_content = r#"
[settings]
charset = "shift_jis"
byte_order = "le"
int_width = 2
"#;
        let config = ConvertConfig::from_toml(toml_content).unwrap();
        assert_eq!(config.settings.charset(), "shift_jis");
        assert_eq!(config.settings.byte_order(), ByteOrder::Little);
        assert_eq!(config.settings.int_width(), 2);
        assert_eq!(config.settings.span_precision, None);
    }

    #[test]
    fn test_invalid_byte_order_rejected() {
        let toml_content = r#"
[settings]
byte_order = "middle"
"#;
        assert!(ConvertConfig::from_toml(toml_content).is_err());
    }

    #[test]
    fn test_merge_configs() {
        let mut base = ConvertConfig::load_default().unwrap();
        let overrides = ConvertConfig::from_toml(
            r#"
[settings]
byte_order = "little"
span_precision = 2
"#,
        )
        .unwrap();

        base.merge(overrides);

        assert_eq!(base.settings.byte_order(), ByteOrder::Little);
        assert_eq!(base.settings.span_precision(), 2);
        // Untouched fields keep the built-in values
        assert_eq!(base.settings.charset(), "UTF-8");
        assert_eq!(base.settings.int_width(), 4);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("convkit.toml");
        std::fs::write(&path, "[settings]\nint_width = 8\n").unwrap();

        let config = ConvertConfig::load_from_file(&path).unwrap();
        assert_eq!(config.settings.int_width(), 8);

        assert!(ConvertConfig::load_from_file(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_merge_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.toml");
        let bad = dir.path().join("bad.toml");
        std::fs::write(&good, "[settings]\nbyte_order = \"le\"\n").unwrap();
        std::fs::write(&bad, "[settings]\nint_width = \"wide\"\n").unwrap();

        let mut config = ConvertConfig::load_default().unwrap();
        assert!(!config.merge_file(&dir.path().join("missing.toml"), "user"));
        assert!(!config.merge_file(&bad, "local"));
        assert_eq!(config.settings.int_width(), 4);

        assert!(config.merge_file(&good, "local"));
        assert_eq!(config.settings.byte_order(), ByteOrder::Little);
        assert_eq!(config.settings.charset(), "UTF-8");
    }
}
