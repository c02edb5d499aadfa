// Decoder settings, loadable from a JSON file

use crate::account::DEFAULT_PLACEHOLDER;
use crate::glyph;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Character printed for an unreadable digit
    pub placeholder: char,

    /// Reject entries whose rows are not exactly 27 characters
    pub strict_width: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        OcrConfig {
            placeholder: DEFAULT_PLACEHOLDER,
            strict_width: false,
        }
    }
}

impl OcrConfig {
    /// Load settings from a JSON file; missing fields keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: OcrConfig = serde_json::from_str(&content)
            .context("Failed to parse config JSON")?;

        config.validate()?;
        Ok(config)
    }

    /// A placeholder that looks like a digit or a glyph stroke would be
    /// indistinguishable from real output
    pub fn validate(&self) -> Result<()> {
        if self.placeholder.is_ascii_digit() {
            bail!("placeholder '{}' is a digit", self.placeholder);
        }
        if glyph::is_allowed(self.placeholder) {
            bail!("placeholder {:?} is a glyph character", self.placeholder);
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = OcrConfig::default();
        assert_eq!(config.placeholder, '?');
        assert!(!config.strict_width);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_full() {
        let file = write_config(r#"{ "placeholder": "*", "strict_width": true }"#);
        let config = OcrConfig::from_file(file.path()).unwrap();
        assert_eq!(config.placeholder, '*');
        assert!(config.strict_width);
    }

    #[test]
    fn test_from_file_partial_uses_defaults() {
        let file = write_config(r#"{ "strict_width": true }"#);
        let config = OcrConfig::from_file(file.path()).unwrap();
        assert_eq!(config.placeholder, '?');
        assert!(config.strict_width);
    }

    #[test]
    fn test_from_file_rejects_digit_placeholder() {
        let file = write_config(r#"{ "placeholder": "7" }"#);
        assert!(OcrConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_rejects_glyph_placeholder() {
        let config = OcrConfig {
            placeholder: '_',
            ..OcrConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let result = OcrConfig::from_file("does_not_exist.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_bad_json() {
        let file = write_config("{ not json");
        assert!(OcrConfig::from_file(file.path()).is_err());
    }
}
