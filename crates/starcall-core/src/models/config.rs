//! Configuration structures for dialog extraction.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StarcallError};
use crate::normalize::Replacement;

/// Main configuration for starcall.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StarcallConfig {
    /// OCR text normalization.
    pub normalizer: NormalizerConfig,

    /// Field extraction.
    pub extraction: ExtractionConfig,

    /// Call command output.
    pub command: CommandConfig,
}

/// Normalizer configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Misreadings repaired after the built-in table, in order.
    pub extra_replacements: Vec<Replacement>,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Treat any unrecovered field as an error instead of rendering a sentinel.
    pub strict: bool,
}

/// Call command configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// World used when none is given on the command line.
    pub default_world: Option<u16>,
}

impl StarcallConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<()> {
        if let Some(i) = self
            .normalizer
            .extra_replacements
            .iter()
            .position(|r| r.from.is_empty())
        {
            return Err(StarcallError::Config(format!(
                "normalizer.extra_replacements[{}] has an empty \"from\" pattern",
                i
            )));
        }
        Ok(())
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: StarcallConfig =
            serde_json::from_str(r#"{"command": {"default_world": 42}}"#).unwrap();

        assert_eq!(config.command.default_world, Some(42));
        assert!(!config.extraction.strict);
        assert!(config.normalizer.extra_replacements.is_empty());
    }

    #[test]
    fn test_empty_replacement_pattern_is_rejected() {
        let config: StarcallConfig = serde_json::from_str(
            r#"{"normalizer": {"extra_replacements": [{"from": "", "to": "x"}]}}"#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(matches!(err, StarcallError::Config(_)));
    }

    #[test]
    fn test_extra_replacements_from_json() {
        let config: StarcallConfig = serde_json::from_str(
            r#"{"normalizer": {"extra_replacements": [{"from": "rninutes", "to": "minutes"}]}}"#,
        )
        .unwrap();

        assert_eq!(
            config.normalizer.extra_replacements,
            vec![Replacement::new("rninutes", "minutes")]
        );
    }
}
