use crate::error::{Result, SolidError};
use crate::html::{LineEnding, RenderOptions, DEFAULT_INDENT_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`SolidConfig::get`] and [`SolidConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["indent-size", "line-ending", "catalog"];

/// Configuration for solidkit, stored as config.json in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SolidConfig {
    /// Spaces per nesting level when rendering trees
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Line terminator for rendered trees
    #[serde(default)]
    pub line_ending: LineEnding,

    /// Catalog file used when no --catalog is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

fn default_indent_size() -> usize {
    DEFAULT_INDENT_SIZE
}

pub(crate) fn unknown_key(key: &str) -> SolidError {
    SolidError::invalid(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

impl Default for SolidConfig {
    fn default() -> Self {
        Self {
            indent_size: DEFAULT_INDENT_SIZE,
            line_ending: LineEnding::Lf,
            catalog: None,
        }
    }
}

impl SolidConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: SolidConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Current value of `key` as displayed to users, `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "indent-size" => Some(self.indent_size.to_string()),
            "line-ending" => Some(self.line_ending.to_string()),
            "catalog" => Some(
                self.catalog
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Parse and store `value` under `key`. An empty catalog value unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "indent-size" => {
                let size: usize = value.trim().parse().map_err(|_| {
                    SolidError::invalid(format!("indent-size must be a number, got {}", value))
                })?;
                // Same rule the renderer enforces.
                RenderOptions::new(size, self.line_ending)?;
                self.indent_size = size;
            }
            "line-ending" => self.line_ending = value.parse()?,
            "catalog" => {
                let value = value.trim();
                self.catalog = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Render options from this config, with an optional indent override.
    pub fn render_options(&self, indent_override: Option<usize>) -> Result<RenderOptions> {
        RenderOptions::new(
            indent_override.unwrap_or(self.indent_size),
            self.line_ending,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolidConfig::default();
        assert_eq!(config.indent_size, 2);
        assert_eq!(config.line_ending, LineEnding::Lf);
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = SolidConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, SolidConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = SolidConfig::default();
        config.set("indent-size", "4").unwrap();
        config.set("line-ending", "crlf").unwrap();
        config.save(&dir).unwrap();

        let loaded = SolidConfig::load(&dir).unwrap();
        assert_eq!(loaded.indent_size, 4);
        assert_eq!(loaded.line_ending, LineEnding::Crlf);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"line_ending":"crlf"}"#,
        )
        .unwrap();

        let config = SolidConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.indent_size, 2);
        assert_eq!(config.line_ending, LineEnding::Crlf);
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let mut config = SolidConfig::default();
        config.set("catalog", "/tmp/products.json").unwrap();
        assert_eq!(config.get("indent-size").as_deref(), Some("2"));
        assert_eq!(config.get("line-ending").as_deref(), Some("lf"));
        assert_eq!(config.get("catalog").as_deref(), Some("/tmp/products.json"));
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = SolidConfig::default();
        assert!(config.set("indent-size", "0").is_err());
        assert!(config.set("indent-size", "two").is_err());
        assert!(config.set("line-ending", "cr").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, SolidConfig::default());
    }

    #[test]
    fn test_empty_catalog_unsets() {
        let mut config = SolidConfig::default();
        config.set("catalog", "products.json").unwrap();
        config.set("catalog", "").unwrap();
        assert_eq!(config.catalog, None);
    }

    #[test]
    fn test_render_options_override() {
        let config = SolidConfig::default();
        assert_eq!(config.render_options(None).unwrap().indent_size(), 2);
        assert_eq!(config.render_options(Some(3)).unwrap().indent_size(), 3);
        assert!(config.render_options(Some(0)).is_err());
    }
}
