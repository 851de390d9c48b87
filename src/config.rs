//! Configuration file (mesh-colour.yaml) parsing.
//!
//! The config file is optional. It can name colours for use as `$name` on
//! the command line and set the default output mode.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ColourError, Result};
use crate::types::Colour;

/// Default config filename, looked up in the current directory.
pub const CONFIG_FILENAME: &str = "mesh-colour.yaml";

/// Configuration loaded from mesh-colour.yaml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Named colours, referenced as `$name`.
    pub named: BTreeMap<String, Colour>,

    /// Emit JSON instead of text by default.
    pub json: bool,
}

impl Config {
    /// Load config from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ColourError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse config from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| ColourError::Config {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Without one, `mesh-colour.yaml` in `dir`
    /// is used when present, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path: PathBuf = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            log::debug!("loading config from {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve a colour argument: `$name` through the named table, anything
    /// else as hex or CSS.
    pub fn resolve(&self, input: &str) -> Result<Colour> {
        let input = input.trim();

        match input.strip_prefix('$') {
            Some(name) => self
                .named
                .get(name)
                .map(Colour::copy)
                .ok_or_else(|| ColourError::Parse {
                    message: format!("Undefined colour: ${}", name),
                    help: if self.named.is_empty() {
                        Some(format!("Define named colours in {}", CONFIG_FILENAME))
                    } else {
                        let names: Vec<&str> = self.named.keys().map(|s| s.as_str()).collect();
                        Some(format!("Known colours: {}", names.join(", ")))
                    },
                }),
            None => input.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_named() {
        let config = Config::parse(
            "named:\n  brand: \"#ff8800\"\n  shadow: \"rgba(0, 0, 0, 0.5)\"\njson: true\n",
        )
        .unwrap();

        assert!(config.json);
        assert_eq!(config.named["brand"], Colour::rgb(255, 136, 0));
        assert_eq!(config.named["shadow"], Colour::new(0, 0, 0, 0.5));
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config = Config::parse("{}").unwrap();
        assert!(!config.json);
        assert!(config.named.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_colour() {
        let err = Config::parse("named:\n  oops: \"#12345\"\n").unwrap_err();
        assert!(matches!(err, ColourError::Config { .. }));
    }

    #[test]
    fn test_resolve() {
        let config = Config::parse("named:\n  brand: \"#f80\"\n").unwrap();

        assert_eq!(config.resolve("$brand").unwrap(), Colour::rgb(255, 136, 0));
        assert_eq!(config.resolve(" #000 ").unwrap(), Colour::black());
        assert!(config.resolve("$missing").is_err());
        assert!(config.resolve("purple").is_err());
    }

    #[test]
    fn test_discover_default_when_missing() {
        let dir = tempdir().unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert!(config.named.is_empty());
    }

    #[test]
    fn test_discover_finds_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "json: true\n").unwrap();

        let config = Config::discover(None, dir.path()).unwrap();
        assert!(config.json);
    }

    #[test]
    fn test_discover_explicit_missing_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = Config::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, ColourError::Io { .. }));
    }
}
