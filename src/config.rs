/*============================================================
  Synavera Project: Deb-Stamp
  Module: debstamp::config
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Load optional operator configuration overriding the
    constant control fields and artifact output paths.

  Security / Safety Notes:
    Configuration is read only from an explicitly supplied
    path; no implicit search locations are consulted.

  Dependencies:
    serde and toml for configuration parsing.

  Operational Scope:
    Resolved once at startup before any artifact is written.

  Revision History:
    2026-10-14 COD  Introduced TOML configuration layer.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Built-in defaults preserve historical output
    - Partial files accepted; absent keys fall back
============================================================*/

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::artifact::{DEFAULT_CONTROL_PATH, DEFAULT_VERSION_PATH};
use crate::control::ControlFields;
use crate::error::{DebstampError, Result};

/// Top-level Deb-Stamp configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DebstampConfig {
    pub control: ControlFields,
    pub output: OutputConfig,
}

/// Artifact destinations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub control_path: PathBuf,
    pub version_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            control_path: PathBuf::from(DEFAULT_CONTROL_PATH),
            version_path: PathBuf::from(DEFAULT_VERSION_PATH),
        }
    }
}

impl DebstampConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    pub fn load_from_optional_path(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|err| {
            DebstampError::Config(format!(
                "Failed to read config {}: {err}",
                path.display()
            ))
        })?;
        Self::from_toml(&raw).map_err(|err| match err {
            DebstampError::Config(msg) => {
                DebstampError::Config(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|err| DebstampError::Config(err.to_string()))
    }

    pub fn control_path(&self) -> &Path {
        &self.output.control_path
    }

    pub fn version_path(&self) -> &Path {
        &self.output.version_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_path() {
        let config = DebstampConfig::load_from_optional_path(None).unwrap();
        assert_eq!(config, DebstampConfig::default());
        assert_eq!(
            config.control_path(),
            Path::new("./package/debian/DEBIAN/control")
        );
        assert_eq!(config.version_path(), Path::new("./VERSION"));
        assert_eq!(config.control.package, "verisure");
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = DebstampConfig::from_toml("").unwrap();
        assert_eq!(config, DebstampConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let raw = r#"
[control]
maintainer = "Release Team <release@example.org>"

[output]
version_path = "build/VERSION"
"#;
        let config = DebstampConfig::from_toml(raw).unwrap();

        assert_eq!(config.control.maintainer, "Release Team <release@example.org>");
        assert_eq!(config.control.section, "non-free/misc");
        assert_eq!(config.version_path(), Path::new("build/VERSION"));
        assert_eq!(
            config.control_path(),
            Path::new("./package/debian/DEBIAN/control")
        );
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = DebstampConfig::from_toml("[control\npackage = 1").unwrap_err();
        assert!(matches!(err, DebstampError::Config(_)));
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = DebstampConfig::load_from_optional_path(Some(&path)).unwrap_err();
        assert!(matches!(err, DebstampError::Config(_)));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debstamp.toml");
        std::fs::write(&path, "[control]\npackage = \"hub\"\nreplaces = \"hub\"\n").unwrap();

        let config = DebstampConfig::load(&path).unwrap();

        assert_eq!(config.control.package, "hub");
        assert_eq!(config.control.replaces, "hub");
    }
}
