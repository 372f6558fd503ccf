//! `kitforge.toml` project configuration.
//!
//! # Example
//!
//! ```toml
//! catalog = "design/components.json"
//!
//! [generate]
//! mode = "responsive"
//! placeholder = "sample"
//!
//! [log]
//! level = "info"
//! ```
//!
//! Every key is optional. A relative `catalog` path is resolved against the
//! directory holding the config file.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use kitforge_codegen::Placeholder;
use kitforge_core::Registry;
use serde::Deserialize;
use tracing::debug;

/// File name looked up in the working directory.
pub(crate) const CONFIG_FILE: &str = "kitforge.toml";

// ── Types ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// JSON catalog replacing the built-in components.
    pub catalog: Option<PathBuf>,
    pub generate: GenerateSettings,
    pub log: LogSettings,
}

/// `[generate]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct GenerateSettings {
    pub mode: Option<Mode>,
    pub placeholder: Option<PlaceholderSetting>,
}

/// `[log]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LogSettings {
    /// A tracing filter directive such as `info` or `kitforge_core=debug`.
    pub level: Option<String>,
}

/// What `generate` emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Mode {
    /// Usage markup for the base props.
    #[default]
    Usage,
    /// The full component module source.
    Module,
    /// Base, per-breakpoint and merged renderings.
    Responsive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum PlaceholderSetting {
    Comment,
    Sample,
}

impl From<PlaceholderSetting> for Placeholder {
    fn from(setting: PlaceholderSetting) -> Self {
        match setting {
            PlaceholderSetting::Comment => Placeholder::Comment,
            PlaceholderSetting::Sample => Placeholder::Sample,
        }
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Read and parse a config file.
pub(crate) fn read_config(path: &Path) -> Result<Config, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read '{}': {}", path.display(), e))?;
    let mut config: Config = toml::from_str(&content)
        .map_err(|e| format!("could not parse '{}': {}", path.display(), e))?;

    if let Some(catalog) = config.catalog.take() {
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.catalog = Some(base.join(catalog));
    }
    Ok(config)
}

/// Find the active config: `explicit` if given, else `./kitforge.toml` when
/// present, else defaults.
pub(crate) fn discover(explicit: Option<&Path>) -> Result<Config, String> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let local = Path::new(CONFIG_FILE);
    if local.is_file() {
        debug!(path = %local.display(), "using local config");
        return read_config(local);
    }
    Ok(Config::default())
}

impl Config {
    /// The configured catalog, or the built-in registry.
    pub(crate) fn registry(&self) -> Result<Registry, String> {
        match &self.catalog {
            Some(path) => {
                debug!(path = %path.display(), "loading catalog");
                kitforge_core::load_registry(path).map_err(|e| e.to_string())
            }
            None => Ok(Registry::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.catalog.is_none());
        assert!(config.generate.mode.is_none());
        assert!(config.log.level.is_none());
    }

    #[test]
    fn parses_every_section() {
        let config: Config = toml::from_str(
            r#"
catalog = "components.json"

[generate]
mode = "module"
placeholder = "sample"

[log]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.catalog.as_deref(), Some(Path::new("components.json")));
        assert_eq!(config.generate.mode, Some(Mode::Module));
        assert_eq!(config.generate.placeholder, Some(PlaceholderSetting::Sample));
        assert_eq!(config.log.level.as_deref(), Some("debug"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = toml::from_str::<Config>("[generate]\nstyle = \"x\"\n").unwrap_err();
        assert!(err.to_string().contains("style"));
    }

    #[test]
    fn catalog_is_relative_to_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "catalog = \"ui/catalog.json\"\n").unwrap();
        let config = read_config(&path).unwrap();
        assert_eq!(config.catalog, Some(dir.path().join("ui/catalog.json")));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = discover(Some(Path::new("/nonexistent/kitforge.toml"))).unwrap_err();
        assert!(err.starts_with("could not read '/nonexistent/kitforge.toml'"));
    }
}
