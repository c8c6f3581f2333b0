//! Configuration for totypescript.
//!
//! Loads config from:
//! 1. Global: ~/.config/totypescript/config.toml
//! 2. Per-project: .totypescript/config.toml (overrides global per section)
//!
//! Example config.toml:
//! ```toml
//! [fixes]
//! ids = ["requireInTs", "fixUnreachableCode", "fixAwaitInSyncFunction"]
//! command = ["node", "tools/apply-fixes.js"]
//!
//! [format]
//! indent_size = 4
//! convert_tabs_to_spaces = false
//!
//! [transpiler]
//! command = ["npx", "decaffeinate"]
//!
//! [walk]
//! skip_dirs = ["node_modules", "dist"]
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use totypescript_tools::FormatSettings;

/// Combined code fixes run by the `typescript` conversion, in order.
pub const DEFAULT_FIX_IDS: &[&str] = &[
    "requireInTs",
    "fixUnreachableCode",
    "fixAwaitInSyncFunction",
    "fixMissingImport",
    "fixMissingMember",
    "inferFromUsage",
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Code-fix configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FixesConfig {
    /// Combined code fix ids, applied in order.
    pub ids: Vec<String>,
    /// Language-service command that applies them; empty disables fixes.
    pub command: Vec<String>,
}

impl Default for FixesConfig {
    fn default() -> Self {
        Self {
            ids: DEFAULT_FIX_IDS.iter().map(|s| s.to_string()).collect(),
            command: Vec::new(),
        }
    }
}

/// Formatting used for code inserted by fixes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    pub indent_size: u32,
    pub tab_size: u32,
    pub convert_tabs_to_spaces: bool,
    pub new_line: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        let settings = FormatSettings::default();
        Self {
            indent_size: settings.indent_size,
            tab_size: settings.tab_size,
            convert_tabs_to_spaces: settings.convert_tabs_to_spaces,
            new_line: settings.new_line,
        }
    }
}

impl From<&FormatConfig> for FormatSettings {
    fn from(config: &FormatConfig) -> Self {
        Self {
            indent_size: config.indent_size,
            tab_size: config.tab_size,
            convert_tabs_to_spaces: config.convert_tabs_to_spaces,
            new_line: config.new_line.clone(),
        }
    }
}

/// CoffeeScript transpiler configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TranspilerConfig {
    /// Explicit command; empty means look up `decaffeinate`.
    pub command: Vec<String>,
}

/// Directory walk configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Directory names never descended into.
    pub skip_dirs: Vec<String>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            skip_dirs: vec!["node_modules".to_string()],
        }
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub fixes: FixesConfig,
    pub format: FormatConfig,
    pub transpiler: TranspilerConfig,
    pub walk: WalkConfig,
}

/// One config file as written; absent sections leave the lower layer alone.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub fixes: Option<FixesConfig>,
    pub format: Option<FormatConfig>,
    pub transpiler: Option<TranspilerConfig>,
    pub walk: Option<WalkConfig>,
}

impl Config {
    /// Load configuration for a project.
    ///
    /// Unreadable or invalid files are skipped with a warning.
    pub fn load(root: &Path) -> Self {
        let mut config = Self::default();

        let layers = Self::global_config_path()
            .into_iter()
            .chain(std::iter::once(Self::project_config_path(root)));
        for path in layers {
            match Self::load_file(&path) {
                Ok(Some(file)) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    config = config.merge(file);
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("{e}"),
            }
        }

        config
    }

    pub fn project_config_path(root: &Path) -> PathBuf {
        root.join(".totypescript").join("config.toml")
    }

    /// Get the global config path.
    pub fn global_config_path() -> Option<PathBuf> {
        let config_home = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
        Some(config_home.join("totypescript").join("config.toml"))
    }

    /// Parse one config file; `Ok(None)` when it does not exist.
    pub fn load_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Sections present in `file` replace ours.
    pub fn merge(self, file: ConfigFile) -> Self {
        Self {
            fixes: file.fixes.unwrap_or(self.fixes),
            format: file.format.unwrap_or(self.format),
            transpiler: file.transpiler.unwrap_or(self.transpiler),
            walk: file.walk.unwrap_or(self.walk),
        }
    }

    pub fn format_settings(&self) -> FormatSettings {
        FormatSettings::from(&self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_project_config(dir: &TempDir, content: &str) {
        let config_dir = dir.path().join(".totypescript");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), content).unwrap();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.fixes.ids[0], "requireInTs");
        assert!(config.fixes.command.is_empty());
        assert_eq!(config.walk.skip_dirs, vec!["node_modules"]);
        assert_eq!(config.format_settings(), FormatSettings::default());
    }

    #[test]
    fn test_load_project_file() {
        let dir = TempDir::new().unwrap();
        write_project_config(
            &dir,
            r#"
[fixes]
ids = ["requireInTs"]
command = ["node", "fix.js"]

[format]
indent_size = 4
"#,
        );

        let file = Config::load_file(&Config::project_config_path(dir.path()))
            .unwrap()
            .unwrap();
        let config = Config::default().merge(file);
        assert_eq!(config.fixes.ids, vec!["requireInTs"]);
        assert_eq!(config.fixes.command, vec!["node", "fix.js"]);
        assert_eq!(config.format.indent_size, 4);
        // unspecified fields keep their defaults
        assert_eq!(config.format.tab_size, 2);
        assert!(config.format.convert_tabs_to_spaces);
        assert_eq!(config.walk, WalkConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_field_defaults() {
        let file: ConfigFile = toml::from_str("[fixes]\ncommand = [\"fix\"]\n").unwrap();
        let config = Config::default().merge(file);
        assert_eq!(config.fixes.ids.len(), DEFAULT_FIX_IDS.len());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(
            Config::load_file(&dir.path().join("nope.toml"))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_invalid_file() {
        let dir = TempDir::new().unwrap();
        write_project_config(&dir, "[walk]\nskip_dirs = 3\n");
        let err = Config::load_file(&Config::project_config_path(dir.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_format_settings_conversion() {
        let format = FormatConfig {
            indent_size: 4,
            tab_size: 8,
            convert_tabs_to_spaces: false,
            new_line: "\r\n".to_string(),
        };
        let settings = FormatSettings::from(&format);
        assert_eq!(settings.indent_size, 4);
        assert_eq!(settings.tab_size, 8);
        assert!(!settings.convert_tabs_to_spaces);
        assert_eq!(settings.new_line, "\r\n");
    }
}
