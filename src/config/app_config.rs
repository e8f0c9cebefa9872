//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

use crate::cli::CliArgs;

use super::table::{ColumnSpec, DEFAULT_TABLE_HEIGHT, KeybindRow, TableConfig, default_columns};
use super::{KeyBindings, Theme};

/// Environment variable checked for a config file path when --config is absent
pub const CONFIG_ENV_VAR: &str = "KEYSHEET_CONFIG";

/// Errors that can occur while loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Application configuration (all settings needed at runtime)
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub table: TableConfig,
    pub ui: UiConfig,
    pub internal: InternalConfig,
}

/// UI section of the configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UiConfig {
    /// TUI theme
    pub theme: Theme,
    /// Key bindings
    pub keybindings: KeyBindings,
}

/// Internal configuration (not user-configurable)
#[derive(Debug, Clone)]
pub struct InternalConfig {
    /// Event poll timeout in milliseconds
    pub refresh_interval: u64,
}

impl Default for InternalConfig {
    fn default() -> Self {
        Self {
            refresh_interval: 100,
        }
    }
}

/// User-configurable fields as they appear in the config file.
/// `height` is kept signed here so that non-positive values can be
/// normalized instead of failing deserialization.
#[derive(Debug, Serialize, Deserialize, Default)]
#[serde(default)]
struct AppConfigUserFields {
    columns: Vec<ColumnSpec>,
    rows: Vec<KeybindRow>,
    height: i64,
    ui: UiConfig,
}

impl AppConfig {
    /// Create app configuration with layered priority system:
    /// CLI args (highest) -> Config file -> Default values (lowest)
    ///
    /// A config file is only consulted when a path is resolved from
    /// --config or $KEYSHEET_CONFIG; a resolved path that cannot be
    /// read or parsed is a fatal startup error.
    pub fn from_layers(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let env_value = std::env::var(CONFIG_ENV_VAR).ok();
        let path = resolve_config_path(cli_args.config.as_deref(), env_value.as_deref());

        let mut config = Self::default();
        if path.is_empty() {
            debug!("No config file given, using built-in keybinding table");
        } else {
            let file_config = Self::load_from_file(&path)?;
            config.merge_file_config(file_config);
        }
        config.apply_cli_overrides(cli_args);

        debug!(
            columns = config.table.columns.len(),
            rows = config.table.rows.len(),
            height = config.table.height,
            "Final table configuration"
        );

        Ok(config)
    }

    /// Load user configuration fields from a JSON file
    fn load_from_file(path: &str) -> Result<AppConfigUserFields, ConfigError> {
        let path = PathBuf::from(expand_tilde_in_path(path));
        debug!("Loading config from: {:?}", path);

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Merge user configuration loaded from file, normalizing missing fields
    fn merge_file_config(&mut self, file_config: AppConfigUserFields) {
        let AppConfigUserFields {
            columns,
            rows,
            height,
            ui,
        } = file_config;

        self.table.columns = if columns.is_empty() {
            debug!("Config file has no columns, using built-in columns");
            default_columns()
        } else {
            columns
        };

        self.table.height = match u16::try_from(height) {
            Ok(h) if h > 0 => h,
            _ => {
                debug!(height, "Config file height is not positive, using default");
                DEFAULT_TABLE_HEIGHT
            }
        };

        // Absent rows deserialize to an empty list, never null
        self.table.rows = rows;
        self.ui = ui;
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref theme_str) = args.theme {
            match theme_str.parse::<Theme>() {
                Ok(theme) => {
                    debug!("CLI override: theme = {}", theme);
                    self.ui.theme = theme;
                }
                Err(e) => {
                    warn!("Invalid theme '{}': {}. Using default theme.", theme_str, e);
                }
            }
        }
    }

    /// Print user-configurable fields in JSON format
    pub fn print(&self) {
        let user_fields = AppConfigUserFields {
            columns: self.table.columns.clone(),
            rows: self.table.rows.clone(),
            height: i64::from(self.table.height),
            ui: self.ui.clone(),
        };
        match serde_json::to_string_pretty(&user_fields) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Failed to serialize configuration: {}", e),
        }
    }
}

/// Resolve the configuration file path from the --config flag and the
/// environment fallback. The trimmed flag value wins when non-empty,
/// then the trimmed environment value; an empty result means "use the
/// built-in default table".
pub fn resolve_config_path(flag_value: Option<&str>, env_value: Option<&str>) -> String {
    if let Some(path) = flag_value {
        let path = path.trim();
        if !path.is_empty() {
            return path.to_string();
        }
    }

    env_value.map(str::trim).unwrap_or_default().to_string()
}

/// Expand ~ in path to home directory
fn expand_tilde_in_path(path: &str) -> String {
    if path.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return path.replacen("~", &home.to_string_lossy(), 1);
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home.to_string_lossy().to_string();
    }
    path.to_string()
}
