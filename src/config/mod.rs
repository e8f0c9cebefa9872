mod app_config;
mod keybindings;
mod table;
mod theme;

pub use app_config::{AppConfig, CONFIG_ENV_VAR, ConfigError, UiConfig, resolve_config_path};
pub use keybindings::KeyBindings;
pub use table::{ColumnSpec, DEFAULT_TABLE_HEIGHT, KeybindRow, TableConfig};
pub use theme::{ColorScheme, Theme};
