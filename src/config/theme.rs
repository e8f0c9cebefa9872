//! Theme system for TUI color schemes

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available themes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Theme {
    #[default]
    Default,
    Dark,
    Light,
}

impl Theme {
    /// Get the color scheme for this theme
    pub fn colors(&self) -> ColorScheme {
        match self {
            Self::Default => ColorScheme::default(),
            Self::Dark => ColorScheme::dark(),
            Self::Light => ColorScheme::light(),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(format!(
                "Invalid theme '{}'. Valid options: default, dark, light",
                s
            )),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Dark => write!(f, "dark"),
            Self::Light => write!(f, "light"),
        }
    }
}

/// Color scheme for the TUI
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // General UI
    pub border: Color,
    pub header: Color,
    pub text_primary: Color,
    pub text_muted: Color,

    // Table selection
    pub selected_fg: Color,
    pub selected_bg: Color,

    // Search line
    pub search_prompt: Color,

    // Key hints
    pub key_action: Color,
    pub key_warning: Color,
    pub key_danger: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            // General UI
            border: Color::Indexed(240),
            header: Color::White,
            text_primary: Color::White,
            text_muted: Color::Indexed(241),

            // Table selection
            selected_fg: Color::Indexed(229),
            selected_bg: Color::Indexed(57),

            // Search line
            search_prompt: Color::Indexed(205),

            // Key hints
            key_action: Color::Green,
            key_warning: Color::Yellow,
            key_danger: Color::Red,
        }
    }
}

impl ColorScheme {
    /// Dark theme
    pub fn dark() -> Self {
        Self {
            // General UI
            border: Color::Rgb(80, 80, 80),
            header: Color::Rgb(220, 225, 230),
            text_primary: Color::Rgb(220, 225, 230),
            text_muted: Color::Rgb(120, 125, 130),

            // Table selection
            selected_fg: Color::Rgb(235, 235, 210),
            selected_bg: Color::Rgb(70, 60, 160),

            // Search line
            search_prompt: Color::Rgb(235, 120, 180),

            // Key hints
            key_action: Color::Rgb(100, 220, 150),
            key_warning: Color::Rgb(250, 200, 100),
            key_danger: Color::Rgb(250, 100, 100),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            // General UI
            border: Color::Rgb(180, 185, 190),
            header: Color::Rgb(20, 20, 25),
            text_primary: Color::Rgb(20, 20, 25),
            text_muted: Color::Rgb(140, 145, 150),

            // Table selection
            selected_fg: Color::Rgb(250, 250, 250),
            selected_bg: Color::Rgb(90, 80, 200),

            // Search line
            search_prompt: Color::Rgb(190, 40, 120),

            // Key hints
            key_action: Color::Rgb(0, 140, 70),
            key_warning: Color::Rgb(210, 130, 0),
            key_danger: Color::Rgb(220, 20, 20),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_str() {
        assert_eq!("default".parse::<Theme>().unwrap(), Theme::Default);
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("LIGHT".parse::<Theme>().unwrap(), Theme::Light);
        assert!("solarized".parse::<Theme>().is_err());
    }

    #[test]
    fn test_theme_display_round_trip() {
        for theme in [Theme::Default, Theme::Dark, Theme::Light] {
            assert_eq!(theme.to_string().parse::<Theme>().unwrap(), theme);
        }
    }
}
