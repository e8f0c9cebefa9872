//! Key bindings configuration

use serde::{Deserialize, Serialize};

/// Key bindings configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub quit: Vec<String>,
    pub search: Vec<String>,
    pub move_up: Vec<String>,
    pub move_down: Vec<String>,
    pub top: Vec<String>,
    pub bottom: Vec<String>,
    pub page_up: Vec<String>,
    pub page_down: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".to_string()],
            search: vec!["/".to_string()],
            move_up: vec!["k".to_string(), "Up".to_string()],
            move_down: vec!["j".to_string(), "Down".to_string()],
            top: vec!["g".to_string(), "Home".to_string()],
            bottom: vec!["G".to_string(), "End".to_string()],
            page_up: vec!["PageUp".to_string()],
            page_down: vec!["PageDown".to_string()],
        }
    }
}

impl KeyBindings {
    /// Check if a key matches any binding for the given action
    pub fn matches(&self, action: &str, key: &str) -> bool {
        let bindings = match action {
            "quit" => &self.quit,
            "search" => &self.search,
            "move_up" => &self.move_up,
            "move_down" => &self.move_down,
            "top" => &self.top,
            "bottom" => &self.bottom,
            "page_up" => &self.page_up,
            "page_down" => &self.page_down,
            _ => return false,
        };
        bindings.iter().any(|b| b == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings_match() {
        let kb = KeyBindings::default();
        assert!(kb.matches("quit", "q"));
        assert!(kb.matches("search", "/"));
        assert!(kb.matches("move_up", "k"));
        assert!(kb.matches("move_up", "Up"));
        assert!(kb.matches("move_down", "Down"));
        assert!(!kb.matches("quit", "x"));
    }

    #[test]
    fn test_unknown_action_never_matches() {
        let kb = KeyBindings::default();
        assert!(!kb.matches("does_not_exist", "q"));
    }
}
