use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::config::ColorScheme;
use crate::tui::state::{AppState, InputMode};

/// Render keyhint bar at the bottom
pub fn render_keyhint_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let colors = &state.colors;
    let keyhints = match state.mode {
        InputMode::Searching => get_search_keyhints(colors),
        InputMode::Browsing => get_browse_keyhints(colors),
    };

    let keyhint_line = build_keyhint_line(&keyhints);
    let paragraph = Paragraph::new(vec![keyhint_line]);
    f.render_widget(paragraph, area);
}

/// Get keyhints for browsing mode
fn get_browse_keyhints(colors: &ColorScheme) -> Vec<KeyHint> {
    vec![
        KeyHint::new("/", "Search", colors.key_action),
        KeyHint::new("↓/j", "Down", colors.key_action),
        KeyHint::new("↑/k", "Up", colors.key_action),
        KeyHint::new("g/G", "Top/Bottom", colors.key_action),
        KeyHint::new("q", "Quit", colors.key_danger),
    ]
}

/// Get keyhints for search mode
fn get_search_keyhints(colors: &ColorScheme) -> Vec<KeyHint> {
    vec![
        KeyHint::new("Enter", "Keep filter", colors.key_action),
        KeyHint::new("Esc", "Clear", colors.key_warning),
        KeyHint::new("Ctrl+C", "Quit", colors.key_danger),
    ]
}

/// Build a single line from a list of keyhints
fn build_keyhint_line(keyhints: &[KeyHint]) -> Line<'_> {
    let mut spans = Vec::new();
    for keyhint in keyhints {
        spans.extend(keyhint.to_spans());
    }
    Line::from(spans)
}

/// Represents a single hotkey with its display and description
struct KeyHint {
    keys: &'static str,
    description: &'static str,
    color: Color,
}

impl KeyHint {
    fn new(keys: &'static str, description: &'static str, color: Color) -> Self {
        Self {
            keys,
            description,
            color,
        }
    }

    fn to_spans(&self) -> Vec<Span<'_>> {
        vec![
            Span::styled(
                format!(" {} ", self.keys),
                Style::default().fg(self.color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{}  ", self.description)),
        ]
    }
}
