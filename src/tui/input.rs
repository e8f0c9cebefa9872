use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use crate::tui::state::{AppState, InputMode};

/// Handle input events with polling, returns true if should exit
pub fn handle_input_events(state: &mut AppState) -> io::Result<bool> {
    // Poll for input events with refresh interval timeout
    if event::poll(Duration::from_millis(
        state.config.internal.refresh_interval,
    ))? && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(handle_key_event(key, state));
    }
    Ok(false) // continue running
}

/// Convert KeyCode to string for matching
fn keycode_to_string(key: KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        _ => String::new(),
    }
}

/// Handle a keyboard input event, returns true if should exit
fn handle_key_event(key: KeyEvent, state: &mut AppState) -> bool {
    // Ctrl+C terminates in both modes
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match state.mode {
        InputMode::Searching => handle_search_key(key, state),
        InputMode::Browsing => handle_browse_key(key, state),
    }
}

/// Handle a key while the search field is focused
fn handle_search_key(key: KeyEvent, state: &mut AppState) -> bool {
    match key.code {
        KeyCode::Enter => state.commit_search(),
        KeyCode::Esc => state.cancel_search(),
        _ => {
            state.search.handle_key(key);
            state.apply_filter();
        }
    }
    false
}

/// Handle a key while browsing the table
fn handle_browse_key(key: KeyEvent, state: &mut AppState) -> bool {
    let key_str = keycode_to_string(key.code);
    if key_str.is_empty() {
        return false;
    }

    let kb = &state.config.ui.keybindings;

    if kb.matches("quit", &key_str) {
        return true;
    }

    if kb.matches("search", &key_str) {
        state.start_search();
    } else if kb.matches("move_down", &key_str) {
        state.move_selection_down();
    } else if kb.matches("move_up", &key_str) {
        state.move_selection_up();
    } else if kb.matches("top", &key_str) {
        state.select_first();
    } else if kb.matches("bottom", &key_str) {
        state.select_last();
    } else if kb.matches("page_down", &key_str) {
        state.page_down();
    } else if kb.matches("page_up", &key_str) {
        state.page_up();
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, KeybindRow, TableConfig};

    fn test_state() -> AppState {
        let mut config = AppConfig::default();
        config.table = TableConfig {
            rows: vec![
                KeybindRow::new("normal", "gd", "go to definition"),
                KeybindRow::new("visual", "y", "yank selection"),
            ],
            ..TableConfig::default()
        };
        AppState::new(config)
    }

    fn press(state: &mut AppState, code: KeyCode) -> bool {
        handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), state)
    }

    #[test]
    fn test_quit_key_exits_in_browsing() {
        let mut state = test_state();
        assert!(press(&mut state, KeyCode::Char('q')));
    }

    #[test]
    fn test_ctrl_c_exits_in_both_modes() {
        let mut state = test_state();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key_event(ctrl_c, &mut state));

        state.start_search();
        assert!(handle_key_event(ctrl_c, &mut state));
    }

    #[test]
    fn test_search_key_enters_search_mode() {
        let mut state = test_state();
        assert!(!press(&mut state, KeyCode::Char('/')));
        assert_eq!(state.mode, InputMode::Searching);
    }

    #[test]
    fn test_quit_key_is_query_text_while_searching() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char('/'));
        assert!(!press(&mut state, KeyCode::Char('q')));
        assert_eq!(state.mode, InputMode::Searching);
        assert_eq!(state.search.value(), "q");
    }

    #[test]
    fn test_search_type_enter_esc_flow() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char('/'));
        press(&mut state, KeyCode::Char('g'));
        press(&mut state, KeyCode::Char('d'));
        assert_eq!(state.visible_rows.len(), 1);

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.mode, InputMode::Browsing);
        assert_eq!(state.visible_rows.len(), 1);

        press(&mut state, KeyCode::Char('/'));
        press(&mut state, KeyCode::Char('y'));
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.mode, InputMode::Browsing);
        assert_eq!(state.visible_rows, state.all_rows);
        assert!(state.search.is_empty());
    }

    #[test]
    fn test_navigation_keys_move_selection() {
        let mut state = test_state();
        press(&mut state, KeyCode::Char('j'));
        assert_eq!(state.table_state.selected(), Some(1));
        press(&mut state, KeyCode::Char('k'));
        assert_eq!(state.table_state.selected(), Some(0));
        press(&mut state, KeyCode::Down);
        assert_eq!(state.table_state.selected(), Some(1));
    }

    #[test]
    fn test_keycode_to_string_unmapped_is_empty() {
        assert_eq!(keycode_to_string(KeyCode::F(5)), "");
        assert_eq!(keycode_to_string(KeyCode::Char('x')), "x");
        assert_eq!(keycode_to_string(KeyCode::PageDown), "PageDown");
    }
}
