use ratatui::widgets::TableState;

use crate::config::{AppConfig, ColorScheme, KeybindRow};
use crate::core;
use crate::tui::text_field::SearchField;

/// Which component receives key events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys navigate the table
    #[default]
    Browsing,
    /// Keys edit the search query
    Searching,
}

/// Application state for one TUI session.
/// The full row set is loaded once from the configuration and never
/// mutated; `visible_rows` is the derived view recomputed on every
/// query change.
pub struct AppState {
    pub config: AppConfig,       // app config in current session
    pub colors: ColorScheme,     // color scheme from theme
    pub mode: InputMode,         // current input mode
    pub search: SearchField,     // search query buffer
    pub all_rows: Vec<KeybindRow>, // immutable source rows
    pub visible_rows: Vec<KeybindRow>, // filtered view of all_rows
    pub table_state: TableState, // table selection and scroll offset
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let colors = config.ui.theme.colors();
        let all_rows = config.table.rows.clone();

        let mut table_state = TableState::default();
        if !all_rows.is_empty() {
            table_state.select(Some(0));
        }

        Self {
            colors,
            mode: InputMode::default(),
            search: SearchField::with_placeholder("Search actions..."),
            visible_rows: all_rows.clone(),
            all_rows,
            table_state,
            config,
        }
    }

    /// Enter search mode, clearing any previous query. The visible rows
    /// are left untouched until the first keystroke updates the query.
    pub fn start_search(&mut self) {
        self.mode = InputMode::Searching;
        self.search.clear();
    }

    /// Commit the search: back to browsing, keeping the filtered view
    /// and the query text.
    pub fn commit_search(&mut self) {
        self.mode = InputMode::Browsing;
    }

    /// Cancel the search: back to browsing with the query cleared and
    /// the full row set restored.
    pub fn cancel_search(&mut self) {
        self.mode = InputMode::Browsing;
        self.search.clear();
        self.apply_filter();
    }

    /// Recompute the visible rows from the current query. Selection
    /// resets to the first visible row, or none when nothing matches.
    pub fn apply_filter(&mut self) {
        self.visible_rows = core::filter_rows(&self.all_rows, self.search.value());
        let selected = if self.visible_rows.is_empty() {
            None
        } else {
            Some(0)
        };
        *self.table_state.offset_mut() = 0;
        self.table_state.select(selected);
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if let Some(selected) = self.table_state.selected()
            && selected > 0
        {
            self.table_state.select(Some(selected - 1));
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if let Some(selected) = self.table_state.selected() {
            let last = self.visible_rows.len().saturating_sub(1);
            self.table_state.select(Some((selected + 1).min(last)));
        }
    }

    /// Jump to the first visible row
    pub fn select_first(&mut self) {
        if !self.visible_rows.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    /// Jump to the last visible row
    pub fn select_last(&mut self) {
        if !self.visible_rows.is_empty() {
            self.table_state.select(Some(self.visible_rows.len() - 1));
        }
    }

    /// Move selection up by one table page
    pub fn page_up(&mut self) {
        if let Some(selected) = self.table_state.selected() {
            let page = self.config.table.height as usize;
            self.table_state.select(Some(selected.saturating_sub(page)));
        }
    }

    /// Move selection down by one table page
    pub fn page_down(&mut self) {
        if let Some(selected) = self.table_state.selected() {
            let page = self.config.table.height as usize;
            let last = self.visible_rows.len().saturating_sub(1);
            self.table_state.select(Some((selected + page).min(last)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KeybindRow, TableConfig};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn test_state() -> AppState {
        let mut config = AppConfig::default();
        config.table = TableConfig {
            rows: vec![
                KeybindRow::new("normal", "gd", "go to definition"),
                KeybindRow::new("normal", "dd", "delete current line"),
                KeybindRow::new("visual", "y", "yank selection"),
            ],
            ..TableConfig::default()
        };
        AppState::new(config)
    }

    fn type_query(state: &mut AppState, text: &str) {
        for c in text.chars() {
            state
                .search
                .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
            state.apply_filter();
        }
    }

    #[test]
    fn test_initial_state() {
        let state = test_state();
        assert_eq!(state.mode, InputMode::Browsing);
        assert_eq!(state.visible_rows, state.all_rows);
        assert_eq!(state.table_state.selected(), Some(0));
        assert!(state.search.is_empty());
    }

    #[test]
    fn test_start_search_clears_query_but_not_rows() {
        let mut state = test_state();
        type_query(&mut state, "yank");
        state.commit_search();
        assert_eq!(state.visible_rows.len(), 1);

        state.start_search();
        assert_eq!(state.mode, InputMode::Searching);
        assert!(state.search.is_empty());
        // Visible rows stay filtered until the first keystroke
        assert_eq!(state.visible_rows.len(), 1);
    }

    #[test]
    fn test_commit_preserves_filter_and_query() {
        let mut state = test_state();
        state.start_search();
        type_query(&mut state, "gd");
        state.commit_search();

        assert_eq!(state.mode, InputMode::Browsing);
        assert_eq!(state.search.value(), "gd");
        assert_eq!(state.visible_rows.len(), 1);
        assert_eq!(state.visible_rows[0].keybind, "gd");
    }

    #[test]
    fn test_cancel_restores_original_rows() {
        let mut state = test_state();
        state.start_search();
        type_query(&mut state, "yank");
        assert_eq!(state.visible_rows.len(), 1);

        state.cancel_search();
        assert_eq!(state.mode, InputMode::Browsing);
        assert!(state.search.is_empty());
        assert_eq!(state.visible_rows, state.all_rows);
    }

    #[test]
    fn test_filter_resets_selection() {
        let mut state = test_state();
        state.move_selection_down();
        state.move_selection_down();
        assert_eq!(state.table_state.selected(), Some(2));

        state.start_search();
        type_query(&mut state, "dd");
        assert_eq!(state.table_state.selected(), Some(0));
    }

    #[test]
    fn test_no_match_clears_selection() {
        let mut state = test_state();
        state.start_search();
        type_query(&mut state, "zzz");
        assert!(state.visible_rows.is_empty());
        assert_eq!(state.table_state.selected(), None);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = test_state();
        for _ in 0..10 {
            state.move_selection_down();
        }
        assert_eq!(state.table_state.selected(), Some(2));

        for _ in 0..10 {
            state.move_selection_up();
        }
        assert_eq!(state.table_state.selected(), Some(0));
    }

    #[test]
    fn test_top_bottom_and_paging() {
        let mut state = test_state();
        state.select_last();
        assert_eq!(state.table_state.selected(), Some(2));
        state.select_first();
        assert_eq!(state.table_state.selected(), Some(0));

        state.page_down();
        assert_eq!(state.table_state.selected(), Some(2));
        state.page_up();
        assert_eq!(state.table_state.selected(), Some(0));
    }
}
