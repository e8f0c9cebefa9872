use ratatui::Frame;

use crate::tui::state::AppState;
use crate::tui::ui::keyhint_bar::render_keyhint_bar;
use crate::tui::ui::layout::create_layout;
use crate::tui::ui::search_bar::render_search_bar;
use crate::tui::ui::table::render_table;

/// Render the TUI interface frame
pub fn render_ui(f: &mut Frame, state: &mut AppState) {
    let chunks = create_layout(f, state.config.table.height);

    render_table(f, chunks[0], state);
    render_search_bar(f, chunks[1], state);
    render_keyhint_bar(f, chunks[2], state);
}
