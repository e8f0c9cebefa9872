use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::state::{AppState, InputMode};

/// Render the search line below the table: the live query with a cursor
/// while searching, or the committed filter while browsing.
pub fn render_search_bar(f: &mut Frame, area: Rect, state: &AppState) {
    match state.mode {
        InputMode::Searching => render_active_search(f, area, state),
        InputMode::Browsing => {
            if !state.search.is_empty() {
                render_committed_filter(f, area, state);
            }
        }
    }
}

/// Render the focused search input with prompt, scroll and cursor
fn render_active_search(f: &mut Frame, area: Rect, state: &AppState) {
    let colors = &state.colors;
    let prompt = "Search: ";

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(prompt.len() as u16), Constraint::Min(1)])
        .split(area);

    let prompt_widget = Paragraph::new(Span::styled(
        prompt,
        Style::default()
            .fg(colors.search_prompt)
            .add_modifier(Modifier::BOLD),
    ));
    f.render_widget(prompt_widget, chunks[0]);

    let input_area = chunks[1];
    if state.search.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            state.search.placeholder(),
            Style::default().fg(colors.text_muted),
        ));
        f.render_widget(placeholder, input_area);
        f.set_cursor_position(Position::new(input_area.x, input_area.y));
        return;
    }

    // Keep one cell free so the cursor fits after the last character
    let input_width = input_area.width.saturating_sub(1) as usize;
    let scroll = state.search.visual_scroll(input_width);
    let input_widget = Paragraph::new(state.search.value())
        .style(Style::default().fg(colors.text_primary))
        .scroll((0, scroll as u16));
    f.render_widget(input_widget, input_area);

    let cursor_offset = state.search.visual_cursor().saturating_sub(scroll) as u16;
    f.set_cursor_position(Position::new(input_area.x + cursor_offset, input_area.y));
}

/// Render the committed query as a filter indicator
fn render_committed_filter(f: &mut Frame, area: Rect, state: &AppState) {
    let colors = &state.colors;
    let line = Line::from(vec![
        Span::styled(
            "Filtered by: ",
            Style::default()
                .fg(colors.search_prompt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            state.search.value(),
            Style::default().fg(colors.text_primary),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
