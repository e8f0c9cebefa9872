use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::tui::state::AppState;

/// Render the keybinding table
pub fn render_table(f: &mut Frame, area: Rect, state: &mut AppState) {
    let AppState {
        config,
        colors,
        all_rows,
        visible_rows,
        table_state,
        ..
    } = state;

    let header = Row::new(
        config
            .table
            .columns
            .iter()
            .map(|column| Cell::from(column.title.as_str())),
    )
    .style(
        Style::default()
            .fg(colors.header)
            .add_modifier(Modifier::BOLD),
    );

    let widths: Vec<Constraint> = config
        .table
        .columns
        .iter()
        .map(|column| Constraint::Length(column.width))
        .collect();

    let rows = visible_rows
        .iter()
        .map(|row| Row::new(row.fields().map(Cell::from)));

    let table_block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            "Keybinds ({}/{})",
            visible_rows.len(),
            all_rows.len()
        ))
        .border_style(Style::default().fg(colors.border));

    let table = Table::new(rows, widths)
        .header(header)
        .block(table_block)
        .style(Style::default().fg(colors.text_primary))
        .row_highlight_style(
            Style::default()
                .fg(colors.selected_fg)
                .bg(colors.selected_bg),
        )
        .highlight_symbol("▶ ");

    f.render_stateful_widget(table, area, table_state);
}
