use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Create the layout for the TUI
pub fn create_layout(f: &Frame, table_height: u16) -> std::rc::Rc<[ratatui::layout::Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(table_height + 3), // table rows + header + borders
            Constraint::Length(1),                // search / filter status line
            Constraint::Length(1),                // bottom keyhint bar
            Constraint::Min(0),                   // unused remainder
        ])
        .split(f.area())
}
