//! Single-line search field wrapping tui-input.
//!
//! Provides text editing with proper cursor management and placeholder
//! text; rendering stays in the ui module.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

/// Single-line text input for the search query
#[derive(Debug, Clone, Default)]
pub struct SearchField {
    input: Input,
    placeholder: String,
}

impl SearchField {
    /// Create a new empty field with a placeholder
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            placeholder: placeholder.into(),
        }
    }

    /// Handle key event using the InputRequest pattern
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Left => {
                    self.input.handle(InputRequest::GoToPrevWord);
                }
                KeyCode::Right => {
                    self.input.handle(InputRequest::GoToNextWord);
                }
                // Ctrl+U: clear the whole line
                KeyCode::Char('u') => {
                    self.input.handle(InputRequest::DeleteLine);
                }
                // Ctrl+W: delete the previous word
                KeyCode::Char('w') => {
                    self.input.handle(InputRequest::DeletePrevWord);
                }
                _ => {}
            }
            return;
        }

        let req = match key.code {
            KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
            KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
            KeyCode::Delete => Some(InputRequest::DeleteNextChar),
            KeyCode::Left => Some(InputRequest::GoToPrevChar),
            KeyCode::Right => Some(InputRequest::GoToNextChar),
            KeyCode::Home => Some(InputRequest::GoToStart),
            KeyCode::End => Some(InputRequest::GoToEnd),
            _ => None,
        };

        if let Some(r) = req {
            self.input.handle(r);
        }
    }

    /// Get current value
    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Clear the field
    pub fn clear(&mut self) {
        self.input.reset();
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Cursor offset in display columns, relative to the visual scroll
    pub fn visual_cursor(&self) -> usize {
        self.input.visual_cursor()
    }

    /// Horizontal scroll offset for rendering inside the given width
    pub fn visual_scroll(&self, width: usize) -> usize {
        self.input.visual_scroll(width)
    }
}
