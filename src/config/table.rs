//! Keybinding table configuration structures and the built-in cheat sheet

use serde::{Deserialize, Serialize};

/// Default number of visible table rows
pub const DEFAULT_TABLE_HEIGHT: u16 = 7;

/// A single table header cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub title: String,
    pub width: u16,
}

impl ColumnSpec {
    pub fn new(title: &str, width: u16) -> Self {
        Self {
            title: title.to_string(),
            width,
        }
    }
}

/// One keybinding entry, immutable once loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindRow {
    pub mode: String,
    pub keybind: String,
    pub action: String,
}

impl KeybindRow {
    pub fn new(mode: &str, keybind: &str, action: &str) -> Self {
        Self {
            mode: mode.to_string(),
            keybind: keybind.to_string(),
            action: action.to_string(),
        }
    }

    /// Iterate over the row fields in display order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        [
            self.mode.as_str(),
            self.keybind.as_str(),
            self.action.as_str(),
        ]
        .into_iter()
    }
}

/// Normalized table section of the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Table header columns
    pub columns: Vec<ColumnSpec>,
    /// Keybinding entries shown in the table
    pub rows: Vec<KeybindRow>,
    /// Number of visible table rows
    pub height: u16,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
            height: DEFAULT_TABLE_HEIGHT,
        }
    }
}

/// The built-in three-column header: Mode / Keybind / Action
pub fn default_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("Mode", 8),
        ColumnSpec::new("Keybind", 16),
        ColumnSpec::new("Action", 80),
    ]
}

/// The built-in vim cheat sheet shown when no config file is given
fn default_rows() -> Vec<KeybindRow> {
    let entries: &[(&str, &str, &str)] = &[
        // Visual mode
        ("visual", "y", "yank (copy) selection"),
        ("visual", ">", "indent selection right"),
        ("visual", "<", "indent selection left"),
        // Insert mode
        ("insert", "<C-h>", "delete previous character"),
        (
            "insert",
            "<C-w>",
            "delete from the cursor back to the previous word boundary",
        ),
        ("insert", "<C-c>", "exit insert mode"),
        ("insert", "<Esc>", "exit insert mode"),
        // Normal mode: movement
        (
            "normal",
            "5h 20j 3k 4l",
            "move cursor left/down/up/right by amount",
        ),
        ("normal", "h j k l", "move cursor left/down/up/right"),
        ("normal", "w", "move to next word"),
        ("normal", "b", "move to previous word"),
        ("normal", "gg", "go to top of file"),
        ("normal", "G", "go to bottom of file"),
        ("normal", "0", "go to beginning of line"),
        ("normal", "$", "go to end of line"),
        ("normal", "<C-f>", "page down and centre on cursor"),
        ("normal", "<C-b>", "page up and centre on cursor"),
        // Normal mode: editing
        ("normal", "dd", "delete (cut) current line"),
        ("normal", "yy", "yank current line"),
        ("normal", "<S-P>", "paste clipboard"),
        ("normal", "p", "paste after cursor"),
        ("normal", "u", "undo last change"),
        ("normal", "<C-r>", "redo last undone change"),
        // Normal mode: search
        ("normal", "/", "search forward"),
        ("normal", "?", "search backward"),
        ("normal", "n", "next search match (after / or ?)"),
        ("normal", "N", "previous search match (after / or ?)"),
        // Normal mode: jumps and LSP
        (
            "normal",
            "<C-o>",
            "jump back in jump list (any cursor movement counts)",
        ),
        (
            "normal",
            "<C-i>",
            "jump forward in jump list (any cursor movement counts)",
        ),
        ("normal", "gd", "go to definition (LSP if attached)"),
        ("normal", "grr", "show references (LSP)"),
        ("normal", "K", "hover documentation (LSP or man page)"),
        // Normal mode: leader and text objects
        ("normal", "<leader>h", "open harpoon menu"),
        ("normal", "<leader>a", "append current file to harpoon"),
        ("normal", "<leader>fo", "format and organize imports"),
        ("normal", "<leader>ff", "find file in project"),
        ("normal", "di\"", "delete inside current double quotes"),
        (
            "normal",
            "da\"",
            "delete around current double quotes (including quotes)",
        ),
        ("normal", "dw", "delete from cursor to start of next word"),
        ("normal", "db", "delete from cursor to start of previous word"),
        ("normal", "diw", "delete inner word (current word only)"),
        (
            "normal",
            "daw",
            "delete around word (word plus surrounding space)",
        ),
        (
            "normal",
            "ciw",
            "change inner word (delete word, enter insert mode)",
        ),
        ("normal", "yiw", "yank inner word"),
        ("normal", "di(", "delete inside parentheses"),
        ("normal", "da(", "delete around parentheses"),
    ];

    entries
        .iter()
        .map(|(mode, keybind, action)| KeybindRow::new(mode, keybind, action))
        .collect()
}
