//! Substring filtering over the keybinding table

use crate::config::KeybindRow;

/// Return the ordered subset of rows where at least one field contains
/// the query as a case-insensitive substring. An empty query returns the
/// full set unchanged; the source rows are never mutated.
pub fn filter_rows(rows: &[KeybindRow], query: &str) -> Vec<KeybindRow> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| row.fields().any(|field| field.to_lowercase().contains(&query)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<KeybindRow> {
        vec![
            KeybindRow::new("normal", "gd", "go to definition"),
            KeybindRow::new("normal", "dd", "delete current line"),
            KeybindRow::new("insert", "<C-c>", "exit insert mode"),
            KeybindRow::new("visual", "y", "yank selection"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let rows = sample_rows();
        assert_eq!(filter_rows(&rows, ""), rows);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let rows = sample_rows();
        let filtered = filter_rows(&rows, "GD");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].keybind, "gd");
    }

    #[test]
    fn test_matches_any_field() {
        let rows = sample_rows();

        // mode field
        assert_eq!(filter_rows(&rows, "visual").len(), 1);
        // keybind field
        assert_eq!(filter_rows(&rows, "<c-c>").len(), 1);
        // action field
        assert_eq!(filter_rows(&rows, "definition").len(), 1);
    }

    #[test]
    fn test_preserves_original_order() {
        let rows = sample_rows();
        let filtered = filter_rows(&rows, "d");
        let keybinds: Vec<&str> = filtered.iter().map(|r| r.keybind.as_str()).collect();
        // "d" appears in "gd", "dd", "insert mode"/"mode", "delete"
        assert_eq!(keybinds, vec!["gd", "dd", "<C-c>"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let rows = sample_rows();
        assert!(filter_rows(&rows, "zzz-no-such-entry").is_empty());
    }

    #[test]
    fn test_source_rows_untouched() {
        let rows = sample_rows();
        let before = rows.clone();
        let _ = filter_rows(&rows, "yank");
        assert_eq!(rows, before);
    }
}
