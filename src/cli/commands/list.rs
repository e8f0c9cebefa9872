use anyhow::{Context, Result};
use crossterm::style::{Color, Stylize};
use tracing::info;

use crate::config::{AppConfig, KeybindRow};
use crate::core;

/// List keybindings in the configured table, optionally filtered
pub fn list_keybinds(config: AppConfig, query: Option<&str>, json: bool) -> Result<()> {
    let rows = core::filter_rows(&config.table.rows, query.unwrap_or(""));

    if json {
        print_rows_json(&rows)?;
    } else {
        print_rows_list(&config, &rows);
    }

    Ok(())
}

/// Print keybindings in JSON format
fn print_rows_json(rows: &[KeybindRow]) -> Result<()> {
    let json =
        serde_json::to_string_pretty(rows).context("Failed to serialize keybindings to JSON")?;
    println!("{}", json);
    Ok(())
}

/// Print keybindings as an aligned text table
fn print_rows_list(config: &AppConfig, rows: &[KeybindRow]) {
    if rows.is_empty() {
        info!("No keybindings matched");
        return;
    }

    info!(count = rows.len(), "Listing keybindings");

    // Calculate column widths from the data, with the configured header
    // widths as the floor
    let mode_floor = config.table.columns.first().map_or(0, |c| c.width as usize);
    let keybind_floor = config.table.columns.get(1).map_or(0, |c| c.width as usize);
    let max_mode = rows
        .iter()
        .map(|r| r.mode.len())
        .max()
        .unwrap_or(0)
        .max(mode_floor);
    let max_keybind = rows
        .iter()
        .map(|r| r.keybind.len())
        .max()
        .unwrap_or(0)
        .max(keybind_floor);

    // Print each keybinding
    for row in rows {
        let mode_pad = max_mode.saturating_sub(row.mode.len());
        let keybind_pad = max_keybind.saturating_sub(row.keybind.len());

        println!(
            "{}{}  {}{}  {}",
            row.mode.as_str().with(Color::Cyan).bold(),
            " ".repeat(mode_pad),
            row.keybind.as_str().with(Color::Green).bold(),
            " ".repeat(keybind_pad),
            &row.action
        );
    }
}
