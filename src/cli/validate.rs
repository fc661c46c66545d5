//! Layout validation command implementation.

use super::CliError;
use blastgrid::{Cell, Layout};
use std::fs;
use std::path::PathBuf;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the layout file cannot be read or is invalid.
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn execute(layout: PathBuf) -> Result<(), CliError> {
    let text = fs::read_to_string(&layout)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", layout.display())))?;

    println!("Validating: {}", layout.display());
    println!();

    let parsed = match Layout::parse(&text) {
        Ok(parsed) => {
            print_check("Layout parses", true);
            parsed
        }
        Err(e) => {
            print_check("Layout parses", false);
            return Err(e.into());
        }
    };

    // Playable but probably not intended
    if parsed.grid.count(Cell::Empty) <= 1 + parsed.enemies.len() {
        println!("  ! Warning: no free floor around the player");
    }
    if parsed.item_table.iter().any(|item| parsed.grid.get(item.pos) != Some(Cell::BreakableBlock)) {
        println!("  ! Warning: item table entries outside breakable blocks");
    }

    println!();
    print!("{}", summarize(&parsed));
    println!();
    println!("Validation successful!");

    Ok(())
}

/// Human-readable summary of a parsed layout.
fn summarize(layout: &Layout) -> String {
    let mut output = String::new();
    output.push_str("Summary:\n");
    output.push_str(&format!(
        "  Size:         {}x{}\n",
        layout.grid.width(),
        layout.grid.height()
    ));
    output.push_str(&format!("  Player:       {}\n", layout.player));
    output.push_str(&format!("  Exit:         {} (hidden)\n", layout.goal));
    output.push_str(&format!("  Enemies:      {}\n", layout.enemies.len()));
    output.push_str(&format!(
        "  Walls:        {}\n",
        layout.grid.count(Cell::UnbreakableBlock)
    ));
    output.push_str(&format!("  Blocks:       {}\n", layout.breakable_count()));
    output.push_str(&format!("  Item table:   {} entries\n", layout.item_table.len()));
    for item in &layout.item_table {
        output.push_str(&format!("    {} at {}\n", item.kind.label(), item.pos));
    }
    output
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
