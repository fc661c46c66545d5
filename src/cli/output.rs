//! Output formatting utilities for CLI.

use blastgrid::render::{render_ascii, LEGEND};
use blastgrid::GameState;
use serde::Serialize;

/// One input line and what the session answered.
#[derive(Debug, Serialize)]
pub(super) struct JsonStep {
    /// The input as fed to the session.
    pub(super) input: String,
    /// Turn counter after handling the input.
    pub(super) turn: u32,
    /// Messages shown for this input.
    pub(super) messages: Vec<String>,
}

/// JSON-serializable report of a scripted run.
#[derive(Debug, Serialize)]
pub(super) struct JsonRunReport {
    /// Random seed used.
    pub(super) seed: u64,
    /// Final lifecycle status.
    pub(super) status: &'static str,
    /// Turns resolved.
    pub(super) turns: u32,
    /// Final blast radius.
    pub(super) fire_power: u32,
    /// Final bomb capacity.
    pub(super) max_bombs: u32,
    /// Enemies still alive.
    pub(super) enemies_left: usize,
    /// Whether the exit was uncovered.
    pub(super) goal_visible: bool,
    /// Every input, in order.
    pub(super) steps: Vec<JsonStep>,
    /// Final board, one string per row.
    pub(super) board: Vec<String>,
}

impl JsonRunReport {
    /// Create from the final snapshot.
    pub(super) fn from_state(seed: u64, state: &GameState, steps: Vec<JsonStep>) -> Self {
        let board = render_ascii(state, false)
            .lines()
            .take(usize::from(state.grid.height()))
            .map(str::to_string)
            .collect();
        Self {
            seed,
            status: state.status.as_str(),
            turns: state.turn,
            fire_power: state.stats.fire_power,
            max_bombs: state.stats.max_bombs,
            enemies_left: state.enemies.len(),
            goal_visible: state.goal_visible,
            steps,
            board,
        }
    }
}

/// Format the final snapshot as human-readable text.
pub(super) fn format_text(seed: u64, state: &GameState) -> String {
    let mut output = String::new();

    output.push_str(&format!("Final board (seed: {seed})\n"));
    output.push_str(&render_ascii(state, false));
    output.push_str(LEGEND);
    output.push('\n');
    output.push_str(&format!(
        "  Enemies left: {}  Exit revealed: {}\n",
        state.enemies.len(),
        if state.goal_visible { "yes" } else { "no" }
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use blastgrid::Layout;

    #[test]
    fn test_report_board_rows() {
        let state = Layout::builtin().new_game(&blastgrid::Rules::default());
        let report = JsonRunReport::from_state(7, &state, Vec::new());
        assert_eq!(report.board.len(), 9);
        assert_eq!(report.board[1], "#.P.%.E.%.#");
        assert_eq!(report.status, "start");
    }

    #[test]
    fn test_text_mentions_seed() {
        let state = Layout::builtin().new_game(&blastgrid::Rules::default());
        let text = format_text(7, &state);
        assert!(text.starts_with("Final board (seed: 7)\n"));
        assert!(text.contains("Enemies left: 3"));
    }
}
