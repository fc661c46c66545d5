//! CLI command implementations for Blastgrid.

pub(crate) mod play;
pub(crate) mod run;
pub(crate) mod validate;

mod output;

use blastgrid::game::{PlayerStats, Rules};
use blastgrid::{Layout, LayoutError};
use clap::{Args, ValueEnum};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Rule overrides shared by `play` and `run`.
#[derive(Debug, Clone, Copy, Args)]
pub(crate) struct RuleArgs {
    /// Turns before a freshly placed bomb goes off
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u32).range(1..))]
    bomb_timer: u32,

    /// Starting blast radius
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    fire_power: u32,

    /// Starting bomb capacity
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    max_bombs: u32,

    /// Chance (0 to 1) that a destroyed block drops an item
    #[arg(long, default_value = "0.3")]
    drop_chance: f64,
}

impl RuleArgs {
    /// Build the session rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the drop chance is not a probability.
    pub(crate) fn to_rules(self) -> Result<Rules, CliError> {
        if !(0.0..=1.0).contains(&self.drop_chance) {
            return Err(CliError::new(format!(
                "--drop-chance must be between 0 and 1, got {}",
                self.drop_chance
            )));
        }
        Ok(Rules {
            bomb_timer: self.bomb_timer,
            item_drop_chance: self.drop_chance,
            starting_stats: PlayerStats {
                fire_power: self.fire_power,
                max_bombs: self.max_bombs,
            },
            ..Rules::default()
        })
    }
}

/// Load a layout file, or the built-in board when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub(crate) fn load_layout(path: Option<&Path>) -> Result<Layout, CliError> {
    let Some(path) = path else {
        return Ok(Layout::builtin());
    };
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display())))?;
    Layout::parse(&text)
        .map_err(|e| CliError::new(format!("Invalid layout {}: {e}", path.display())))
}

/// Use the given seed, or derive one from the clock.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    })
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<LayoutError> for CliError {
    fn from(e: LayoutError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}
