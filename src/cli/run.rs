//! Run command implementation: feed scripted input to a session.

use super::output::{format_text, JsonRunReport, JsonStep};
use super::{load_layout, resolve_seed, CliError, OutputFormat, RuleArgs};
use blastgrid::Session;
use log::info;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Execute the run command.
///
/// Reads one input per line from `script` (stdin when absent). Blank lines and
/// lines starting with `#` are skipped. Input is fed as-is, so a script normally
/// begins with `start`.
///
/// # Errors
///
/// Returns an error if the layout or script cannot be read.
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn execute(
    script: Option<PathBuf>,
    layout: Option<PathBuf>,
    seed: Option<u64>,
    rules: RuleArgs,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let layout = load_layout(layout.as_deref())?;
    let rules = rules.to_rules()?;
    let seed = resolve_seed(seed);

    let text = match &script {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display())))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let inputs: Vec<&str> = script_inputs(&text).collect();

    info!("running {} scripted inputs with seed {seed}", inputs.len());
    if format == OutputFormat::Text && !quiet {
        println!("Running with seed {seed}...");
        println!();
    }

    let mut session = Session::seeded(layout, rules, seed);
    let mut steps = Vec::with_capacity(inputs.len());

    for input in inputs {
        let messages = session.handle(input).to_vec();
        if format == OutputFormat::Text && !quiet {
            println!("> {input}");
            for message in &messages {
                println!("  {message}");
            }
        }
        steps.push(JsonStep {
            input: input.to_string(),
            turn: session.state().turn,
            messages,
        });
    }

    match format {
        OutputFormat::Text => {
            if !quiet {
                println!();
            }
            print!("{}", format_text(seed, session.state()));
        }
        OutputFormat::Json => {
            let report = JsonRunReport::from_state(seed, session.state(), steps);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Non-empty, non-comment lines of a script.
fn script_inputs(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_inputs_skip_comments() {
        let text = "# opening\nstart\n\n  move left \r\n#bomb\nwait\n";
        let inputs: Vec<_> = script_inputs(text).collect();
        assert_eq!(inputs, vec!["start", "move left", "wait"]);
    }
}
