use anyhow::{Context, Result};
use devkit_color::TerminalDetector;
use devkit_survey::{Launcher, Runner};
use std::io;
use tracing::debug;

pub fn handle_survey<D, L>(runner: &Runner<D, L>, id: &str) -> Result<()>
where
    D: TerminalDetector,
    L: Launcher,
{
    let mut out = io::stdout();
    runner.open_survey_form(&mut out, id)?;
    Ok(())
}

/// Show the survey prompt after a command if it is due. Never fails the
/// command.
pub fn prompt_if_due<D: TerminalDetector, L: Launcher>(runner: &Runner<D, L>) {
    if !runner.should_display_survey_prompt() {
        return;
    }

    let mut out = io::stdout();
    if let Err(e) = runner
        .display_survey_prompt(&mut out)
        .context("Failed to display survey prompt")
    {
        debug!("{:#}", e);
    }
}
