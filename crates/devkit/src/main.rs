mod cli;
mod color;
mod commands;
mod config;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use devkit_survey::{Runner, SystemBrowser};
use output::output_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let detector = color::init(cli.color);
    logging::init(&cli.verbosity, color::stderr_colored(cli.color));

    if let Err(e) = run(&cli, detector) {
        output_error(&e);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli, detector: devkit_color::ColorChoice) -> Result<()> {
    let config_file = config::resolve_config_path(cli.config.as_deref())?;
    let runner = Runner::new(&config_file, detector, SystemBrowser);

    match &cli.command {
        Commands::Survey { id } => return commands::survey::handle_survey(&runner, id),
        Commands::Completion { shell } => {
            Cli::generate_completions(*shell);
            return Ok(());
        }
        Commands::Config { action } => commands::config::handle_config(&config_file, action)?,
    }

    if cli.interactive {
        commands::survey::prompt_if_due(&runner);
    }
    Ok(())
}
