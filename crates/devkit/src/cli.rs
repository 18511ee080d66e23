use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use devkit_survey::HATS_ID;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "devkit", version, about = "Developer CLI with survey and color-aware output")]
pub struct Cli {
    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to the global TOML config file (defaults to ~/.devkit/config.toml)
    #[arg(long, env = "DEVKIT_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter for diagnostics on stderr (e.g. "debug", "devkit_survey=debug")
    #[arg(long, short = 'v', env = "DEVKIT_LOG", global = true, default_value = "warn")]
    pub verbosity: String,

    /// Allow interactive prompts such as the feedback survey
    #[arg(long, global = true, default_value_t = true, action = ArgAction::Set)]
    pub interactive: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if the destination is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a web browser to fill out a devkit feedback survey
    Survey {
        /// Survey to open
        #[arg(long, default_value = HATS_ID)]
        id: String,
    },
    /// Interact with the global devkit configuration
    #[command(visible_alias = "cfg")]
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "devkit", &mut std::io::stdout());
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set a configuration value (keys: disable-prompt, last-prompted, last-taken)
    Set {
        /// Apply the change to the survey settings
        #[arg(long)]
        survey: bool,
        /// Configuration key to set
        key: String,
        /// Value to set
        value: String,
    },
    /// Remove a configuration value
    Unset {
        /// Apply the change to the survey settings
        #[arg(long)]
        survey: bool,
        /// Configuration key to remove
        key: String,
    },
    /// Show the global configuration
    List {
        /// Output format
        #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the global config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survey_defaults_to_hats() {
        let cli = Cli::parse_from(["devkit", "survey"]);

        match cli.command {
            Commands::Survey { id } => assert_eq!(id, "hats"),
            _ => panic!("expected survey command"),
        }
    }

    #[test]
    fn parses_survey_id() {
        let cli = Cli::parse_from(["devkit", "survey", "--id", "nps"]);

        match cli.command {
            Commands::Survey { id } => assert_eq!(id, "nps"),
            _ => panic!("expected survey command"),
        }
    }

    #[test]
    fn parses_config_set_survey() {
        let cli = Cli::parse_from([
            "devkit",
            "config",
            "set",
            "--survey",
            "disable-prompt",
            "true",
        ]);

        match cli.command {
            Commands::Config { action } => match action {
                ConfigCommands::Set { survey, key, value } => {
                    assert!(survey);
                    assert_eq!(key, "disable-prompt");
                    assert_eq!(value, "true");
                }
                _ => panic!("expected config set"),
            },
            _ => panic!("expected config command"),
        }
    }

    #[test]
    fn parses_config_unset_with_alias() {
        let cli = Cli::parse_from(["devkit", "cfg", "unset", "--survey", "last-taken"]);

        match cli.command {
            Commands::Config { action } => match action {
                ConfigCommands::Unset { survey, key } => {
                    assert!(survey);
                    assert_eq!(key, "last-taken");
                }
                _ => panic!("expected config unset"),
            },
            _ => panic!("expected config command"),
        }
    }

    #[test]
    fn parses_config_list_json() {
        let cli = Cli::parse_from(["devkit", "config", "list", "-o", "json"]);

        match cli.command {
            Commands::Config { action } => match action {
                ConfigCommands::List { format } => assert_eq!(format, OutputFormat::Json),
                _ => panic!("expected config list"),
            },
            _ => panic!("expected config command"),
        }
    }

    #[test]
    fn interactive_defaults_to_true() {
        let cli = Cli::parse_from(["devkit", "config", "path"]);
        assert!(cli.interactive);
        assert_eq!(cli.verbosity, "warn");
    }

    #[test]
    fn interactive_can_be_disabled() {
        let cli = Cli::parse_from(["devkit", "--interactive=false", "config", "path"]);
        assert!(!cli.interactive);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "devkit",
            "config",
            "path",
            "--config",
            "/tmp/devkit.toml",
            "--color",
            "never",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/devkit.toml")));
        assert!(matches!(cli.color, ColorChoice::Never));
    }

    #[test]
    fn parses_completion_shell() {
        let cli = Cli::parse_from(["devkit", "completion", "bash"]);
        assert!(matches!(cli.command, Commands::Completion { shell: Shell::Bash }));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
