use crate::cli::{ConfigCommands, OutputFormat};
use anyhow::{bail, Context, Result};
use devkit_survey::config::{set_survey_value, unset_survey_value};
use devkit_survey::GlobalConfig;
use std::path::Path;

pub fn handle_config(config_file: &Path, action: &ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Set { survey, key, value } => {
            require_survey_flag(*survey)?;
            set_survey_value(config_file, key, value)
                .with_context(|| format!("Failed to set survey.{}", key))?;
            println!("set value survey.{} to {}", key, value);
            Ok(())
        }
        ConfigCommands::Unset { survey, key } => {
            require_survey_flag(*survey)?;
            unset_survey_value(config_file, key)
                .with_context(|| format!("Failed to unset survey.{}", key))?;
            println!("unset value survey.{}", key);
            Ok(())
        }
        ConfigCommands::List { format } => handle_list(config_file, *format),
        ConfigCommands::Path => {
            println!("{}", config_file.display());
            Ok(())
        }
    }
}

fn require_survey_flag(survey: bool) -> Result<()> {
    if !survey {
        bail!("Only survey settings can be changed. Pass --survey to target them");
    }
    Ok(())
}

fn handle_list(config_file: &Path, format: OutputFormat) -> Result<()> {
    let cfg = GlobalConfig::read(config_file)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&cfg)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("devkit config: {}", config_file.display());
            if cfg.survey().is_none() {
                println!("No survey settings configured.");
            } else {
                print!("{}", toml::to_string_pretty(&cfg)?);
            }
        }
    }
    Ok(())
}
