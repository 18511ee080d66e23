use crate::catalog::{self, get_survey, valid_ids};
use crate::config::{self, GlobalConfig, SurveyConfig};
use crate::error::{Result, SurveyError};
use crate::launcher::Launcher;
use chrono::{DateTime, Duration, Utc};
use devkit_color::{Color, Formatter, Output, TerminalDetector};
use std::path::PathBuf;
use tracing::debug;

const FORM: &str = "Thank you for offering your feedback on devkit! Understanding your experiences \
and opinions helps us make devkit better for you and other users.

devkit will now attempt to open the survey in your default web browser. You may also manually \
open it using this URL:

{url}

Tip: To permanently disable the survey prompt, run:
   devkit config set --survey disable-prompt true";

const PROMPT_WINDOW_DAYS: i64 = 10;
const TAKEN_WINDOW_DAYS: i64 = 90;

/// Decides when to ask for feedback and records what happened in the
/// global config file.
pub struct Runner<D, L> {
    config_file: PathBuf,
    formatter: Formatter<D>,
    launcher: L,
    is_terminal: fn(&dyn Output) -> bool,
    clock: fn() -> DateTime<Utc>,
}

fn stream_is_terminal(out: &dyn Output) -> bool {
    out.is_terminal()
}

impl<D: TerminalDetector, L: Launcher> Runner<D, L> {
    pub fn new(config_file: impl Into<PathBuf>, detector: D, launcher: L) -> Self {
        Self {
            config_file: config_file.into(),
            formatter: Formatter::new(detector),
            launcher,
            is_terminal: stream_is_terminal,
            clock: Utc::now,
        }
    }

    /// Replaces the check deciding whether the prompt destination is an
    /// interactive terminal. Colors are still governed by the detector.
    pub fn with_terminal_check(mut self, is_terminal: fn(&dyn Output) -> bool) -> Self {
        self.is_terminal = is_terminal;
        self
    }

    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// True unless the prompt is disabled or was shown or taken recently.
    /// An unreadable config counts as disabled.
    pub fn should_display_survey_prompt(&self) -> bool {
        let cfg = match GlobalConfig::read(&self.config_file) {
            Ok(cfg) => cfg,
            Err(e) => {
                debug!("not prompting for survey: {}", e);
                return false;
            }
        };

        match cfg.survey() {
            None => true,
            Some(survey) => {
                !survey.prompt_disabled() && !recently_prompted_or_taken(survey, (self.clock)())
            }
        }
    }

    /// Prints the survey prompt and records it, but only on a terminal.
    /// Whether the prompt is colored is up to the detector.
    pub fn display_survey_prompt(&self, out: &mut dyn Output) -> Result<()> {
        if !(self.is_terminal)(out) {
            return Ok(());
        }
        self.formatter
            .fprint(out, Color::Green, catalog::hats().prompt())?;
        config::update_survey_prompted(&self.config_file, (self.clock)())
    }

    /// Prints the survey URL, opens it in a browser, and records the survey
    /// as taken once the browser launched.
    pub fn open_survey_form(&self, out: &mut dyn Output, id: &str) -> Result<()> {
        let survey = get_survey(id).ok_or_else(|| SurveyError::InvalidId {
            id: id.to_string(),
            valid: format!("[{}]", valid_ids().join(", ")),
        })?;

        writeln!(out, "{}", FORM.replace("{url}", survey.url))?;

        if let Err(source) = self.launcher.open(survey.url) {
            debug!("could not open url {}", survey.url);
            return Err(SurveyError::Browser {
                url: survey.url.to_string(),
                source,
            });
        }

        config::update_survey_taken(&self.config_file, (self.clock)())
    }
}

fn recently_prompted_or_taken(survey: &SurveyConfig, now: DateTime<Utc>) -> bool {
    less_than(survey.last_taken, now, Duration::days(TAKEN_WINDOW_DAYS))
        || less_than(survey.last_prompted, now, Duration::days(PROMPT_WINDOW_DAYS))
}

fn less_than(at: Option<DateTime<Utc>>, now: DateTime<Utc>, window: Duration) -> bool {
    at.is_some_and(|t| now.signed_duration_since(t) < window)
}
