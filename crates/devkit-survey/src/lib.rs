pub mod catalog;
pub mod config;
pub mod error;
pub mod launcher;
pub mod runner;

pub use catalog::{get_survey, valid_ids, Survey, HATS_ID};
pub use config::{ContextConfig, GlobalConfig, SurveyConfig, SURVEY_KEYS};
pub use error::{Result, SurveyError};
pub use launcher::{Launcher, SystemBrowser};
pub use runner::Runner;
