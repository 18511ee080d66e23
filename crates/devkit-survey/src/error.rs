use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by survey prompting and config persistence
#[derive(Error, Debug)]
pub enum SurveyError {
    #[error("invalid survey id {id:?} - please enter one of {valid}")]
    InvalidId { id: String, valid: String },

    #[error("reading global config {}: {message}", path.display())]
    ConfigRead { path: PathBuf, message: String },

    #[error("writing global config {}: {source}", path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("serializing global config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("invalid value for {key}: {message}")]
    InvalidConfigValue { key: String, message: String },

    #[error(transparent)]
    Output(#[from] io::Error),

    #[error("could not open url {url}: {source}")]
    Browser {
        url: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SurveyError>;
