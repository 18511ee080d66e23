use crate::error::{Result, SurveyError};
use chrono::{DateTime, Utc};
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Keys accepted by [`SurveyConfig::set`] and [`SurveyConfig::unset`].
pub const SURVEY_KEYS: [&str; 3] = ["disable-prompt", "last-prompted", "last-taken"];

/// Global devkit configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<ContextConfig>,
    /// Sections devkit does not manage, kept as-is on write
    #[serde(flatten)]
    pub extra: toml::Table,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey: Option<SurveyConfig>,
    #[serde(flatten)]
    pub extra: toml::Table,
}

/// Survey prompt state, stored under `[global.survey]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SurveyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_prompt: Option<bool>,
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_prompted: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_taken: Option<DateTime<Utc>>,
}

/// Accepts timestamps written either as RFC 3339 strings or as native TOML
/// datetimes, which reach serde as a single-entry map.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::de::{self, MapAccess, Visitor};
    use serde::Deserializer;
    use std::fmt;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TimestampVisitor).map(Some)
    }

    pub(super) fn parse(value: &str) -> Option<DateTime<Utc>> {
        let value = value.trim().replacen(' ', "T", 1);
        if let Ok(t) = DateTime::parse_from_rfc3339(&value) {
            return Some(t.with_timezone(&Utc));
        }
        // TOML local datetimes carry no offset
        NaiveDateTime::parse_from_str(&value, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|t| t.and_utc())
    }

    struct TimestampVisitor;

    impl<'de> Visitor<'de> for TimestampVisitor {
        type Value = DateTime<Utc>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an RFC 3339 timestamp or a TOML datetime")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            parse(value).ok_or_else(|| E::invalid_value(de::Unexpected::Str(value), &self))
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let value = match map.next_entry::<String, String>()? {
                Some((_, value)) => value,
                None => return Err(de::Error::invalid_length(0, &self)),
            };
            while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
            self.visit_str(&value)
        }
    }
}

impl GlobalConfig {
    /// Read the config file. A missing file is an empty config.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        Figment::new()
            .merge(Serialized::defaults(GlobalConfig::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| SurveyError::ConfigRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    /// Write the config file, creating parent directories as needed.
    pub fn write(&self, path: &Path) -> Result<()> {
        let write_err = |source| SurveyError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(write_err)
    }

    pub fn survey(&self) -> Option<&SurveyConfig> {
        self.global.as_ref().and_then(|g| g.survey.as_ref())
    }

    /// Survey section, created if absent
    pub fn survey_mut(&mut self) -> &mut SurveyConfig {
        self.global
            .get_or_insert_with(ContextConfig::default)
            .survey
            .get_or_insert_with(SurveyConfig::default)
    }
}

impl SurveyConfig {
    pub fn prompt_disabled(&self) -> bool {
        self.disable_prompt == Some(true)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "disable-prompt" => {
                let flag = value.parse::<bool>().map_err(|_| SurveyError::InvalidConfigValue {
                    key: key.to_string(),
                    message: format!("expected true or false, got {:?}", value),
                })?;
                self.disable_prompt = Some(flag);
            }
            "last-prompted" => self.last_prompted = Some(parse_timestamp(key, value)?),
            "last-taken" => self.last_taken = Some(parse_timestamp(key, value)?),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "disable-prompt" => self.disable_prompt = None,
            "last-prompted" => self.last_prompted = None,
            "last-taken" => self.last_taken = None,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn parse_timestamp(key: &str, value: &str) -> Result<DateTime<Utc>> {
    timestamp::parse(value).ok_or_else(|| SurveyError::InvalidConfigValue {
        key: key.to_string(),
        message: format!("expected an RFC 3339 timestamp, got {:?}", value),
    })
}

fn unknown_key(key: &str) -> SurveyError {
    SurveyError::InvalidConfigValue {
        key: key.to_string(),
        message: format!("unknown survey key, expected one of {}", SURVEY_KEYS.join(", ")),
    }
}

fn update_survey<F>(path: &Path, f: F) -> Result<()>
where
    F: FnOnce(&mut SurveyConfig) -> Result<()>,
{
    let mut cfg = GlobalConfig::read(path)?;
    f(cfg.survey_mut())?;
    cfg.write(path)
}

/// Record that the survey prompt was shown at `now`.
pub fn update_survey_prompted(path: &Path, now: DateTime<Utc>) -> Result<()> {
    update_survey(path, |s| {
        s.last_prompted = Some(now);
        Ok(())
    })
}

/// Record that the survey was taken at `now`.
pub fn update_survey_taken(path: &Path, now: DateTime<Utc>) -> Result<()> {
    update_survey(path, |s| {
        s.last_taken = Some(now);
        Ok(())
    })
}

pub fn set_survey_value(path: &Path, key: &str, value: &str) -> Result<()> {
    update_survey(path, |s| s.set(key, value))
}

pub fn unset_survey_value(path: &Path, key: &str) -> Result<()> {
    update_survey(path, |s| s.unset(key))
}
