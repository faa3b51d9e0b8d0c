//! Engine configuration loaded from TOML.
//!
//! A configuration file holds optional overrides; anything it leaves out
//! keeps its default. Unknown keys are rejected.
//!
//! ```toml
//! reference_url = "https://jsonplaceholder.typicode.com/posts"
//! request_timeout_secs = 10
//! assignee_domain = "dream11.com"
//! utc_offset_minutes = 330
//! autocomplete_debounce_ms = 250
//! data_dir = ".taskboard"
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use chrono::{FixedOffset, Offset, Utc};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::task::adapters::http::{DEFAULT_REFERENCE_URL, DEFAULT_REQUEST_TIMEOUT};
use crate::task::validation::{AssigneeRule, DEFAULT_ASSIGNEE_DOMAIN};

/// Default debounce applied to suggestion requests.
pub const DEFAULT_AUTOCOMPLETE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Default directory for persisted task slots.
pub const DEFAULT_DATA_DIR: &str = ".taskboard";

const MINUTES_PER_DAY: i32 = 24 * 60;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// File that was being read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value parsed but is out of range or malformed.
    #[error("invalid config: {0}")]
    Validation(String),

    /// The assignee pattern could not be compiled.
    #[error("invalid assignee domain: {0}")]
    AssigneeRule(#[from] regex::Error),
}

/// Optional overrides as they appear in the file.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Reference catalog endpoint.
    pub reference_url: Option<String>,
    /// Reference request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Mail domain assignees must belong to.
    pub assignee_domain: Option<String>,
    /// Offset applied to due dates written without one, in minutes east of
    /// UTC.
    pub utc_offset_minutes: Option<i32>,
    /// Delay before a suggestion request fetches, in milliseconds.
    pub autocomplete_debounce_ms: Option<u64>,
    /// Directory holding persisted task slots.
    pub data_dir: Option<String>,
}

/// Resolved engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Reference catalog endpoint.
    pub reference_url: String,
    /// Reference request timeout.
    pub request_timeout: Duration,
    /// Mail domain assignees must belong to.
    pub assignee_domain: String,
    /// Offset applied to due dates written without one.
    pub utc_offset: FixedOffset,
    /// Delay before a suggestion request fetches.
    pub autocomplete_debounce: Duration,
    /// Directory holding persisted task slots.
    pub data_dir: Utf8PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            reference_url: DEFAULT_REFERENCE_URL.to_owned(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            assignee_domain: DEFAULT_ASSIGNEE_DOMAIN.to_owned(),
            utc_offset: Utc.fix(),
            autocomplete_debounce: DEFAULT_AUTOCOMPLETE_DEBOUNCE,
            data_dir: Utf8PathBuf::from(DEFAULT_DATA_DIR),
        }
    }
}

impl TrackerConfig {
    /// Loads configuration from `path`, or returns defaults when no path is
    /// given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or
    /// validated.
    pub fn load(path: Option<&Utf8Path>) -> Result<Self, ConfigError> {
        let Some(file_path) = path else {
            return Ok(Self::default());
        };
        let content = read_config_file(file_path)?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Self::merge(file)
    }

    /// Applies validated overrides on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for out-of-range values.
    pub fn merge(file: ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let reference_url = match file.reference_url {
            Some(url) => validate_url(url)?,
            None => defaults.reference_url,
        };
        let request_timeout = match file.request_timeout_secs {
            Some(0) => {
                return Err(ConfigError::Validation(
                    "request_timeout_secs must be greater than zero".to_owned(),
                ));
            }
            Some(secs) => Duration::from_secs(secs),
            None => defaults.request_timeout,
        };
        let assignee_domain = match file.assignee_domain {
            Some(domain) => validate_domain(domain)?,
            None => defaults.assignee_domain,
        };
        let utc_offset = match file.utc_offset_minutes {
            Some(minutes) => offset_from_minutes(minutes)?,
            None => defaults.utc_offset,
        };
        let autocomplete_debounce = file
            .autocomplete_debounce_ms
            .map_or(defaults.autocomplete_debounce, Duration::from_millis);
        let data_dir = file.data_dir.map_or(defaults.data_dir, Utf8PathBuf::from);

        Ok(Self {
            reference_url,
            request_timeout,
            assignee_domain,
            utc_offset,
            autocomplete_debounce,
            data_dir,
        })
    }

    /// Builds the assignee rule for the configured domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AssigneeRule`] if the pattern cannot be
    /// compiled.
    pub fn assignee_rule(&self) -> Result<AssigneeRule, ConfigError> {
        Ok(AssigneeRule::for_domain(&self.assignee_domain)?)
    }
}

fn read_config_file(path: &Utf8Path) -> Result<String, ConfigError> {
    let read_error = |source: std::io::Error| ConfigError::Read {
        path: path.to_owned(),
        source,
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| read_error(std::io::Error::other("path must include a file name")))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read_to_string(file_name).map_err(read_error)
}

fn validate_url(url: String) -> Result<String, ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        return Ok(url);
    }
    Err(ConfigError::Validation(format!(
        "reference_url must be an http(s) URL, got '{url}'"
    )))
}

fn validate_domain(domain: String) -> Result<String, ConfigError> {
    let is_valid = !domain.is_empty()
        && !domain.contains('@')
        && !domain.chars().any(char::is_whitespace);
    if is_valid {
        return Ok(domain);
    }
    Err(ConfigError::Validation(format!(
        "assignee_domain must be a bare domain, got '{domain}'"
    )))
}

fn offset_from_minutes(minutes: i32) -> Result<FixedOffset, ConfigError> {
    let out_of_range = || {
        ConfigError::Validation(format!(
            "utc_offset_minutes must be within ±{}, got {minutes}",
            MINUTES_PER_DAY - 1
        ))
    };
    if minutes.unsigned_abs() >= MINUTES_PER_DAY.unsigned_abs() {
        return Err(out_of_range());
    }
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(out_of_range)
}
