use std::path::PathBuf;
use std::str::FromStr;

/// Which evaluator to run each record through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// Only fields present in the record (edit/blur validation).
    Fields,
    /// Every declared field, absent ones treated as empty (submit validation).
    Submission,
}

impl FromStr for CheckMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fields" => Ok(CheckMode::Fields),
            "submission" => Ok(CheckMode::Submission),
            _ => Err(ConfigError::Invalid {
                var: "INTAKE_CHECK_MODE",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Checker configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// JSON schema document to load instead of the built-in schema.
    pub schema_path: Option<PathBuf>,
    pub mode: CheckMode,
    /// Exit non-zero when any record fails validation.
    pub fail_on_invalid: bool,
}

impl CheckConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                  | Default          |
    /// |--------------------------|------------------|
    /// | `INTAKE_SCHEMA_PATH`     | built-in schema  |
    /// | `INTAKE_CHECK_MODE`      | `fields`         |
    /// | `INTAKE_FAIL_ON_INVALID` | `false`          |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let schema_path = lookup("INTAKE_SCHEMA_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let mode = match lookup("INTAKE_CHECK_MODE") {
            Some(value) => value.parse()?,
            None => CheckMode::Fields,
        };

        let fail_on_invalid = match lookup("INTAKE_FAIL_ON_INVALID") {
            Some(value) => parse_bool("INTAKE_FAIL_ON_INVALID", &value)?,
            None => false,
        };

        Ok(Self {
            schema_path,
            mode,
            fail_on_invalid,
        })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
        }),
    }
}
