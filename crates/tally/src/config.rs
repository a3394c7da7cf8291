use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::TallyError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct TallyConfig {
    pub name: String,
    /// Sources in concatenation order. Results follow this order.
    pub sources: Vec<SourceConfig>,
    #[serde(default)]
    pub unrecognized_verification: UnrecognizedPolicy,
    #[serde(default)]
    pub invalid_id: InvalidIdPolicy,
}

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    pub name: String,
    /// JSON file, resolved relative to the config file's directory.
    pub file: String,
    #[serde(default)]
    pub duration_field: DurationField,
}

/// Which field of a raw activity holds its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationField {
    Hours,
    Time,
    /// `hours` when present, otherwise `time`.
    #[default]
    Auto,
}

impl std::fmt::Display for DurationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hours => write!(f, "hours"),
            Self::Time => write!(f, "time"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// What to do with a verification string other than "Yes"/"No".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrecognizedPolicy {
    /// Never counts toward hours.
    #[default]
    Unverified,
    /// Counts when the string is non-empty.
    Truthy,
    /// Fails the run.
    Reject,
}

impl std::fmt::Display for UnrecognizedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unverified => write!(f, "unverified"),
            Self::Truthy => write!(f, "truthy"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// What to do with a volunteer whose textual id has no leading digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidIdPolicy {
    #[default]
    Abort,
    Skip,
}

impl std::fmt::Display for InvalidIdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Abort => write!(f, "abort"),
            Self::Skip => write!(f, "skip"),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl TallyConfig {
    pub fn from_toml(input: &str) -> Result<Self, TallyError> {
        let config: TallyConfig =
            toml::from_str(input).map_err(|e| TallyError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TallyError> {
        if self.sources.is_empty() {
            return Err(TallyError::ConfigValidation(
                "at least 1 source is required".into(),
            ));
        }

        let mut seen = HashSet::new();
        for (i, source) in self.sources.iter().enumerate() {
            if source.name.trim().is_empty() {
                return Err(TallyError::ConfigValidation(format!(
                    "source #{} has an empty name",
                    i + 1
                )));
            }
            if source.file.trim().is_empty() {
                return Err(TallyError::ConfigValidation(format!(
                    "source '{}' has an empty file",
                    source.name
                )));
            }
            if !seen.insert(source.name.as_str()) {
                return Err(TallyError::ConfigValidation(format!(
                    "duplicate source name '{}'",
                    source.name
                )));
            }
        }

        Ok(())
    }

    pub fn source_names(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.name.clone()).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
