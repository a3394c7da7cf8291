use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::config::{InvalidIdPolicy, UnrecognizedPolicy};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Volunteer id as a source delivers it: a JSON number or a numeral string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for RawId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Verification flag as a source delivers it: a boolean or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawVerified {
    Flag(bool),
    Text(String),
}

/// One activity in source shape. Exactly one duration field is expected,
/// which one depends on the source.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawActivity {
    pub verified: RawVerified,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawVolunteer {
    pub id: RawId,
    pub name: String,
    pub activities: Vec<RawActivity>,
}

/// Pre-loaded raw volunteers keyed by source name. Run order comes from the
/// config's source list, not from this map.
#[derive(Debug, Default)]
pub struct TallyInput {
    pub records: HashMap<String, Vec<RawVolunteer>>,
}

// ---------------------------------------------------------------------------
// Normalized
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Verified,
    Unverified,
    /// Any string other than "Yes"/"No", kept verbatim.
    Unrecognized(String),
}

impl std::fmt::Display for Verification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verified => write!(f, "Yes"),
            Self::Unverified => write!(f, "No"),
            Self::Unrecognized(value) => write!(f, "{value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub verification: Verification,
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Volunteer {
    pub source: String,
    pub id: i64,
    pub name: String,
    pub activities: Vec<Activity>,
}

/// A volunteer dropped by the normalizer under `invalid_id = "skip"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedVolunteer {
    pub source: String,
    pub raw_id: String,
    pub name: String,
    pub reason: String,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolunteerHours {
    pub id: i64,
    pub name: String,
    pub hours: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TallySummary {
    pub volunteers: usize,
    pub activities: usize,
    /// Activities whose hours were added to a total.
    pub counted_activities: usize,
    pub unverified_activities: usize,
    /// Activities with a verification string other than Yes/No, counted or not.
    pub unrecognized_activities: usize,
    pub skipped_volunteers: usize,
    pub total_hours: f64,
    pub volunteers_by_source: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TallyMeta {
    pub config_name: String,
    pub engine_version: String,
    pub sources: Vec<String>,
    pub unrecognized_verification: UnrecognizedPolicy,
    pub invalid_id: InvalidIdPolicy,
}

#[derive(Debug, Clone, Serialize)]
pub struct TallyResult {
    pub meta: TallyMeta,
    pub summary: TallySummary,
    pub volunteers: Vec<VolunteerHours>,
    pub skipped: Vec<SkippedVolunteer>,
}
