use log::{debug, warn};

use crate::config::{InvalidIdPolicy, SourceConfig, TallyConfig};
use crate::duration::resolve_duration;
use crate::error::TallyError;
use crate::model::{
    Activity, RawActivity, RawId, RawVolunteer, SkippedVolunteer, TallyInput, Volunteer,
};
use crate::verification::resolve_verification;

/// Normalizer output: kept volunteers in source order, plus any dropped under
/// `invalid_id = "skip"`.
#[derive(Debug, Default)]
pub struct Normalized {
    pub volunteers: Vec<Volunteer>,
    pub skipped: Vec<SkippedVolunteer>,
}

/// Parse a textual id as a base-10 integer prefix: leading whitespace and one
/// sign are accepted, parsing stops at the first non-digit. `None` when there
/// are no digits or the value overflows.
pub fn parse_volunteer_id(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

pub fn normalize_id(raw: &RawId) -> Option<i64> {
    match raw {
        RawId::Number(n) => Some(*n),
        RawId::Text(s) => parse_volunteer_id(s),
    }
}

/// Convert a source-shaped activity into the uniform shape.
pub fn adapt_activity(
    source: &SourceConfig,
    volunteer: &str,
    activity: &RawActivity,
) -> Result<Activity, TallyError> {
    let duration = resolve_duration(activity, source.duration_field).map_err(|field| {
        TallyError::MissingDuration {
            source_name: source.name.clone(),
            volunteer: volunteer.into(),
            field: field.into(),
        }
    })?;

    Ok(Activity {
        verification: resolve_verification(&activity.verified),
        duration,
    })
}

/// Normalize one source's volunteers, appending to `out` in order.
pub fn normalize_source(
    source: &SourceConfig,
    raws: &[RawVolunteer],
    policy: InvalidIdPolicy,
    out: &mut Normalized,
) -> Result<(), TallyError> {
    for raw in raws {
        let Some(id) = normalize_id(&raw.id) else {
            match policy {
                InvalidIdPolicy::Abort => {
                    return Err(TallyError::InvalidId {
                        source_name: source.name.clone(),
                        value: raw.id.to_string(),
                    });
                }
                InvalidIdPolicy::Skip => {
                    warn!(
                        "source '{}': skipping volunteer '{}' with unparsable id '{}'",
                        source.name, raw.name, raw.id
                    );
                    out.skipped.push(SkippedVolunteer {
                        source: source.name.clone(),
                        raw_id: raw.id.to_string(),
                        name: raw.name.clone(),
                        reason: "id has no leading decimal digits".into(),
                    });
                    continue;
                }
            }
        };

        let activities = raw
            .activities
            .iter()
            .map(|a| adapt_activity(source, &raw.name, a))
            .collect::<Result<Vec<_>, _>>()?;

        out.volunteers.push(Volunteer {
            source: source.name.clone(),
            id,
            name: raw.name.clone(),
            activities,
        });
    }

    Ok(())
}

/// Concatenate all configured sources in config order and normalize them.
pub fn normalize_volunteers(
    config: &TallyConfig,
    input: &TallyInput,
) -> Result<Normalized, TallyError> {
    let mut out = Normalized::default();

    for source in &config.sources {
        let raws = input
            .records
            .get(&source.name)
            .ok_or_else(|| TallyError::MissingSource(source.name.clone()))?;
        debug!(
            "normalizing {} volunteer(s) from '{}' (duration field: {})",
            raws.len(),
            source.name,
            source.duration_field
        );
        normalize_source(source, raws, config.invalid_id, &mut out)?;
    }

    Ok(out)
}
