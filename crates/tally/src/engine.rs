use log::debug;

use crate::aggregate::aggregate_hours;
use crate::config::TallyConfig;
use crate::error::TallyError;
use crate::model::{RawVolunteer, TallyInput, TallyMeta, TallyResult};
use crate::normalize::normalize_volunteers;
use crate::summary::compute_summary;

/// Run the tally per config. Returns verified hours per volunteer + summary.
pub fn run(config: &TallyConfig, input: &TallyInput) -> Result<TallyResult, TallyError> {
    let normalized = normalize_volunteers(config, input)?;
    let volunteers = aggregate_hours(&normalized.volunteers, config.unrecognized_verification)?;

    let summary = compute_summary(
        &normalized.volunteers,
        &volunteers,
        &normalized.skipped,
        config.unrecognized_verification,
    );
    debug!(
        "tallied {} volunteer(s), {} activity(ies), {} hour(s)",
        summary.volunteers, summary.activities, summary.total_hours
    );

    Ok(TallyResult {
        meta: TallyMeta {
            config_name: config.name.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            sources: config.source_names(),
            unrecognized_verification: config.unrecognized_verification,
            invalid_id: config.invalid_id,
        },
        summary,
        volunteers,
        skipped: normalized.skipped,
    })
}

/// Parse one source file: a JSON array of raw volunteers.
pub fn load_source_json(source_name: &str, json: &str) -> Result<Vec<RawVolunteer>, TallyError> {
    let rows: Vec<RawVolunteer> =
        serde_json::from_str(json).map_err(|e| TallyError::SourceParse {
            source_name: source_name.into(),
            message: e.to_string(),
        })?;
    debug!("loaded {} volunteer(s) from '{source_name}'", rows.len());
    Ok(rows)
}
