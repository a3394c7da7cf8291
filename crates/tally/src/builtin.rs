//! Bundled activity logs for the Wolf Point and Raccoon Meadows sites.
//!
//! Used when no config file is given. Wolf Point is read first, then
//! Raccoon Meadows.

use std::collections::HashMap;

use crate::config::{DurationField, InvalidIdPolicy, SourceConfig, TallyConfig, UnrecognizedPolicy};
use crate::engine::load_source_json;
use crate::error::TallyError;
use crate::model::TallyInput;

pub const WOLF_POINT: &str = "wolf_point";
pub const RACCOON_MEADOWS: &str = "raccoon_meadows";

const WOLF_POINT_JSON: &str = include_str!("../data/wolf-point.json");
const RACCOON_MEADOWS_JSON: &str = include_str!("../data/raccoon-meadows.json");

pub fn builtin_config() -> TallyConfig {
    TallyConfig {
        name: "Bundled site logs".into(),
        sources: vec![
            SourceConfig {
                name: WOLF_POINT.into(),
                file: "wolf-point.json".into(),
                duration_field: DurationField::Time,
            },
            SourceConfig {
                name: RACCOON_MEADOWS.into(),
                file: "raccoon-meadows.json".into(),
                duration_field: DurationField::Hours,
            },
        ],
        unrecognized_verification: UnrecognizedPolicy::Unverified,
        invalid_id: InvalidIdPolicy::Abort,
    }
}

pub fn builtin_input() -> Result<TallyInput, TallyError> {
    let records = HashMap::from([
        (WOLF_POINT.to_string(), load_source_json(WOLF_POINT, WOLF_POINT_JSON)?),
        (
            RACCOON_MEADOWS.to_string(),
            load_source_json(RACCOON_MEADOWS, RACCOON_MEADOWS_JSON)?,
        ),
    ]);
    Ok(TallyInput { records })
}
