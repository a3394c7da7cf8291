use crate::config::DurationField;
use crate::model::RawActivity;

/// Read an activity's duration from the field its source shape declares.
/// Returns the name of the missing field on failure.
pub fn resolve_duration(activity: &RawActivity, field: DurationField) -> Result<f64, &'static str> {
    match field {
        DurationField::Hours => activity.hours.ok_or("hours"),
        DurationField::Time => activity.time.ok_or("time"),
        DurationField::Auto => activity.hours.or(activity.time).ok_or("hours/time"),
    }
}
