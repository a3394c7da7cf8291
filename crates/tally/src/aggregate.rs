use crate::config::UnrecognizedPolicy;
use crate::error::TallyError;
use crate::model::{Volunteer, VolunteerHours};

/// Sum verified durations per volunteer, one result per volunteer in input order.
pub fn aggregate_hours(
    volunteers: &[Volunteer],
    policy: UnrecognizedPolicy,
) -> Result<Vec<VolunteerHours>, TallyError> {
    volunteers
        .iter()
        .map(|volunteer| -> Result<VolunteerHours, TallyError> {
            let mut hours = 0.0;
            for activity in &volunteer.activities {
                let counts = activity.verification.counts(policy).ok_or_else(|| {
                    TallyError::RejectedVerification {
                        source_name: volunteer.source.clone(),
                        volunteer: volunteer.name.clone(),
                        value: activity.verification.to_string(),
                    }
                })?;
                if counts {
                    hours += activity.duration;
                }
            }

            Ok(VolunteerHours {
                id: volunteer.id,
                name: volunteer.name.clone(),
                hours,
            })
        })
        .collect()
}
