use std::collections::BTreeMap;

use crate::config::UnrecognizedPolicy;
use crate::model::{SkippedVolunteer, TallySummary, Verification, Volunteer, VolunteerHours};

/// Compute summary statistics from normalized volunteers and their totals.
pub fn compute_summary(
    volunteers: &[Volunteer],
    results: &[VolunteerHours],
    skipped: &[SkippedVolunteer],
    policy: UnrecognizedPolicy,
) -> TallySummary {
    let mut volunteers_by_source: BTreeMap<String, usize> = BTreeMap::new();
    let mut activities = 0;
    let mut counted_activities = 0;
    let mut unverified_activities = 0;
    let mut unrecognized_activities = 0;

    for v in volunteers {
        *volunteers_by_source.entry(v.source.clone()).or_insert(0) += 1;

        for a in &v.activities {
            activities += 1;
            if matches!(a.verification, Verification::Unrecognized(_)) {
                unrecognized_activities += 1;
            }
            match a.verification.counts(policy) {
                Some(true) => counted_activities += 1,
                Some(false) => unverified_activities += 1,
                None => {}
            }
        }
    }

    TallySummary {
        volunteers: results.len(),
        activities,
        counted_activities,
        unverified_activities,
        unrecognized_activities,
        skipped_volunteers: skipped.len(),
        total_hours: results.iter().map(|r| r.hours).sum(),
        volunteers_by_source,
    }
}
