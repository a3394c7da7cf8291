use crate::config::UnrecognizedPolicy;
use crate::model::{RawVerified, Verification};

/// Resolve a source verification flag. Booleans map directly, "Yes"/"No"
/// map to verified/unverified, every other string is kept as unrecognized.
pub fn resolve_verification(raw: &RawVerified) -> Verification {
    match raw {
        RawVerified::Flag(true) => Verification::Verified,
        RawVerified::Flag(false) => Verification::Unverified,
        RawVerified::Text(s) if s == "Yes" => Verification::Verified,
        RawVerified::Text(s) if s == "No" => Verification::Unverified,
        RawVerified::Text(s) => Verification::Unrecognized(s.clone()),
    }
}

impl Verification {
    /// Whether an activity with this verification counts toward hours.
    /// `None` means the policy rejects the value outright.
    pub fn counts(&self, policy: UnrecognizedPolicy) -> Option<bool> {
        match self {
            Self::Verified => Some(true),
            Self::Unverified => Some(false),
            Self::Unrecognized(value) => match policy {
                UnrecognizedPolicy::Unverified => Some(false),
                UnrecognizedPolicy::Truthy => Some(!value.is_empty()),
                UnrecognizedPolicy::Reject => None,
            },
        }
    }
}
