//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract; scripts rely on them.
//!
//! | Code | Description                                             |
//! |------|---------------------------------------------------------|
//! | 0    | Success                                                 |
//! | 1    | General error (unspecified)                             |
//! | 2    | CLI usage error (bad args, reported by clap)            |
//! | 3    | Config file unreadable, or failed to parse or validate  |
//! | 4    | Source file missing, unreadable, or not volunteer JSON  |
//! | 5    | Record data rejected (bad id, duration, verification)   |

use tally::TallyError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

// 2 (usage error) is emitted by clap itself on bad arguments.

/// Config parse or validation error.
pub const EXIT_INVALID_CONFIG: u8 = 3;

/// Source file cannot be read or parsed.
pub const EXIT_SOURCE: u8 = 4;

/// A record failed normalization under the configured policies.
pub const EXIT_INVALID_DATA: u8 = 5;

/// Map an engine error to its exit code.
pub fn tally_exit_code(err: &TallyError) -> u8 {
    match err {
        TallyError::ConfigParse(_) | TallyError::ConfigValidation(_) => EXIT_INVALID_CONFIG,
        TallyError::MissingSource(_) | TallyError::SourceParse { .. } | TallyError::Io(_) => {
            EXIT_SOURCE
        }
        TallyError::InvalidId { .. }
        | TallyError::MissingDuration { .. }
        | TallyError::RejectedVerification { .. } => EXIT_INVALID_DATA,
    }
}
