//! `tally`: volunteer-hours normalization and aggregation engine.
//!
//! Pure engine crate: receives pre-loaded source records, returns verified
//! hours per volunteer. No CLI dependencies; the only IO is parsing JSON text
//! handed in by the caller.

pub mod aggregate;
pub mod builtin;
pub mod config;
pub mod duration;
pub mod engine;
pub mod error;
pub mod model;
pub mod normalize;
pub mod summary;
pub mod verification;

pub use config::TallyConfig;
pub use engine::run;
pub use error::TallyError;
pub use model::{TallyInput, TallyResult, VolunteerHours};
