use std::fmt;

#[derive(Debug)]
pub enum TallyError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (no sources, duplicate name, etc.).
    ConfigValidation(String),
    /// A configured source has no loaded records.
    MissingSource(String),
    /// A source file is not a JSON array of volunteers.
    SourceParse { source_name: String, message: String },
    /// A textual volunteer id has no leading decimal digits.
    InvalidId { source_name: String, value: String },
    /// An activity lacks the duration field its source shape declares.
    MissingDuration {
        source_name: String,
        volunteer: String,
        field: String,
    },
    /// A verification value outside Yes/No under the `reject` policy.
    RejectedVerification {
        source_name: String,
        volunteer: String,
        value: String,
    },
    /// IO error (file read, etc.).
    Io(String),
}

impl fmt::Display for TallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::MissingSource(name) => write!(f, "source '{name}' has no data"),
            Self::SourceParse { source_name, message } => {
                write!(f, "source '{source_name}': {message}")
            }
            Self::InvalidId { source_name, value } => {
                write!(f, "source '{source_name}': cannot parse volunteer id '{value}'")
            }
            Self::MissingDuration { source_name, volunteer, field } => {
                write!(
                    f,
                    "source '{source_name}', volunteer '{volunteer}': activity has no '{field}' field"
                )
            }
            Self::RejectedVerification { source_name, volunteer, value } => {
                write!(
                    f,
                    "source '{source_name}', volunteer '{volunteer}': unrecognized verification value '{value}'"
                )
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for TallyError {}

impl TallyError {
    /// True for errors caused by record contents rather than config or IO.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidId { .. } | Self::MissingDuration { .. } | Self::RejectedVerification { .. }
        )
    }
}
