use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntryError {
    #[error("Malformed round clock: '{raw}' (expected M:SS)")]
    MalformedClock { raw: String },

    #[error("No attacking-side frames in telemetry; entrance ratio is undefined")]
    EmptyAttackerSet,

    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EntryError {
    /// True when the error was caused by caller-supplied data rather than the environment.
    pub fn is_input_error(&self) -> bool {
        match self {
            EntryError::MalformedClock { .. } => true,
            EntryError::EmptyAttackerSet => true,
            EntryError::InvalidBoundary(_) => true,
            EntryError::InvalidConfig(_) => true,
            EntryError::Deserialization(_) => true,
            EntryError::Io(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, EntryError>;
