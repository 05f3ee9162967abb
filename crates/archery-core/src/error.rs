use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid scoring rule: {0} (expected 0-16)")]
    InvalidScoringRule(u8),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Event {0} was not found")]
    EventNotFound(u32),

    #[error("Archer {0} was not found")]
    ArcherNotFound(u32),

    #[error("Archer {archer_id} has a score in event {event_id} but no category")]
    UncategorizedArcher { event_id: u32, archer_id: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParseError(e.to_string())
    }
}
