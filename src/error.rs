use std::path::PathBuf;

/// Errors raised while configuring or building a logger.
///
/// Emission never returns these: a running logger either continues, unwinds or
/// terminates. They surface only from the fallible constructors.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Invalid Config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Cannot open sink '{}': {source}", path.display())]
    OpenSink {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown Level: {0}")]
    UnknownLevel(String),
}
