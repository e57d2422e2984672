use std::io;
use thiserror::Error;

/// A type alias for handling `Result`s with `Error`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or resolving MMS APN settings
#[derive(Error, Debug)]
pub enum Error {
    /// No candidate APN matched the requested type with a usable MMSC
    #[error("Can not find valid APN")]
    NoValidApn,

    /// A matching APN carried an MMSC that is not a valid URI reference
    #[error("Invalid MMSC url {0}")]
    InvalidMmscUrl(String),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// The APN record source failed to produce candidates
    #[error("APN source error: {0}")]
    Source(String),

    /// TOML decoding error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Input/output error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether this error came out of APN selection rather than from
    /// configuration or the record source.
    pub fn is_resolution_error(&self) -> bool {
        matches!(self, Error::NoValidApn | Error::InvalidMmscUrl(_))
    }
}
