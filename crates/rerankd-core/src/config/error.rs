//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while loading or validating the server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port parsed but is outside the usable range.
    #[error("invalid port '{0}': must be between 1 and 65535")]
    InvalidPort(String),

    /// Port value is not a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParse {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address is not a valid IPv4 or IPv6 address.
    #[error("failed to parse bind address '{value}': {source}")]
    BindAddrParse {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Model repo identifier resolved to an empty string.
    #[error("model identifier must not be empty")]
    EmptyModelRepo,

    /// Local model path does not exist.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Local model path exists but is not a directory.
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
