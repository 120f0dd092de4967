//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `RERANKD_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use crate::model::DEFAULT_MODEL_REPO;

const ENV_PORT: &str = "RERANKD_PORT";
const ENV_BIND_ADDR: &str = "RERANKD_BIND_ADDR";
const ENV_MODEL: &str = "RERANKD_MODEL";
const ENV_MODEL_PATH: &str = "RERANKD_MODEL_PATH";
const ENV_STUB_MODEL: &str = "RERANKD_STUB_MODEL";

const DEFAULT_PORT: u16 = 8080;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RERANKD_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Model-hub identifier of the cross-encoder to load.
    pub model_repo: String,

    /// Local model directory override (config.json, tokenizer.json,
    /// model.safetensors). When set, no hub fetch happens.
    pub model_path: Option<PathBuf>,

    /// Run with the deterministic lexical stub instead of real weights.
    pub stub_model: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            model_repo: DEFAULT_MODEL_REPO.to_string(),
            model_path: None,
            stub_model: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = non_empty_var(ENV_PORT) {
            let port: u16 = value.parse().map_err(|e| ConfigError::PortParse {
                value: value.clone(),
                source: e,
            })?;
            if port == 0 {
                return Err(ConfigError::InvalidPort(value));
            }
            config.port = port;
        }

        if let Some(value) = non_empty_var(ENV_BIND_ADDR) {
            config.bind_addr = value
                .parse()
                .map_err(|e| ConfigError::BindAddrParse { value, source: e })?;
        }

        if let Some(repo) = non_empty_var(ENV_MODEL) {
            config.model_repo = repo;
        }

        config.model_path = non_empty_var(ENV_MODEL_PATH).map(PathBuf::from);
        config.stub_model = env::var_os(ENV_STUB_MODEL).is_some_and(|v| !v.is_empty());

        Ok(config)
    }

    /// Validates paths and basic invariants (does not touch the network).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model_repo.trim().is_empty() {
            return Err(ConfigError::EmptyModelRepo);
        }

        match &self.model_path {
            Some(path) if !path.exists() => Err(ConfigError::PathNotFound { path: path.clone() }),
            Some(path) if !path.is_dir() => Err(ConfigError::NotADirectory { path: path.clone() }),
            _ => Ok(()),
        }
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
