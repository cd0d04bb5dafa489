//! Runtime configuration and injected data
//!
//! [`Config`] says where the dictionaries live; [`InjectedData`] carries the
//! optional JSON datasets that override or extend the built-in pools.

use crate::dictionary::{HttpRemoteDictionary, LocalDictionary, source_for_location};
use crate::validator::GuessValidator;
use crate::wordlists::PoolRegistry;
use reqwest::Client;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_DICTIONARY_LOCATION: &str = "dictionary/pl_PL.dic";
pub const DEFAULT_VALIDATE_URL: &str = "http://127.0.0.1:8080/api/validate";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File path or `http(s)://` URL of the `.dic` dictionary
    pub dictionary_location: String,
    pub validate_url: String,
    pub http_timeout: Duration,
    pub native_pool_path: Option<PathBuf>,
    pub foreign_dictionary_path: Option<PathBuf>,
    pub bundled_dictionary_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_location: DEFAULT_DICTIONARY_LOCATION.to_string(),
            validate_url: DEFAULT_VALIDATE_URL.to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            native_pool_path: None,
            foreign_dictionary_path: None,
            bundled_dictionary_path: None,
        }
    }
}

/// Optional datasets supplied at startup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InjectedData {
    /// Replaces the embedded native pool (length → words)
    pub native_pool: Option<Value>,
    /// `{wordsByLength, definitionsByWord}`
    pub foreign_dictionary: Option<Value>,
    /// Preloaded dictionary (length → words), used instead of the `.dic` file
    pub bundled_dictionary: Option<Value>,
}

impl InjectedData {
    /// Read every dataset path named in `config`
    ///
    /// A named file that cannot be read or parsed is an error; what the JSON
    /// contains is filtered later and never fails here.
    pub fn load(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            native_pool: read_optional(config.native_pool_path.as_deref())?,
            foreign_dictionary: read_optional(config.foreign_dictionary_path.as_deref())?,
            bundled_dictionary: read_optional(config.bundled_dictionary_path.as_deref())?,
        })
    }
}

fn read_optional(path: Option<&Path>) -> Result<Option<Value>, ConfigError> {
    path.map(read_json).transpose()
}

fn read_json(path: &Path) -> Result<Value, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded injected data");
    Ok(value)
}

impl Config {
    /// HTTP client shared by the remote endpoint and a URL dictionary source
    pub fn http_client(&self) -> Result<Client, ConfigError> {
        let client = Client::builder()
            .timeout(self.http_timeout)
            .user_agent(concat!("slowko/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(client)
    }

    /// Wire the registry, both dictionaries and the validator together
    pub fn build_validator(&self, data: &InjectedData) -> Result<GuessValidator, ConfigError> {
        let client = self.http_client()?;

        let registry = PoolRegistry::from_injected(
            data.native_pool.as_ref(),
            data.foreign_dictionary.as_ref(),
        );

        let mut local =
            LocalDictionary::new(source_for_location(&self.dictionary_location, &client));
        if let Some(bundled) = &data.bundled_dictionary {
            local = local.with_bundled(bundled);
        }

        let remote = HttpRemoteDictionary::new(client, self.validate_url.clone());

        Ok(GuessValidator::new(
            Arc::new(registry),
            Arc::new(local),
            Arc::new(remote),
        ))
    }
}
