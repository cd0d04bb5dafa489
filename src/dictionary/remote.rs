//! Remote validation endpoint client
//!
//! `GET <endpoint>?word=<WORD>` answering `{"available": bool, "valid": bool}`.

use super::{DictionaryCheck, DictionaryError};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;
use serde_json::Value;
use tracing::{debug, warn};

/// A remote word validation service
#[async_trait]
pub trait RemoteDictionary: Send + Sync {
    /// Ask the service about `word`; never fails, degrades to unavailable
    async fn check_word(&self, word: &str) -> DictionaryCheck;
}

/// HTTP client for the validation endpoint
#[derive(Debug, Clone)]
pub struct HttpRemoteDictionary {
    client: Client,
    endpoint: String,
}

impl HttpRemoteDictionary {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    async fn query(&self, word: &str) -> Result<DictionaryCheck, DictionaryError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("word", word)])
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DictionaryError::Status(status));
        }

        let body: Value = response.json().await?;
        Ok(parse_check(&body))
    }
}

/// Read the two flags, treating anything that is not a JSON boolean as false
fn parse_check(body: &Value) -> DictionaryCheck {
    let flag = |name: &str| body.get(name).and_then(Value::as_bool).unwrap_or(false);
    DictionaryCheck {
        available: flag("available"),
        valid: flag("valid"),
    }
}

#[async_trait]
impl RemoteDictionary for HttpRemoteDictionary {
    async fn check_word(&self, word: &str) -> DictionaryCheck {
        match self.query(word).await {
            Ok(check) => {
                debug!(word, ?check, "remote dictionary answered");
                check
            }
            Err(err) => {
                warn!(endpoint = %self.endpoint, error = %err, "remote dictionary unavailable");
                DictionaryCheck::UNAVAILABLE
            }
        }
    }
}
