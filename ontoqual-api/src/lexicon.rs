//! Remote synonym-service client for the lexical-enrichment boundary.
//!
//! Implements [`Lexicon`] by querying an HTTP synonym service:
//! `GET {endpoint}?word=<word>` returning a JSON array of lemma strings.
//! This replaces process-global lexical-backend state with an explicit,
//! injected dependency configured per pipeline.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use ontoqual_metrics::{dedup_lemmas, Lexicon, LexiconError};
use reqwest::Client;

/// Configuration for the remote lexicon client.
#[derive(Debug, Clone)]
pub struct LexiconConfig {
    /// Synonym service URL, e.g. `http://lexicon.local/v1/synonyms`
    pub endpoint: String,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// Per-lookup timeout
    pub request_timeout: Duration,
}

impl LexiconConfig {
    /// Configuration with default timeouts.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
        }
    }

    /// Set the TCP connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the per-lookup timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Synonym provider backed by a remote HTTP service.
pub struct RemoteLexicon {
    client: Client,
    endpoint: String,
}

impl RemoteLexicon {
    /// Build the client from a configuration.
    pub fn from_config(config: &LexiconConfig) -> Result<Self, LexiconError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| LexiconError::Backend(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl fmt::Debug for RemoteLexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteLexicon")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

#[async_trait]
impl Lexicon for RemoteLexicon {
    async fn synonyms(&self, word: &str) -> Result<Vec<String>, LexiconError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("word", word)])
            .send()
            .await
            .map_err(|e| LexiconError::Lookup {
                word: word.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LexiconError::Lookup {
                word: word.to_string(),
                reason: format!("service returned HTTP {status}"),
            });
        }

        let lemmas: Vec<String> = response.json().await.map_err(|e| LexiconError::Lookup {
            word: word.to_string(),
            reason: format!("invalid response body: {e}"),
        })?;
        Ok(dedup_lemmas(lemmas))
    }
}
