//! Chunked ontology ingest.
//!
//! Abstracts "bytes in" for the parser: a location descriptor (URL or
//! local path) becomes a lazy `AsyncBufRead` chunk sequence. Sources not
//! already in OWL/XML are routed through an external conversion endpoint
//! that takes the original location as a parameter and returns the
//! document re-serialized as OWL/XML.
//!
//! The sequence is restartable only from scratch: call [`fetch`] again.
//! All HTTP work is timeout-bounded through [`IngestConfig`] so an
//! unresponsive converter cannot hang the pipeline.

pub mod error;

use std::time::Duration;

use futures::TryStreamExt;
use reqwest::Client;
use tokio::io::{AsyncBufRead, BufReader};
use tokio_util::io::StreamReader;
use tracing::debug;

pub use error::{IngestError, Result};

/// Default format-conversion endpoint.
pub const DEFAULT_CONVERTER_ENDPOINT: &str = "http://owl.cs.manchester.ac.uk/converter/convert";

/// Default read chunk size for local files.
pub const DEFAULT_CHUNK_SIZE: usize = 10 * 1024;

/// The serialization the parser understands; requested from the converter.
const TARGET_FORMAT: &str = "OWL/XML";

/// A lazy, chunked byte source handed to the parser.
pub type OntologyReader = Box<dyn AsyncBufRead + Send + Unpin>;

/// Ingest configuration: converter endpoint, chunking, and HTTP timeouts.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Conversion endpoint used when the source is not already OWL/XML
    pub converter_endpoint: String,
    /// Buffer capacity for local-file reads
    pub chunk_size: usize,
    /// TCP connect timeout for remote fetches
    pub connect_timeout: Duration,
    /// Whole-request timeout for remote fetches
    pub request_timeout: Duration,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            converter_endpoint: DEFAULT_CONVERTER_ENDPOINT.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(60),
        }
    }
}

impl IngestConfig {
    /// Create a configuration with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the conversion endpoint.
    pub fn with_converter_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.converter_endpoint = endpoint.into();
        self
    }

    /// Set the local-file read chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the TCP connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the whole-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Open a chunked byte source for the given location.
///
/// An `http(s)` location is fetched over the network — directly when
/// `already_converted`, otherwise through the conversion endpoint with
/// `{ontology: location, format: "OWL/XML"}`. Anything else is treated as
/// a local file path. On any failure the parser gets no reader at all.
pub async fn fetch(
    location: &str,
    already_converted: bool,
    config: &IngestConfig,
) -> Result<OntologyReader> {
    if location.starts_with("http://") || location.starts_with("https://") {
        fetch_http(location, already_converted, config).await
    } else {
        fetch_file(location, config).await
    }
}

async fn fetch_file(path: &str, config: &IngestConfig) -> Result<OntologyReader> {
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|source| IngestError::File {
            path: path.to_string(),
            source,
        })?;
    Ok(Box::new(BufReader::with_capacity(config.chunk_size, file)))
}

async fn fetch_http(
    location: &str,
    already_converted: bool,
    config: &IngestConfig,
) -> Result<OntologyReader> {
    let client = Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()
        .map_err(IngestError::Client)?;

    let (url, request) = if already_converted {
        (location.to_string(), client.get(location))
    } else {
        debug!(ontology = location, "routing fetch through format converter");
        (
            config.converter_endpoint.clone(),
            client
                .get(&config.converter_endpoint)
                .query(&[("ontology", location), ("format", TARGET_FORMAT)]),
        )
    };

    let response = request.send().await.map_err(|source| IngestError::Request {
        url: url.clone(),
        source,
    })?;

    let status = response.status();
    if !status.is_success() {
        let reason = response.text().await.unwrap_or_default();
        return Err(IngestError::Http {
            url,
            status: status.as_u16(),
            reason,
        });
    }

    let stream = response.bytes_stream().map_err(std::io::Error::other);
    Ok(Box::new(StreamReader::new(stream)))
}
