//! Error types for ontology ingest

/// Error type for ingest operations. Any of these is fatal to the run:
/// the parser never receives a byte source after a failed fetch.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The remote returned a non-success status; `reason` carries the
    /// response body text
    #[error("fetch of {url} returned HTTP {status}: {reason}")]
    Http {
        url: String,
        status: u16,
        reason: String,
    },

    /// The request could not be completed (unreachable host, timeout, TLS)
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The local file could not be opened
    #[error("cannot open ontology file {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP client itself could not be built
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Result type for ingest operations
pub type Result<T> = std::result::Result<T, IngestError>;
