//! Unified error type for the parse-and-score pipeline

use ontoqual_ingest::IngestError;
use ontoqual_metrics::LexiconError;
use ontoqual_owl_xml::ParseError;

/// Error type for pipeline operations. Every variant aborts the run;
/// there is no partial-report mode.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The ontology bytes could not be obtained
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// The document was malformed or its hierarchy cyclic
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A lexical-enrichment lookup failed
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    /// An invalid request parameter, rejected before the pipeline runs
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, ApiError>;
