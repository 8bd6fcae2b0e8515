//! Parse-and-score pipeline for OWL/XML ontologies.
//!
//! This crate wires the ontoqual components together: the chunked ingest
//! source, the streaming parser, the hierarchy depth pass, and the
//! semiotic metrics engine, producing a [`QualityReport`]. It also carries
//! the request-facing pieces: [`ScoreOptions`] with layer-selection
//! validation, the [`RemoteLexicon`] client for the synonym service, and
//! the debug dump rendering.
//!
//! # Example
//!
//! ```no_run
//! use ontoqual_api::{score_ontology, ScoreOptions};
//! use ontoqual_ingest::IngestConfig;
//! use ontoqual_metrics::StaticLexicon;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), ontoqual_api::ApiError> {
//! let options = ScoreOptions::new()
//!     .with_domain("food, cooking")
//!     .with_already_converted(true);
//! let lexicon = StaticLexicon::new();
//! let outcome = score_ontology(
//!     "pizza.owl.xml",
//!     &options,
//!     &IngestConfig::new(),
//!     &lexicon,
//! )
//! .await?;
//! println!("{:?}", outcome.report.semiotic_ontology_metrics.overall);
//! # Ok(())
//! # }
//! ```

pub mod dump;
pub mod error;
pub mod lexicon;
pub mod options;
pub mod pipeline;

pub use error::{ApiError, Result};
pub use lexicon::{LexiconConfig, RemoteLexicon};
pub use options::{parse_layers, ScoreOptions};
pub use pipeline::{score_ontology, DebugDumps, ScoreOutcome};

pub use ontoqual_metrics::QualityReport;
