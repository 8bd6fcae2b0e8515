//! Semiotic quality metrics for parsed ontologies.
//!
//! Takes the resolved model and hierarchy aggregates from
//! `ontoqual-owl-xml`, enriches class labels through the injected
//! [`Lexicon`] boundary, and produces a [`QualityReport`]: four layer
//! scores (syntactic, semantic, pragmatic, social) and their combined
//! overall, plus the raw counts the scores were derived from.

pub mod layer;
pub mod lexicon;
pub mod report;
pub mod semiotic;

pub use layer::{SemioticLayer, UnknownLayerError};
pub use lexicon::{dedup_lemmas, Lexicon, LexiconError, StaticLexicon};
pub use report::{
    round3, PragmaticScores, QualityReport, ReportCounts, SemanticScores, SemioticMetrics,
    SocialScores, SyntacticScores,
};
pub use semiotic::compute_report;
