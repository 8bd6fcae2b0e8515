//! The four semiotic quality layers.

use std::fmt;
use std::str::FromStr;

/// A semiotic quality dimension. The overall score averages the layer
/// scores of whichever layers the request selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SemioticLayer {
    /// Structural well-formedness and richness
    Syntactic,
    /// Meaning-grounding via lexical resources
    Semantic,
    /// Usability and coverage
    Pragmatic,
    /// Provenance and trust (unimplemented; always scores 0)
    Social,
}

impl SemioticLayer {
    /// All four layers, the default selection.
    pub const ALL: [SemioticLayer; 4] = [
        SemioticLayer::Syntactic,
        SemioticLayer::Semantic,
        SemioticLayer::Pragmatic,
        SemioticLayer::Social,
    ];

    /// The lowercase layer name used in requests and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            SemioticLayer::Syntactic => "syntactic",
            SemioticLayer::Semantic => "semantic",
            SemioticLayer::Pragmatic => "pragmatic",
            SemioticLayer::Social => "social",
        }
    }
}

impl fmt::Display for SemioticLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A layer name outside the known four.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown semiotic layer {0:?}; expected one of syntactic, semantic, pragmatic, social")]
pub struct UnknownLayerError(pub String);

impl FromStr for SemioticLayer {
    type Err = UnknownLayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "syntactic" => Ok(SemioticLayer::Syntactic),
            "semantic" => Ok(SemioticLayer::Semantic),
            "pragmatic" => Ok(SemioticLayer::Pragmatic),
            "social" => Ok(SemioticLayer::Social),
            _ => Err(UnknownLayerError(s.to_string())),
        }
    }
}
