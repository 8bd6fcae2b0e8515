//! The quality report structure consumed by the presentation layer.
//!
//! Two top-level groups: raw `counts` and the layered
//! `semiotic_ontology_metrics`. Sub-scores that are not computed in a
//! configuration (`accuracy`, the social sub-scores, `relevance` with no
//! domain) are `Option<f64>` and serialize to explicit JSON `null`, never
//! omitted. Scores are rounded to three decimals before they land here.

use serde::Serialize;

/// Round a score to three decimal places, as all emitted scores are.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Node, property, annotation, comment, and synonym tallies.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportCounts {
    /// Declared plus synthesized classes
    pub class_count: usize,
    /// Classes with no parents
    pub root_count: usize,
    /// Classes with no children
    pub leaf_count: usize,
    /// Longest leaf-to-root path length
    pub deepest_leaf_depth: u32,
    /// Mean leaf depth
    pub avg_leaf_depth: f64,
    pub object_property_count: usize,
    pub data_property_count: usize,
    pub annotation_property_count: usize,
    /// `rdfs:comment` assertions collected from the document
    pub comment_count: usize,
    /// Total synonym-set size summed over class labels
    pub synonym_definitions: usize,
    /// Classes whose label has at least one synonym
    pub defined_class_count: usize,
    /// Size of the de-duplicated synonym vocabulary across class labels
    pub unique_synonym_lemmas: usize,
    /// Substring hits of expanded domain keywords across the model
    pub domain_match_count: usize,
}

/// Syntactic layer: structural well-formedness and richness.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SyntacticScores {
    pub overall: f64,
    /// Constant 1.0: the document parsed without structural violation
    pub lawfulness: f64,
    /// Subclass-to-class ratio
    pub structure: f64,
    /// Fraction of relationships that are non-inheritance
    pub relationship_richness: f64,
    /// Attributes per class
    pub attribute_richness: f64,
    /// Mean of the two richness scores
    pub overall_richness: f64,
}

/// Semantic layer: meaning-grounding via the lexicon.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SemanticScores {
    pub overall: f64,
    /// Constant 1.0 placeholder; no consistency checker is implemented
    pub consistency: f64,
    /// Share of classes the lexicon knows
    pub interpretability: f64,
    /// Defined classes per definition; 1:1 is best
    pub precision: f64,
    /// Definitions per class — diagnostic only, not folded into `overall`
    pub clarity: f64,
}

/// Pragmatic layer: usability and coverage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PragmaticScores {
    pub overall: f64,
    /// Not computed in any configuration; always null
    pub accuracy: Option<f64>,
    /// Mean of the two cohesion ratios
    pub adaptability: f64,
    /// Unique synonym vocabulary normalized by model size
    pub comprehensiveness: f64,
    /// Comment coverage of the model
    pub ease_of_use: f64,
    /// Domain-keyword coverage; null when no domain was supplied
    pub relevance: Option<f64>,
}

/// Social layer: provenance and trust. Unimplemented; the overall is 0
/// and the sub-scores are always null.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SocialScores {
    pub overall: f64,
    pub authority: Option<f64>,
    pub history: Option<f64>,
    pub recognition: Option<f64>,
}

/// The four layer blocks plus the combined overall score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SemioticMetrics {
    /// Mean of the selected layers' overall scores; 0 for an empty selection
    pub overall: f64,
    pub syntactic: SyntacticScores,
    pub semantic: SemanticScores,
    pub pragmatic: PragmaticScores,
    pub social: SocialScores,
}

/// The assembled report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QualityReport {
    pub counts: ReportCounts,
    pub semiotic_ontology_metrics: SemioticMetrics,
}
