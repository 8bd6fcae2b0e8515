//! The semiotic quality metrics engine.
//!
//! Turns a resolved ontology model plus hierarchy aggregates into the four
//! layer scores and the combined overall score. Pure computation except
//! for the lexicon lookups (one per class label, one per domain keyword).
//! Every ratio with a zero denominator evaluates to 0, so a degenerate
//! ontology still produces a complete report.

use std::collections::{BTreeSet, HashSet};

use ontoqual_owl_xml::{HierarchySummary, OntologyModel};
use tracing::debug;

use crate::layer::SemioticLayer;
use crate::lexicon::{Lexicon, LexiconError};
use crate::report::{
    round3, PragmaticScores, QualityReport, ReportCounts, SemanticScores, SemioticMetrics,
    SocialScores, SyntacticScores,
};

/// Compute the full quality report for a resolved model.
///
/// `domain` is the free-text keyword list for the relevance score; `None`
/// or blank means relevance is neither computed nor consulted. `layers`
/// selects which layer scores enter the overall average.
pub async fn compute_report(
    model: &OntologyModel,
    hierarchy: &HierarchySummary,
    domain: Option<&str>,
    layers: &BTreeSet<SemioticLayer>,
    lexicon: &dyn Lexicon,
) -> Result<QualityReport, LexiconError> {
    let class_count = model.classes.len();
    let subclass_count = class_count.saturating_sub(hierarchy.root_count);
    let attribute_count = model.attribute_count();
    let annotation_count = model.annotation_properties.len();

    let lexical = collect_lexical_stats(model, lexicon).await?;

    // a blank domain string means no domain at all
    let domain = domain.map(str::trim).filter(|d| !d.is_empty());
    let domain_match_count = match domain {
        Some(domain) => count_domain_matches(model, domain, lexicon).await?,
        None => 0,
    };

    let syntactic = syntactic_scores(class_count, subclass_count, attribute_count);
    let semantic = semantic_scores(class_count, &lexical);
    let relevance = domain.map(|_| {
        ratio(
            domain_match_count as f64,
            (class_count + attribute_count + annotation_count) as f64,
        )
    });
    let pragmatic = pragmatic_scores(
        hierarchy,
        class_count,
        attribute_count,
        annotation_count,
        model.comments.len(),
        lexical.unique_lemmas.len(),
        relevance,
    );
    let social = SocialScores {
        overall: 0.0,
        authority: None,
        history: None,
        recognition: None,
    };

    let mut selected = Vec::new();
    for layer in layers {
        selected.push(match layer {
            SemioticLayer::Syntactic => syntactic.overall,
            SemioticLayer::Semantic => semantic.overall,
            SemioticLayer::Pragmatic => pragmatic.overall,
            SemioticLayer::Social => social.overall,
        });
    }
    let overall = round3(mean(&selected));
    debug!(overall, layers = selected.len(), "metrics computed");

    Ok(QualityReport {
        counts: ReportCounts {
            class_count,
            root_count: hierarchy.root_count,
            leaf_count: hierarchy.leaf_count,
            deepest_leaf_depth: hierarchy.deepest_leaf_depth,
            avg_leaf_depth: hierarchy.avg_leaf_depth,
            object_property_count: model.object_properties.len(),
            data_property_count: model.data_properties.len(),
            annotation_property_count: annotation_count,
            comment_count: model.comments.len(),
            synonym_definitions: lexical.definitions,
            defined_class_count: lexical.defined,
            unique_synonym_lemmas: lexical.unique_lemmas.len(),
            domain_match_count,
        },
        semiotic_ontology_metrics: SemioticMetrics {
            overall,
            syntactic,
            semantic,
            pragmatic,
            social,
        },
    })
}

/// Per-label synonym statistics gathered across all class labels.
struct LexicalStats {
    /// Total synonym-set size summed over labels
    definitions: usize,
    /// Classes with at least one synonym
    defined: usize,
    /// De-duplicated synonym vocabulary
    unique_lemmas: BTreeSet<String>,
}

async fn collect_lexical_stats(
    model: &OntologyModel,
    lexicon: &dyn Lexicon,
) -> Result<LexicalStats, LexiconError> {
    let mut stats = LexicalStats {
        definitions: 0,
        defined: 0,
        unique_lemmas: BTreeSet::new(),
    };
    for node in model.classes.values() {
        // unlabeled classes have no word to look up
        let Some(label) = node.label.as_deref() else {
            continue;
        };
        let lemmas = lexicon.synonyms(label).await?;
        if !lemmas.is_empty() {
            stats.defined += 1;
        }
        stats.definitions += lemmas.len();
        stats.unique_lemmas.extend(lemmas);
    }
    Ok(stats)
}

/// Count case-insensitive substring occurrences of the expanded domain
/// keywords against every node display form and every comment.
///
/// Each comma-separated keyword expands into itself plus its lemmas.
/// Matches are summed without deduplication: a node hit by several terms
/// counts several times.
async fn count_domain_matches(
    model: &OntologyModel,
    domain: &str,
    lexicon: &dyn Lexicon,
) -> Result<usize, LexiconError> {
    let mut haystacks: Vec<String> = Vec::new();
    haystacks.extend(model.classes.values().map(|n| n.display_name().to_lowercase()));
    haystacks.extend(
        model
            .object_properties
            .values()
            .map(|n| n.display_name().to_lowercase()),
    );
    haystacks.extend(
        model
            .data_properties
            .values()
            .map(|n| n.display_name().to_lowercase()),
    );
    haystacks.extend(
        model
            .annotation_properties
            .values()
            .map(|n| n.display_name().to_lowercase()),
    );
    haystacks.extend(model.comments.iter().map(|c| c.to_lowercase()));

    let mut matches = 0usize;
    for keyword in domain.split(',') {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            continue;
        }
        let mut terms: Vec<String> = vec![keyword.to_lowercase()];
        let mut seen: HashSet<String> = terms.iter().cloned().collect();
        for lemma in lexicon.synonyms(keyword).await? {
            let lemma = lemma.to_lowercase();
            if seen.insert(lemma.clone()) {
                terms.push(lemma);
            }
        }
        for term in &terms {
            matches += haystacks.iter().filter(|hay| hay.contains(term)).count();
        }
    }
    Ok(matches)
}

fn syntactic_scores(class_count: usize, subclass_count: usize, attribute_count: usize) -> SyntacticScores {
    let c = class_count as f64;
    let s = subclass_count as f64;
    let a = attribute_count as f64;

    let lawfulness = 1.0;
    let structure = ratio(s, c);
    let relationship_richness = ratio(a, a + s);
    let attribute_richness = ratio(a, c);
    let overall_richness = mean(&[relationship_richness, attribute_richness]);
    let overall = mean(&[overall_richness, structure, lawfulness]).min(1.0);

    SyntacticScores {
        overall: round3(overall),
        lawfulness,
        structure: round3(structure),
        relationship_richness: round3(relationship_richness),
        attribute_richness: round3(attribute_richness),
        overall_richness: round3(overall_richness),
    }
}

fn semantic_scores(class_count: usize, lexical: &LexicalStats) -> SemanticScores {
    let c = class_count as f64;
    let defined = lexical.defined as f64;
    let definitions = lexical.definitions as f64;

    let consistency = 1.0;
    let interpretability = ratio(defined, c);
    let precision = ratio(defined, definitions);
    let clarity = ratio(definitions, c);
    let overall = mean(&[consistency, interpretability, precision]).min(1.0);

    SemanticScores {
        overall: round3(overall),
        consistency,
        interpretability: round3(interpretability),
        precision: round3(precision),
        clarity: round3(clarity),
    }
}

fn pragmatic_scores(
    hierarchy: &HierarchySummary,
    class_count: usize,
    attribute_count: usize,
    annotation_count: usize,
    comment_count: usize,
    unique_lemma_count: usize,
    relevance: Option<f64>,
) -> PragmaticScores {
    let c = class_count as f64;
    let model_size = (class_count + attribute_count + annotation_count) as f64;

    let cohesion1 = ratio(
        hierarchy.avg_leaf_depth,
        f64::from(hierarchy.deepest_leaf_depth),
    );
    let cohesion2 = ratio(hierarchy.leaf_count as f64, c);
    let adaptability = mean(&[cohesion1, cohesion2]);
    let comprehensiveness = ratio(
        unique_lemma_count as f64,
        (class_count + attribute_count) as f64,
    );
    let ease_of_use = ratio(comment_count as f64, model_size).min(1.0);

    let overall = match relevance {
        Some(relevance) => mean(&[adaptability, relevance, ease_of_use]),
        None => mean(&[adaptability, ease_of_use]),
    };

    PragmaticScores {
        overall: round3(overall),
        accuracy: None,
        adaptability: round3(adaptability),
        comprehensiveness: round3(comprehensiveness),
        ease_of_use: round3(ease_of_use),
        relevance: relevance.map(round3),
    }
}

/// `num / den`, defined as 0 when the denominator is not positive.
fn ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 {
        num / den
    } else {
        0.0
    }
}

/// Arithmetic mean; 0 for an empty slice.
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
