//! The parse-and-score pipeline.
//!
//! One invocation is a self-contained sequence — ingest → parse → depth
//! pass → metrics — holding no state across runs, so concurrent
//! invocations need no coordination.

use ontoqual_ingest::IngestConfig;
use ontoqual_metrics::{compute_report, Lexicon, QualityReport};
use ontoqual_owl_xml::resolve_hierarchy;
use tracing::debug;

use crate::dump;
use crate::error::Result;
use crate::options::ScoreOptions;

/// Diagnostic dumps rendered when the debug flag is set.
#[derive(Debug, Clone)]
pub struct DebugDumps {
    pub tree: String,
    pub labeled: String,
    pub unlabeled: String,
}

/// The product of one run: the report, plus dumps when requested.
#[derive(Debug, Clone)]
pub struct ScoreOutcome {
    pub report: QualityReport,
    pub dumps: Option<DebugDumps>,
}

/// Ingest, parse, and score one ontology.
///
/// Fails atomically: any ingest, parse, hierarchy, or lexicon error aborts
/// the run with no partial report.
pub async fn score_ontology(
    location: &str,
    options: &ScoreOptions,
    ingest: &IngestConfig,
    lexicon: &dyn Lexicon,
) -> Result<ScoreOutcome> {
    let reader = ontoqual_ingest::fetch(location, options.already_converted, ingest).await?;

    let mut model = ontoqual_owl_xml::parse(reader).await?;
    let hierarchy = resolve_hierarchy(&mut model)?;
    debug!(
        classes = model.classes.len(),
        roots = hierarchy.root_count,
        leaves = hierarchy.leaf_count,
        "ontology parsed and resolved"
    );

    let report = compute_report(
        &model,
        &hierarchy,
        options.domain.as_deref(),
        &options.layer_selection(),
        lexicon,
    )
    .await?;

    let dumps = options.debug.then(|| DebugDumps {
        tree: dump::render_tree(&model),
        labeled: dump::render_labeled(&model),
        unlabeled: dump::render_unlabeled(&model),
    });

    Ok(ScoreOutcome { report, dumps })
}
