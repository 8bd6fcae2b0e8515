//! Request-level options for a parse-and-score run.

use std::collections::BTreeSet;

use ontoqual_metrics::SemioticLayer;

use crate::error::{ApiError, Result};

/// Options for one scoring run.
///
/// All four layers are selected by default; exclusions subtract from that
/// set, mirroring the request surface's `exclude_semiotic_layer`
/// parameter.
#[derive(Debug, Clone, Default)]
pub struct ScoreOptions {
    /// Free-text, comma-separated domain keywords for the relevance score
    pub domain: Option<String>,
    /// Layers excluded from the overall average
    pub exclude_layers: Vec<SemioticLayer>,
    /// The source is already OWL/XML; skip the conversion service
    pub already_converted: bool,
    /// Additionally render human-readable tree/label dumps
    pub debug: bool,
}

impl ScoreOptions {
    /// Options with the default layer selection and no domain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the domain keywords.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Exclude a layer from the overall average.
    pub fn exclude_layer(mut self, layer: SemioticLayer) -> Self {
        self.exclude_layers.push(layer);
        self
    }

    /// Enable debug dumps.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Mark the source as already OWL/XML.
    pub fn with_already_converted(mut self, already_converted: bool) -> Self {
        self.already_converted = already_converted;
        self
    }

    /// The effective layer selection: all four minus the exclusions.
    pub fn layer_selection(&self) -> BTreeSet<SemioticLayer> {
        let mut layers: BTreeSet<SemioticLayer> = SemioticLayer::ALL.into_iter().collect();
        for layer in &self.exclude_layers {
            layers.remove(layer);
        }
        layers
    }
}

/// Validate request-supplied layer names, before the pipeline is invoked.
///
/// A name outside the known four is [`ApiError::Configuration`].
pub fn parse_layers(names: &[String]) -> Result<Vec<SemioticLayer>> {
    names
        .iter()
        .map(|name| {
            name.parse::<SemioticLayer>()
                .map_err(|e| ApiError::Configuration(e.to_string()))
        })
        .collect()
}
