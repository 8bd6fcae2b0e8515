//! Command-line argument definitions.

use clap::Parser;

/// Semiotic quality scoring for OWL/XML ontologies.
///
/// Parses the ontology at LOCATION (a URL or a local file path) and prints
/// a JSON quality report on stdout.
#[derive(Debug, Parser)]
#[command(name = "ontoqual", version)]
pub struct Cli {
    /// Ontology location: a URL or a local file path
    pub location: String,

    /// Comma-separated domain keywords for the relevance score
    #[arg(long, value_name = "TEXT")]
    pub domain: Option<String>,

    /// Semiotic layer to exclude from the overall score; repeatable.
    /// One of: syntactic, semantic, pragmatic, social
    #[arg(long = "exclude-layer", value_name = "LAYER")]
    pub exclude_layers: Vec<String>,

    /// The source is already OWL/XML; skip the conversion service
    #[arg(long)]
    pub already_converted: bool,

    /// Print hierarchy and label dumps to stderr
    #[arg(long)]
    pub debug: bool,

    /// Synonym service endpoint for lexical enrichment; without it,
    /// lexical scores degrade to 0
    #[arg(long, value_name = "URL")]
    pub lexicon_endpoint: Option<String>,

    /// Ontology format conversion endpoint
    #[arg(long, value_name = "URL")]
    pub converter_endpoint: Option<String>,

    /// Show pipeline diagnostics on stderr
    #[arg(long, short, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all logs
    #[arg(long, short)]
    pub quiet: bool,

    /// Disable colored error output
    #[arg(long)]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_invocation() {
        let cli = Cli::try_parse_from(["ontoqual", "pizza.owl"]).unwrap();
        assert_eq!(cli.location, "pizza.owl");
        assert!(!cli.already_converted);
        assert!(cli.exclude_layers.is_empty());
    }

    #[test]
    fn test_exclude_layer_is_repeatable() {
        let cli = Cli::try_parse_from([
            "ontoqual",
            "pizza.owl",
            "--exclude-layer",
            "social",
            "--exclude-layer",
            "semantic",
        ])
        .unwrap();
        assert_eq!(cli.exclude_layers, ["social", "semantic"]);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["ontoqual", "pizza.owl", "-v", "-q"]).is_err());
    }
}
