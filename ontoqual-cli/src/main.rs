mod cli;
mod error;

use clap::Parser;
use cli::Cli;
use error::{exit_with_error, CliResult};
use ontoqual_api::{parse_layers, score_ontology, LexiconConfig, RemoteLexicon, ScoreOptions};
use ontoqual_ingest::IngestConfig;
use ontoqual_metrics::{Lexicon, StaticLexicon};

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet   → always "off"
    //   --verbose → "debug" for the ontoqual crates
    //   default   → honour RUST_LOG, otherwise "off" so the JSON report
    //               stays the only stdout/stderr output
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into())
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "off".into())
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli).await {
        exit_with_error(e);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // layer names are validated before anything is fetched
    let exclude_layers = parse_layers(&cli.exclude_layers)?;

    let mut options = ScoreOptions::new()
        .with_already_converted(cli.already_converted)
        .with_debug(cli.debug);
    options.exclude_layers = exclude_layers;
    if let Some(domain) = &cli.domain {
        options = options.with_domain(domain.clone());
    }

    let mut ingest = IngestConfig::new();
    if let Some(endpoint) = &cli.converter_endpoint {
        ingest = ingest.with_converter_endpoint(endpoint.clone());
    }

    let lexicon: Box<dyn Lexicon> = match &cli.lexicon_endpoint {
        Some(endpoint) => Box::new(
            RemoteLexicon::from_config(&LexiconConfig::new(endpoint.clone()))
                .map_err(ontoqual_api::ApiError::Lexicon)?,
        ),
        None => Box::new(StaticLexicon::new()),
    };

    let outcome = score_ontology(&cli.location, &options, &ingest, lexicon.as_ref()).await?;

    if let Some(dumps) = &outcome.dumps {
        eprint!("{}", dumps.tree);
        eprint!("{}", dumps.labeled);
        eprint!("{}", dumps.unlabeled);
    }

    let json = serde_json::to_string_pretty(&outcome.report)
        .map_err(|e| error::CliError::Output(e.to_string()))?;
    println!("{json}");
    Ok(())
}
