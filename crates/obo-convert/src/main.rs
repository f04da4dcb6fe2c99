//! `obo2tsv`: parse an .obo file and write out a .tsv table.

use std::path::PathBuf;

use clap::Parser;
use obo_convert::{convert_obo_to_tsv, ConvertOptions};
use obo_loader::TsvConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "obo2tsv")]
#[command(about = "Parse an .obo file and write out a .tsv table", long_about = None)]
struct Cli {
    /// .obo file url or local file path. For example: http://purl.obolibrary.org/obo/hp.obo
    input_path: String,

    /// Output .tsv file path. Defaults to standard out.
    #[arg(short, long)]
    output_path: Option<PathBuf>,

    /// If specified, ignore ontology terms that are not either descendants of the given id or
    /// have this id themselves. For example: 'HP:0000118'.
    #[arg(short, long)]
    root_id: Option<String>,

    /// Return all records instead of computing root-id [default], ignored if --root-id specified.
    #[arg(short = 'a', long = "return-all", visible_alias = "return_all")]
    return_all: bool,

    /// Separator for multiple values in a single column.
    #[arg(long, default_value = obo_loader::DEFAULT_SEPARATOR)]
    separator: String,

    /// Print stats and other info
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so the table can be piped from stdout
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .init();

    let options = ConvertOptions {
        output_path: cli.output_path,
        root_id: cli.root_id,
        return_all: cli.return_all,
        verbose: cli.verbose,
        tsv: TsvConfig::with_separator(cli.separator),
    };

    let summary = convert_obo_to_tsv(&cli.input_path, &options)?;
    tracing::debug!("Converted {} records", summary.records);

    Ok(())
}
