#![forbid(unsafe_code)]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use ahp_topsis::adapters::{renderer_for, FileProblemSource};
use ahp_topsis::application::{
    ComputeWeightsCommand, ComputeWeightsHandler, RankScenariosCommand, RankScenariosHandler,
};
use ahp_topsis::config::{AppConfig, LoggingConfig, OutputFormat};

#[derive(Parser)]
#[command(
    name = "ahp-topsis",
    version,
    about = "AHP criterion weighting and TOPSIS scenario ranking"
)]
struct Cli {
    /// Configuration file (YAML, JSON or TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Report format, overrides configuration
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Decimal places in Markdown reports, overrides configuration
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive criterion weights from pairwise judgments
    Weights(ProblemArgs),
    /// Derive weights, then rank scenarios by closeness to the ideal
    Rank(ProblemArgs),
}

#[derive(Args)]
struct ProblemArgs {
    /// Problem file (.json, .yaml or .yml)
    problem: PathBuf,

    /// Treat unjudged criterion pairs as equally important
    #[arg(long)]
    fill_indifferent: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(precision) = cli.precision {
        config.output.precision = precision;
    }
    config.validate()?;

    init_tracing(&config.logging);

    let report = match cli.command {
        Commands::Weights(args) => {
            let source = Arc::new(FileProblemSource::new(args.problem));
            ComputeWeightsHandler::new(source).handle(ComputeWeightsCommand {
                fill_missing_with_indifference: args.fill_indifferent,
            })?
        }
        Commands::Rank(args) => {
            let source = Arc::new(FileProblemSource::new(args.problem));
            RankScenariosHandler::new(source).handle(RankScenariosCommand {
                fill_missing_with_indifference: args.fill_indifferent,
            })?
        }
    };

    let rendered = renderer_for(&config.output).render(&report)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(std::io::stderr)
        .with_target(true);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
