//! Primate Journeys - command line entry point
//!
//! Reads the cached entity dataset, generates journeys and prints them as
//! JSON on stdout. Logs go to stderr.

use std::borrow::Cow;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use primate_journeys::business::monkey_business;
use primate_journeys::core::config::{self, GeneratorConfig};
use primate_journeys::core::error::Result;
use primate_journeys::{
    EntityDirectory, JourneyError, JourneyService, SpeciesCatalog, StaticDirectory,
};

/// Generate journeys for the primates in a cached dataset
#[derive(Parser, Debug)]
#[command(name = "primate-journeys")]
#[command(about = "Generate movement-and-behavior journeys for named primates")]
struct Args {
    /// Entity dataset (JSON array of records)
    #[arg(long, default_value = "data/monkeys.json")]
    directory: PathBuf,

    /// Generator config overrides (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Species catalog replacing the built-in one (TOML)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Random seed for deterministic output
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every entity in the dataset
    List,
    /// Show one entity's record
    Show { name: String },
    /// Generate a journey for one entity
    Journey { name: String },
    /// Generate journeys for the named entities, or all when none are given
    Journeys { names: Vec<String> },
    /// Print some monkey business
    Business,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("primate_journeys=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Command::Business = args.command {
        let mut rng = match args.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        println!("{}", monkey_business(&mut rng));
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(path) = &args.config {
        let loaded = GeneratorConfig::load(path)?;
        if config::set_config(loaded).is_err() {
            tracing::warn!("generator config already set; ignoring {}", path.display());
        }
    }

    let directory = StaticDirectory::load(&args.directory)?;
    let mut service = match &args.catalog {
        Some(path) => JourneyService::with_parts(
            directory,
            Cow::Owned(SpeciesCatalog::load(path)?),
            config::config().clone(),
        )?,
        None => JourneyService::new(directory)?,
    };
    if let Some(seed) = args.seed {
        service = service.with_seed(seed);
    }

    match &args.command {
        Command::List => emit(service.directory().entities(), args.pretty)?,
        Command::Show { name } => match service.directory().find(name) {
            Some(entity) => emit(entity, args.pretty)?,
            None => return not_found(name, args.pretty),
        },
        Command::Journey { name } => match service.journey_for(name) {
            Ok(journey) => {
                tracing::info!("{}", journey.summary());
                emit(&journey, args.pretty)?;
            }
            Err(JourneyError::EntityNotFound(name)) => return not_found(&name, args.pretty),
            Err(e) => return Err(e),
        },
        Command::Journeys { names } if names.is_empty() => {
            let journeys = service.all_journeys()?;
            for journey in &journeys {
                tracing::info!("{}", journey.summary());
            }
            emit(&journeys, args.pretty)?;
        }
        Command::Journeys { names } => emit(&service.journeys_for(names.as_slice()), args.pretty)?,
        Command::Business => {}
    }

    Ok(ExitCode::SUCCESS)
}

fn emit<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}

fn not_found(name: &str, pretty: bool) -> Result<ExitCode> {
    emit(
        &ErrorBody {
            error: format!("Monkey '{}' not found", name),
        },
        pretty,
    )?;
    Ok(ExitCode::FAILURE)
}
