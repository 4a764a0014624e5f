//! # Configurator CLI
//!
//! Runs the configurator engine from the terminal: list presets, show the
//! restriction table for a product, or estimate a configuration loaded from
//! a preset or a JSON file.
//!
//! ```text
//! configurator presets --product carport
//! configurator estimate --preset "Veranda Luxe" --country DE --region Bayern
//! configurator estimate --config shed.json --format json --snapshot quote.json
//! configurator restrictions atelier
//! ```
//!
//! Logging goes to stderr (`RUST_LOG` or `--verbose`), results to stdout.
//! `estimate` exits with status 2 when the configuration has blocking errors.

mod report;
mod settings;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use configurator_core::config::{preset_by_name, presets, presets_for, restrictions_by_code};
use configurator_core::{
    estimate, Configuration, EngineError, Estimate, EstimateSnapshot, PricingContext, ProductType,
};
use tracing_subscriber::EnvFilter;

use settings::{OutputFormat, Settings};

/// Exit status for an estimate with blocking validation errors
const EXIT_INVALID: u8 = 2;

/// Shed, carport and veranda configurator
#[derive(Parser, Debug)]
#[command(name = "configurator", version)]
#[command(about = "Estimate sheds, carports and verandas: geometry, checks, materials and price")]
struct Cli {
    /// Settings file (default: ./configurator.toml when present)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in presets
    Presets {
        /// Only presets for this product (shed, carport, veranda)
        #[arg(long)]
        product: Option<String>,
    },
    /// Estimate a configuration
    Estimate(EstimateArgs),
    /// Show the dimension restrictions for a product or shed type
    Restrictions {
        /// carport, veranda, berging, tuinhuis, schuur or atelier
        code: String,
    },
}

#[derive(Args, Debug)]
struct EstimateArgs {
    /// Name of a built-in preset
    #[arg(long, conflicts_with = "config", required_unless_present = "config")]
    preset: Option<String>,

    /// Configuration JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Market: NL, DE or BE
    #[arg(long)]
    country: Option<String>,

    /// Region for the regional price multiplier
    #[arg(long)]
    region: Option<String>,

    /// Price without installation / labor
    #[arg(long)]
    no_installation: bool,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Also write a timestamped snapshot of the estimate to this file
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("configurator=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("configurator=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Presets { product } => list_presets(product.as_deref()),
        Command::Restrictions { code } => show_restrictions(&code),
        Command::Estimate(args) => {
            let settings = Settings::load(cli.settings.as_deref())?;
            run_estimate(&args, &settings)
        }
    }
}

fn list_presets(product: Option<&str>) -> Result<ExitCode> {
    let selected: Vec<_> = match product {
        Some(code) => presets_for(code.parse::<ProductType>()?),
        None => presets().iter().collect(),
    };

    for preset in selected {
        println!("{:<22} {:<8} {}", preset.name, preset.product_type().code(), preset.description);
    }
    Ok(ExitCode::SUCCESS)
}

fn show_restrictions(code: &str) -> Result<ExitCode> {
    let table = restrictions_by_code(code).ok_or_else(|| EngineError::unknown_product(code))?;
    println!("{}", serde_json::to_string_pretty(table)?);
    Ok(ExitCode::SUCCESS)
}

/// Preset by name, or a configuration JSON file. Returns a title for the report.
fn load_configuration(args: &EstimateArgs) -> Result<(String, Configuration)> {
    if let Some(name) = &args.preset {
        let preset = preset_by_name(name).ok_or_else(|| EngineError::preset_not_found(name))?;
        return Ok((preset.name, preset.config));
    }

    let path = args
        .config
        .as_deref()
        .context("Either --preset or --config is required")?;
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration {}", path.display()))?;
    let config = Configuration::from_json(&json)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    Ok((file_title(path), config))
}

fn file_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Configuratie".to_string())
}

fn pricing_context(args: &EstimateArgs, settings: &Settings) -> Result<PricingContext> {
    let mut context = PricingContext::new(settings.country(args.country.as_deref())?);
    if let Some(region) = args.region.as_ref().or(settings.default_region.as_ref()) {
        context = context.with_region(region.as_str());
    }
    if args.no_installation {
        context = context.with_installation(false);
    } else if let Some(include) = settings.include_installation {
        context = context.with_installation(include);
    }
    Ok(context)
}

fn write_snapshot(path: &Path, snapshot: &EstimateSnapshot) -> Result<()> {
    let json = snapshot.to_json()?;
    fs::write(path, json).with_context(|| format!("Failed to write snapshot {}", path.display()))?;
    tracing::info!(id = %snapshot.id, path = %path.display(), "snapshot written");
    Ok(())
}

fn run_estimate(args: &EstimateArgs, settings: &Settings) -> Result<ExitCode> {
    let (title, config) = load_configuration(args)?;
    let context = pricing_context(args, settings)?;
    tracing::info!(
        product = %config.product_type(),
        country = %context.country,
        region = context.region.as_deref().unwrap_or("-"),
        "estimating {}",
        title
    );

    let result: Estimate = match &args.snapshot {
        Some(path) => {
            let snapshot = EstimateSnapshot::capture(config, context);
            write_snapshot(path, &snapshot)?;
            snapshot.estimate
        }
        None => estimate(&config, &context),
    };

    match args.format.or(settings.format).unwrap_or_default() {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print!("{}", report::render(&title, &result)),
    }

    if result.is_provisional() {
        tracing::warn!(errors = result.validation.errors.len(), "configuration has blocking errors");
        return Ok(ExitCode::from(EXIT_INVALID));
    }
    Ok(ExitCode::SUCCESS)
}
