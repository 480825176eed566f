use clap::{Args, Parser, Subcommand};
use house_analysis::analysis::MarketContext;
use house_analysis::config::{AppConfig, ConfigError};
use house_analysis::error::ConfigurationError;
use house_analysis::telemetry::{self, TelemetryError};
use house_analysis::{
    report, AnalysisAgent, AnalysisError, HouseListing, LanguageModel, MockModel, RedFlagDetector,
    RulesRegistry,
};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "house-analysis",
    about = "Screen and score real-estate listings for short-stay rental investment",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full analysis pipeline over a scraped dataset file
    Analyze(AnalyzeArgs),
    /// Run only the red-flag pre-screening and print the scan as JSON
    Scan(ScanArgs),
    /// List the registered rules versions
    Versions,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// JSON dataset file: one listing object or an array of them
    dataset: PathBuf,
    /// Only analyze the listing with this TinyId
    #[arg(long)]
    house_id: Option<String>,
    /// Override the configured rules version
    #[arg(long)]
    rules_version: Option<String>,
    /// Override the configured output directory
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Dataset identifier recorded in the result metadata
    #[arg(long)]
    dataset_id: Option<String>,
    /// JSON file with market enrichment data to embed into the prompt
    #[arg(long)]
    enrichment: Option<PathBuf>,
    /// JSON file with market metrics to embed into the prompt
    #[arg(long)]
    market: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// JSON dataset file: one listing object or an array of them
    dataset: PathBuf,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse '{path}' as JSON: {source}")]
    ParseFile {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("no listing with TinyId '{0}' in the dataset")]
    HouseNotFound(String),
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Analyze(args) => run_analyze(&config, args),
        Command::Scan(args) => run_scan(args),
        Command::Versions => run_versions(),
    }
}

fn run_analyze(config: &AppConfig, args: AnalyzeArgs) -> Result<(), CliError> {
    let rules_version = args
        .rules_version
        .unwrap_or_else(|| config.rules_version.clone());
    let output_dir = args.output_dir.unwrap_or_else(|| config.output_dir.clone());

    let registry = RulesRegistry::with_builtin_versions();
    let model = build_model(&config.provider)?;
    let agent = AnalysisAgent::new(&registry, &rules_version, model)?;

    let context = MarketContext {
        enrichment: args.enrichment.as_deref().map(load_json).transpose()?,
        market_metrics: args.market.as_deref().map(load_json).transpose()?,
    };

    let listings = load_listings(&args.dataset)?;
    info!(
        count = listings.len(),
        rules = agent.rules_version(),
        "dataset loaded"
    );

    let selected: Vec<&HouseListing> = match &args.house_id {
        Some(wanted) => {
            let found = listings
                .iter()
                .find(|listing| listing.tiny_id() == Some(wanted.as_str()))
                .ok_or_else(|| CliError::HouseNotFound(wanted.clone()))?;
            vec![found]
        }
        None => listings.iter().collect(),
    };

    for listing in selected {
        let house_id = match listing.tiny_id() {
            Some(id) => id.to_string(),
            None => {
                warn!("skipping listing without a TinyId");
                continue;
            }
        };

        let result = agent.analyze_house(listing, &house_id, args.dataset_id.as_deref(), &context)?;

        let house_dir = output_dir.join(&house_id);
        let analysis_path = house_dir.join("analysis.json");
        let report_path = house_dir.join("report.md");

        fs::create_dir_all(&house_dir).map_err(|source| CliError::WriteFile {
            path: house_dir.clone(),
            source,
        })?;
        let json = serde_json::to_string_pretty(&result).map_err(|source| CliError::ParseFile {
            path: analysis_path.clone(),
            source,
        })?;
        fs::write(&analysis_path, json).map_err(|source| CliError::WriteFile {
            path: analysis_path.clone(),
            source,
        })?;
        report::save(&result, &report_path).map_err(|source| CliError::WriteFile {
            path: report_path.clone(),
            source,
        })?;

        println!(
            "{}: {:.2}/10 ({}) -> {}",
            house_id,
            result.overall_score,
            result.investment_recommendation,
            house_dir.display()
        );
    }

    Ok(())
}

fn run_scan(args: ScanArgs) -> Result<(), CliError> {
    let detector = RedFlagDetector::new();
    let listings = load_listings(&args.dataset)?;

    for listing in &listings {
        let scan = detector.scan(listing);
        let json = serde_json::to_string_pretty(&scan).map_err(|source| CliError::ParseFile {
            path: args.dataset.clone(),
            source,
        })?;
        match listing.tiny_id() {
            Some(id) => println!("{id}:\n{json}"),
            None => println!("{json}"),
        }
    }

    Ok(())
}

fn run_versions() -> Result<(), CliError> {
    let registry = RulesRegistry::with_builtin_versions();
    let latest = registry.latest_version()?;
    for version in registry.versions() {
        if version == latest {
            println!("{version} (latest)");
        } else {
            println!("{version}");
        }
    }
    Ok(())
}

fn build_model(provider: &str) -> Result<Box<dyn LanguageModel>, ConfigurationError> {
    match provider {
        "mock" => Ok(Box::new(MockModel)),
        other => Err(ConfigurationError::UnknownProvider(other.to_string())),
    }
}

fn load_json(path: &Path) -> Result<Value, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}

fn load_listings(path: &Path) -> Result<Vec<HouseListing>, CliError> {
    let value = load_json(path)?;
    parse_listings(value).map_err(|source| CliError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}

/// A dataset file is either one listing object or an array of them.
fn parse_listings(value: Value) -> Result<Vec<HouseListing>, serde_json::Error> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>(),
        other => Ok(vec![serde_json::from_value(other)?]),
    }
}
