//! CLI for the fin-ratios financial statement analysis library.
//!
//! Lists and describes the supported ratios, and analyzes a company from CSV
//! statement exports.

mod source;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fin_ratios::{
    Analysis, AnalysisConfig, Metric, MetricFact, MetricsTable, Pipeline, RatioCategory,
    RatioRegistry,
};
use serde::Serialize;
use source::{CsvDirectorySource, write_csv};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fin-ratios")]
#[command(about = "Financial statement ratio analysis", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all available ratios
    List,
    /// Show information about a specific ratio
    Info {
        /// Ratio name or label
        ratio: String,
    },
    /// List known companies
    Companies {
        /// Configuration file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Analyze a company's statements
    Analyze {
        /// Ticker symbol
        ticker: String,
        /// Directory holding <TICKER>/{balance_sheet,income_statement,cash_flow}.csv
        #[arg(long)]
        data_dir: PathBuf,
        /// Number of fiscal years to analyze
        #[arg(long)]
        years: Option<usize>,
        /// Configuration file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write report sheets and charts to this directory
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let registry = RatioRegistry::with_defaults();

    match cli.command {
        Commands::List => list_ratios(&registry),
        Commands::Info { ratio } => show_ratio_info(&registry, &ratio)?,
        Commands::Companies { config } => list_companies(&load_config(config.as_deref())?),
        Commands::Analyze {
            ticker,
            data_dir,
            years,
            config,
            output,
            json,
        } => {
            let config = load_config(config.as_deref())?;
            let years = years.unwrap_or(config.lookback_years);
            let pipeline = Pipeline::new(config);
            analyze(&pipeline, &ticker, &data_dir, years, output.as_deref(), json)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AnalysisConfig> {
    match path {
        Some(path) => AnalysisConfig::from_path(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(AnalysisConfig::default()),
    }
}

/// List all ratios grouped by category.
fn list_ratios(registry: &RatioRegistry) {
    println!("Available Ratios ({} total)\n", registry.len());

    for category in RatioCategory::ALL {
        let ratios = registry.by_category(category);
        if ratios.is_empty() {
            continue;
        }
        println!("{category}:");
        for ratio in ratios {
            println!("  {} - {}", ratio.name(), ratio.description());
        }
        println!();
    }
}

/// Show detailed information about a specific ratio.
fn show_ratio_info(registry: &RatioRegistry, name: &str) -> anyhow::Result<()> {
    let metric: Metric = name.parse().with_context(|| {
        let known: Vec<&str> = registry.iter().map(|r| r.name()).collect();
        format!("available ratios: {}", known.join(", "))
    })?;
    let ratio = registry
        .get(metric)
        .with_context(|| format!("ratio '{metric}' is not registered"))?;

    println!("Ratio: {}", ratio.metric());
    println!("Name: {}", ratio.name());
    println!("Category: {}", ratio.category());
    println!("Description: {}", ratio.description());
    println!("Formula: {}", ratio.formula());
    println!(
        "Favourable direction: {}",
        if metric.higher_is_better() { "higher" } else { "lower" }
    );
    println!("Statement rows:");
    for row in ratio.required_rows() {
        println!("  - {row} ({})", row.source());
    }
    Ok(())
}

fn list_companies(config: &AnalysisConfig) {
    for (ticker, name) in &config.companies {
        println!("{ticker:<6} {name}");
    }
}

#[derive(Serialize)]
struct AnalysisReport<'a> {
    ticker: &'a str,
    company: &'a str,
    metrics: &'a MetricsTable,
    score: &'a fin_ratios::CompositeScore,
    facts: Vec<MetricFact>,
}

fn analyze(
    pipeline: &Pipeline,
    ticker: &str,
    data_dir: &Path,
    years: usize,
    output: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let ticker = ticker.to_uppercase();
    let company = pipeline
        .config()
        .company_name(&ticker)
        .unwrap_or(ticker.as_str())
        .to_string();

    let source = CsvDirectorySource::new(data_dir);
    let analysis = pipeline
        .run_for(&source, &ticker, years)
        .with_context(|| format!("analyzing {ticker}"))?;

    if let Some(dir) = output {
        write_outputs(pipeline, &analysis, &ticker, &company, dir)?;
    }

    let facts = pipeline.facts(&analysis);
    if json {
        let report = AnalysisReport {
            ticker: &ticker,
            company: &company,
            metrics: analysis.metrics(),
            score: analysis.score(),
            facts,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_analysis(&analysis, &company, &ticker, &facts);
    }
    Ok(())
}

fn print_analysis(analysis: &Analysis, company: &str, ticker: &str, facts: &[MetricFact]) {
    let metrics = analysis.metrics();

    println!("{company} ({ticker})\n");
    print!("{:<26}", "Metric");
    for period in metrics.periods() {
        print!("{:>12}", period.to_string());
    }
    println!();

    for metric in metrics.metrics() {
        print!("{:<26}", metric.label());
        for index in 0..metrics.len() {
            match metrics.value(index, metric) {
                Some(value) => print!("{value:>12.4}"),
                None => print!("{:>12}", "n/a"),
            }
        }
        println!();
    }

    println!();
    let score = analysis.score();
    for (label, value) in fin_ratios::CompositeScore::LABELS
        .iter()
        .zip(score.to_values())
    {
        println!("{label:<14} {value:.2}");
    }

    println!();
    for fact in facts {
        println!("{fact}");
    }
}

fn write_outputs(
    pipeline: &Pipeline,
    analysis: &Analysis,
    ticker: &str,
    company: &str,
    dir: &Path,
) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    for mut sheet in pipeline.report_sheets(analysis)? {
        let path = dir.join(sheet_file_name(ticker, sheet.name));
        write_csv(&path, &mut sheet.frame)?;
        info!(path = %path.display(), "wrote report sheet");
    }

    let path = dir.join(format!("{ticker}_charts.json"));
    let charts = serde_json::to_string_pretty(&analysis.charts(company))?;
    std::fs::write(&path, charts).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote charts");
    Ok(())
}

fn sheet_file_name(ticker: &str, sheet: &str) -> String {
    format!("{ticker}_{}.csv", sheet.to_lowercase().replace(' ', "_"))
}
