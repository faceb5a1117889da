//! Parse command - extract parameters from a single listing.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use pingjia_core::{ListingParser, RegistryListingParser};

use super::report::{format_report, ListingReport};
use super::{load_config, read_input};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Listing text file ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Leave out computed areas, prices and ratios
    #[arg(long)]
    no_results: bool,

    /// Validate extracted parameters
    #[arg(long)]
    validate: bool,

    /// Show extraction warnings and timing
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text report
    Text,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let text = read_input(&args.input)?;

    info!("Parsing listing: {}", args.input.display());

    let parser = RegistryListingParser::from_config(&config);
    let result = parser.parse(&text)?;

    if args.validate {
        let issues = result.data.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let include_results = config.output.include_results && !args.no_results;
    let report = ListingReport::new(result, include_results);

    if let Some(calc) = &report.results {
        if !calc.is_finite() {
            eprintln!(
                "{} Building area is zero; ratios and unit prices are undefined",
                style("!").yellow()
            );
        }
    }

    let output = format_report(&report, args.format, config.output.decimals)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings {
        eprintln!();
        if report.warnings.is_empty() {
            eprintln!("{} All fields extracted", style("ℹ").blue());
        }
        for warning in &report.warnings {
            eprintln!("{} {}", style("!").yellow(), warning);
        }
        eprintln!(
            "{} Processing time: {}ms",
            style("ℹ").blue(),
            start.elapsed().as_millis()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
