//! Calc command - compute areas, prices and ratios from parameters.

use std::path::PathBuf;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::debug;

use pingjia_core::{compute_all, Calculation, Parameters};

use super::parse::OutputFormat;
use super::report::{format_calculation, format_number};
use super::{load_config, read_input};

/// Arguments for the calc command.
#[derive(Args)]
pub struct CalcArgs {
    /// Parameters JSON file, or the JSON output of `parse` ("-" reads stdin)
    input: Option<PathBuf>,

    /// Override a parameter, e.g. `unitPrice=64.56` (repeatable)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Validate parameters before computing
    #[arg(long)]
    validate: bool,
}

#[derive(Serialize)]
struct CalcOutput {
    parameters: Parameters,
    results: Calculation,
}

pub fn run(args: CalcArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let mut json = match &args.input {
        Some(path) => {
            let text = read_input(path)?;
            let value: serde_json::Value = serde_json::from_str(&text)?;
            extract_parameters_value(value)
        }
        None => serde_json::to_value(Parameters::empty())?,
    };

    for assignment in &args.set {
        apply_override(&mut json, assignment)?;
    }

    let params: Parameters = serde_json::from_value(json)?;
    debug!("Computing results for {:?}", params);

    if args.validate {
        let issues = params.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let results = compute_all(&params);
    if !results.is_finite() {
        eprintln!(
            "{} Building area is zero; ratios and unit prices are undefined",
            style("!").yellow()
        );
    }

    let decimals = config.output.decimals;
    let output = match args.format {
        OutputFormat::Json => serde_json::to_string(&CalcOutput {
            parameters: params,
            results,
        })?,
        OutputFormat::Csv => format_csv(&results, decimals)?,
        OutputFormat::Text => format_calculation(&results, decimals),
    };

    println!("{}", output);

    Ok(())
}

/// Accept either a bare parameter record or a parse report holding one under `data`.
fn extract_parameters_value(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(mut map) if map.get("data").is_some_and(|d| d.is_object()) => {
            map.remove("data").unwrap_or_default()
        }
        other => other,
    }
}

fn apply_override(json: &mut serde_json::Value, assignment: &str) -> anyhow::Result<()> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| anyhow::anyhow!("Expected KEY=VALUE, got: {}", assignment))?;
    let key = key.trim();

    let parsed_value: serde_json::Value = serde_json::from_str(value.trim())
        .map_err(|_| anyhow::anyhow!("Value for {} is not a number: {}", key, value))?;

    let obj = json
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("Parameters must be a JSON object"))?;

    if serde_json::to_value(Parameters::empty())?.get(key).is_none() {
        anyhow::bail!("Unknown parameter: {}", key);
    }

    obj.insert(key.to_string(), parsed_value);
    Ok(())
}

fn format_csv(results: &Calculation, decimals: usize) -> anyhow::Result<String> {
    let json = serde_json::to_value(results)?;
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["group", "name", "value"])?;
    for group in ["areas", "prices", "ratios"] {
        if let Some(fields) = json.get(group).and_then(|g| g.as_object()) {
            for (name, value) in fields {
                let value = value
                    .as_f64()
                    .map(|v| format_number(v, decimals))
                    .unwrap_or_else(|| "-".to_string());
                wtr.write_record([group, name.as_str(), value.as_str()])?;
            }
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
