//! Listing report rendering shared by the parse and batch commands.

use serde::Serialize;

use pingjia_core::{compute_all, Calculation, ExtractionResult, MetaInfo, Parameters};

use super::parse::OutputFormat;

/// A parsed listing with optional computed results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingReport {
    pub data: Parameters,
    pub meta: MetaInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Calculation>,
}

impl ListingReport {
    pub fn new(result: ExtractionResult, include_results: bool) -> Self {
        let results = include_results.then(|| compute_all(&result.data));
        Self {
            data: result.data,
            meta: result.meta,
            warnings: result.warnings,
            results,
        }
    }
}

/// Format a number, or `-` when it is not finite.
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", decimals, value)
    } else {
        "-".to_string()
    }
}

pub fn format_report(
    report: &ListingReport,
    format: OutputFormat,
    decimals: usize,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Csv => format_csv(report, decimals),
        OutputFormat::Text => Ok(format_text(report, decimals)),
    }
}

/// Column names of the per-listing CSV row.
pub const CSV_HEADER: [&str; 18] = [
    "address",
    "community_name",
    "transaction_date",
    "total_price_raw",
    "main_building_area",
    "balcony_area",
    "canopy_area",
    "common_area1",
    "common_area2",
    "parking_area",
    "parking_price",
    "unit_price",
    "land_area",
    "current_floor",
    "floors",
    "building_total_area",
    "total_price",
    "public_facility_ratio",
];

/// One CSV row; result columns are empty without computed results.
pub fn csv_row(report: &ListingReport, decimals: usize) -> Vec<String> {
    let data = &report.data;
    let meta = &report.meta;
    let number = |v: f64| format_number(v, decimals);

    let mut row = vec![
        meta.address.clone(),
        meta.community_name.clone(),
        meta.transaction_date.clone(),
        format!("{:.0}", meta.total_price_raw),
        number(data.main_building_area),
        number(data.balcony_area),
        number(data.canopy_area),
        number(data.common_area1),
        number(data.common_area2),
        number(data.parking_area),
        number(data.parking_price),
        number(data.unit_price),
        number(data.land_area),
        data.current_floor.to_string(),
        data.floors.to_string(),
    ];

    match &report.results {
        Some(calc) => {
            row.push(number(calc.areas.building_total_area));
            row.push(number(calc.prices.total_price));
            row.push(number(calc.ratios.public_facility_ratio));
        }
        None => row.extend(std::iter::repeat_n(String::new(), 3)),
    }

    row
}

fn format_csv(report: &ListingReport, decimals: usize) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(CSV_HEADER)?;
    wtr.write_record(csv_row(report, decimals))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &ListingReport, decimals: usize) -> String {
    let meta = &report.meta;
    let data = &report.data;
    let number = |v: f64| format_number(v, decimals);
    let mut output = String::new();

    output.push_str(&format!("Listing: {}\n", or_dash(&meta.address)));
    if !meta.community_name.is_empty() {
        output.push_str(&format!("Community: {}\n", meta.community_name));
    }
    output.push_str(&format!("Target: {}\n", or_dash(&meta.transaction_target)));

    let gregorian = meta
        .transaction_date_gregorian()
        .map(|d| format!(" ({})", d))
        .unwrap_or_default();
    output.push_str(&format!(
        "Transaction date: {}{}\n",
        or_dash(&meta.transaction_date),
        gregorian
    ));
    output.push_str(&format!(
        "Transaction price: {} 萬\n",
        number(meta.total_price_raw / 10_000.0)
    ));
    output.push('\n');

    output.push_str("Building:\n");
    output.push_str(&format!("  Type:       {}\n", or_dash(&meta.building_type)));
    output.push_str(&format!("  Material:   {}\n", or_dash(&meta.building_material)));
    let completed = meta
        .completion_date_gregorian()
        .map(|d| format!(" ({})", d.format("%Y-%m")))
        .unwrap_or_default();
    output.push_str(&format!(
        "  Completed:  {}{}\n",
        or_dash(&meta.completion_date),
        completed
    ));
    output.push_str(&format!("  Floor:      {}/{}\n", data.current_floor, data.floors));
    output.push_str(&format!("  Layout:     {}\n", or_dash(&meta.layout)));
    if !meta.parking_type.is_empty() {
        output.push_str(&format!(
            "  Parking:    {} {}\n",
            meta.parking_type, meta.parking_floor
        ));
    }
    output.push('\n');

    output.push_str("Parameters:\n");
    output.push_str(&format!("  Main building:     {} 坪\n", number(data.main_building_area)));
    output.push_str(&format!("  Balcony:           {} 坪\n", number(data.balcony_area)));
    output.push_str(&format!("  Canopy:            {} 坪\n", number(data.canopy_area)));
    output.push_str(&format!("  Shared (parking):  {} 坪\n", number(data.common_area1)));
    output.push_str(&format!("  Shared (general):  {} 坪\n", number(data.common_area2)));
    output.push_str(&format!("  Parking space:     {} 坪\n", number(data.parking_area)));
    output.push_str(&format!("  Land:              {} 坪\n", number(data.land_area)));
    output.push_str(&format!("  Unit price:        {} 萬/坪\n", number(data.unit_price)));
    output.push_str(&format!("  Parking price:     {} 萬\n", number(data.parking_price)));

    if let Some(calc) = &report.results {
        output.push('\n');
        output.push_str(&format_calculation(calc, decimals));
    }

    if !report.warnings.is_empty() {
        output.push_str("\nWarnings:\n");
        for warning in &report.warnings {
            output.push_str(&format!("  - {}\n", warning));
        }
    }

    output
}

/// Text rendering of the three result groups.
pub fn format_calculation(calc: &Calculation, decimals: usize) -> String {
    let number = |v: f64| format_number(v, decimals);
    let areas = &calc.areas;
    let prices = &calc.prices;
    let ratios = &calc.ratios;
    let mut output = String::new();

    output.push_str("Areas:\n");
    output.push_str(&format!(
        "  Main building with attachments:  {} 坪\n",
        number(areas.main_building_with_attachments)
    ));
    output.push_str(&format!("  Shared areas:                    {} 坪\n", number(areas.common_areas)));
    output.push_str(&format!(
        "  Shared areas without parking:    {} 坪\n",
        number(areas.common_areas_without_parking)
    ));
    output.push_str(&format!(
        "  Building total:                  {} 坪\n",
        number(areas.building_total_area)
    ));
    output.push_str(&format!(
        "  Total with parking:              {} 坪\n",
        number(areas.total_area_with_parking)
    ));
    output.push('\n');

    output.push_str("Prices:\n");
    output.push_str(&format!("  Base building:      {} 萬\n", number(prices.base_building_price)));
    output.push_str(&format!("  Adjusted building:  {} 萬\n", number(prices.adjusted_building_price)));
    output.push_str(&format!("  Total:              {} 萬\n", number(prices.total_price)));
    output.push_str(&format!("  Actual unit price:  {} 萬/坪\n", number(prices.actual_unit_price)));
    output.push('\n');

    output.push_str("Ratios:\n");
    output.push_str(&format!("  Main building:                  {}%\n", number(ratios.main_building_ratio)));
    output.push_str(&format!(
        "  Main building without parking:  {}%\n",
        number(ratios.main_building_ratio_without_parking)
    ));
    output.push_str(&format!("  Public facility:                {}%\n", number(ratios.public_facility_ratio)));
    output.push_str(&format!("  Attachments:                    {}%\n", number(ratios.attachment_ratio)));
    output.push_str(&format!("  Actual usage:                   {}%\n", number(ratios.actual_usage_ratio)));
    output.push_str(&format!("  Usable area:                    {}%\n", number(ratios.usable_area_ratio)));

    output
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}
