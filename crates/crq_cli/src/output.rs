//! Output formatting and export writers.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use clap::ValueEnum;
use crq_core::{FactorSpec, RiskFactor, SimulationConfig};
use crq_risk::{ComponentMeans, RunResult, SummaryRecord, SummaryStatistics, SAMPLE_COLUMNS};
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::error::Result;

/// Console output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Table,
    /// A single JSON document.
    Json,
}

/// JSON report: everything except the per-sample vectors.
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    iterations: usize,
    seed: u64,
    slm_factor: f64,
    tef: &'a FactorSpec,
    vulnerability: &'a FactorSpec,
    primary_loss: &'a FactorSpec,
    statistics: &'a SummaryStatistics,
    component_means: &'a ComponentMeans,
    exceedance: Vec<ExceedanceEntry>,
    risk_level: &'static str,
    summary: SummaryRecord,
}

#[derive(Debug, Serialize)]
struct ExceedanceEntry {
    probability: f64,
    loss: f64,
}

/// Prints a run result to stdout.
pub fn print_result(config: &SimulationConfig, result: &RunResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            print_table(config, result);
            Ok(())
        }
        OutputFormat::Json => print_json(config, result),
    }
}

fn print_json(config: &SimulationConfig, result: &RunResult) -> Result<()> {
    let report = JsonReport {
        iterations: config.iterations(),
        seed: config.seed(),
        slm_factor: config.slm_factor(),
        tef: config.tef(),
        vulnerability: config.vulnerability(),
        primary_loss: config.primary_loss(),
        statistics: result.statistics(),
        component_means: result.component_means(),
        exceedance: result
            .exceedance()
            .reference_points()
            .into_iter()
            .map(|(probability, loss)| ExceedanceEntry { probability, loss })
            .collect(),
        risk_level: result.risk_level().label(),
        summary: result.summary_record(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_table(config: &SimulationConfig, result: &RunResult) {
    let stats = result.statistics();

    print_section(
        "Input Parameters",
        &[
            ("Threat Event Frequency".into(), describe_spec(config.tef())),
            ("Vulnerability".into(), describe_spec(config.vulnerability())),
            ("Primary Loss".into(), describe_spec(config.primary_loss())),
            ("Secondary Loss Factor".into(), format!("{}x", config.slm_factor())),
            ("Simulations".into(), group_thousands(config.iterations() as f64)),
            ("Seed".into(), config.seed().to_string()),
        ],
    );

    let mut rows = vec![
        ("Mean ALE".to_string(), format_currency(stats.mean)),
        ("Median ALE".to_string(), format_currency(stats.median)),
        ("Standard Deviation".to_string(), format_currency(stats.std_dev)),
        ("Minimum".to_string(), format_currency(stats.min)),
        ("Maximum".to_string(), format_currency(stats.max)),
        ("Range".to_string(), format_currency(stats.range())),
        (format!("VaR ({}%)", stats.confidence), format_currency(stats.value_at_risk)),
    ];
    rows.extend(
        stats
            .percentiles
            .iter()
            .map(|(level, value)| (format!("{level}th Percentile"), format_currency(*value))),
    );
    print_section("Simulation Results", &rows);

    let means = result.component_means();
    print_section(
        "Loss Components (mean)",
        &[
            ("Threat Event Frequency".into(), format!("{:.1} / year", means.tef)),
            ("Vulnerability".into(), format!("{:.1}%", means.vulnerability * 100.0)),
            ("Loss Event Frequency".into(), format!("{:.2} / year", means.lef)),
            ("Primary Loss".into(), format_currency(means.primary_loss)),
            ("Secondary Loss".into(), format_currency(means.secondary_loss)),
            ("Loss Magnitude".into(), format_currency(means.loss_magnitude)),
        ],
    );

    let exceedance: Vec<(String, String)> = result
        .exceedance()
        .reference_points()
        .into_iter()
        .map(|(p, loss)| (format!("{p}% Exceedance"), format_currency(loss)))
        .collect();
    print_section("Loss Exceedance", &exceedance);

    println!("\nRisk Level: {}", result.risk_level());
    if result.has_non_finite() {
        println!(
            "Warning: {} ALE samples are NaN or infinite",
            stats.non_finite_count
        );
    }
}

/// Prints a validated configuration.
pub fn print_config(config: &SimulationConfig) {
    let mut rows: Vec<(String, String)> = RiskFactor::ALL
        .iter()
        .map(|&factor| (factor.to_string(), describe_spec(config.factor(factor))))
        .collect();
    rows.extend([
        ("SLM factor".to_string(), config.slm_factor().to_string()),
        ("Iterations".to_string(), config.iterations().to_string()),
        ("Confidence".to_string(), format!("{}%", config.confidence())),
        ("Seed".to_string(), config.seed().to_string()),
    ]);
    print_section("Validated Configuration", &rows);
}

#[derive(Tabled)]
struct Row<'a> {
    #[tabled(rename = "Metric")]
    metric: &'a str,
    #[tabled(rename = "Value")]
    value: &'a str,
}

fn print_section(title: &str, rows: &[(String, String)]) {
    let table = Table::new(rows.iter().map(|(metric, value)| Row { metric, value }))
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()))
        .to_string();

    println!("\n{title}");
    println!("{table}");
}

/// One-line description of a factor specification.
pub fn describe_spec(spec: &FactorSpec) -> String {
    match *spec {
        FactorSpec::RangeTriangular { min, likely, max } => {
            format!("range min={min} likely={likely} max={max}")
        }
        FactorSpec::MeanStdDev { mean, std } => format!("mean={mean} std={std}"),
        FactorSpec::PointEstimate { value } => format!("point {value}"),
    }
}

/// Formats a currency amount as `$1,234,567`, rounded to whole units.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(value.abs()))
}

fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Default sample export file name, e.g. `crq_simulation_20240131_154500.csv`.
pub fn default_export_path<Tz: TimeZone>(now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    PathBuf::from(format!("crq_simulation_{}.csv", now.format("%Y%m%d_%H%M%S")))
}

/// Writes one CSV row per sample with the fixed export columns.
pub fn write_samples_csv(path: &Path, result: &RunResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    if result.samples().is_empty() {
        writer.write_record(SAMPLE_COLUMNS)?;
    }
    for record in result.sample_records() {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the key-value summary as `Metric,Value` rows.
pub fn write_summary_csv(path: &Path, summary: &SummaryRecord) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Metric", "Value"])?;
    for (key, value) in summary.entries() {
        writer.write_record([key, value])?;
    }
    writer.flush()?;
    Ok(())
}
