//! # PriceGraph Report
//!
//! Wires the pipeline together: load the price table, compute summaries,
//! build chart specifications, render enabled charts, and write Markdown
//! tables into the output directory.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod tables;

use pricegraph_charts::{
    grouped_bar_spec, histogram_spec, scatter_spec, ChartRenderer, GroupedBarSpec,
    HistogramSpec, ScatterSpec,
};
use pricegraph_common::{format_count, Result};
use pricegraph_config::ReportConfig;
use pricegraph_data::{
    load_table, summarize, AggregateSummary, GroupBy, PriceField, Transform,
};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Everything one report run produces.
#[derive(Debug)]
pub struct ReportArtifacts {
    /// Overall current-price summary, keyed by the sentinel group.
    pub overall_current: Vec<(String, AggregateSummary)>,
    /// Per-vendor current-price summaries.
    pub vendor_current: Vec<(String, AggregateSummary)>,
    /// Per-vendor old-price summaries.
    pub vendor_old: Vec<(String, AggregateSummary)>,
    /// Per-vendor log-transformed current-price summaries.
    pub vendor_log_current: Vec<(String, AggregateSummary)>,
    /// Current-price histogram specification.
    pub histogram: HistogramSpec,
    /// Grouped bar specification.
    pub grouped_bar: GroupedBarSpec,
    /// Scatter specification.
    pub scatter: ScatterSpec,
    /// Files written to the output directory.
    pub files: Vec<PathBuf>,
}

/// Run the full report generation once. A failed load aborts the run;
/// there is no partial-report recovery.
pub fn run(config: &ReportConfig) -> Result<ReportArtifacts> {
    let table = load_table(&config.input.path)?;
    info!(
        "Generating report over {} records from {} vendor(s)",
        format_count(table.len()),
        table.vendors().len()
    );

    let overall_current = summarize(
        &table,
        PriceField::CurrentPrice,
        Transform::Identity,
        GroupBy::None,
    );
    let vendor_current = summarize(
        &table,
        PriceField::CurrentPrice,
        Transform::Identity,
        GroupBy::Vendor,
    );
    let vendor_old = summarize(
        &table,
        PriceField::OldPrice,
        Transform::Identity,
        GroupBy::Vendor,
    );
    let vendor_log_current = summarize(
        &table,
        PriceField::CurrentPrice,
        Transform::LogPlusOne,
        GroupBy::Vendor,
    );

    let histogram = histogram_spec(&table);
    let grouped_bar = grouped_bar_spec(&table);
    let scatter = scatter_spec(&table);

    let out_dir = PathBuf::from(&config.output.dir);
    fs::create_dir_all(&out_dir)?;
    let mut files = Vec::new();

    // Summary tables
    let mut tables_doc = String::new();
    tables_doc.push_str(&tables::summary_table(
        "Current price by vendor",
        "Vendor",
        &vendor_current,
    ));
    tables_doc.push('\n');
    tables_doc.push_str(&tables::summary_table(
        "Current price overall",
        "Group",
        &overall_current,
    ));
    tables_doc.push('\n');
    tables_doc.push_str(&tables::vendor_comparison_table(
        &vendor_current,
        &vendor_old,
    ));
    let tables_path = out_dir.join("summary_tables.md");
    fs::write(&tables_path, tables_doc)?;
    files.push(tables_path);

    let log_doc = tables::summary_table(
        "Log-scale current price by vendor (ln(price + 1))",
        "Vendor",
        &vendor_log_current,
    );
    let log_path = out_dir.join("log_summary_table.md");
    fs::write(&log_path, log_doc)?;
    files.push(log_path);

    // Chart spec snapshots, for downstream renderers that are not plotters
    let specs_path = out_dir.join("chart_specs.json");
    let specs_json = serde_json::json!({
        "histogram": histogram,
        "grouped_bar": grouped_bar,
        "scatter": scatter,
    });
    fs::write(&specs_path, serde_json::to_string_pretty(&specs_json)?)?;
    files.push(specs_path);

    // Rendered charts
    let renderer = ChartRenderer::new(config.charts.styling.clone());
    if config.charts.enabled.histogram {
        let path = out_dir.join("current_price_histogram.png");
        renderer.render_histogram(&histogram, &path)?;
        files.push(path);
    }
    if config.charts.enabled.grouped_bar {
        let path = out_dir.join("vendor_mean_prices.png");
        renderer.render_grouped_bar(&grouped_bar, &path)?;
        files.push(path);
    }
    if config.charts.enabled.scatter {
        let path = out_dir.join("old_vs_current_scatter.png");
        renderer.render_scatter(&scatter, &path)?;
        files.push(path);
    }

    info!(
        "Report complete, {} artifact(s) in {}",
        files.len(),
        out_dir.display()
    );

    Ok(ReportArtifacts {
        overall_current,
        vendor_current,
        vendor_old,
        vendor_log_current,
        histogram,
        grouped_bar,
        scatter,
        files,
    })
}
