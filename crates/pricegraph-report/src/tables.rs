//! Markdown summary tables for the report

use pricegraph_data::AggregateSummary;
use pricegraph_common::format_stat;

/// Render a Markdown table of per-group summaries for one field.
///
/// Absent statistics render as a dash; they are never shown as zero.
pub fn summary_table(
    caption: &str,
    group_header: &str,
    groups: &[(String, AggregateSummary)],
) -> String {
    let mut out = String::new();
    out.push_str(&format!("### {caption}\n\n"));
    out.push_str(&format!(
        "| {group_header} | Mean | Median | Std dev | Min | Max |\n"
    ));
    out.push_str("| --- | --- | --- | --- | --- | --- |\n");

    for (key, summary) in groups {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            key,
            format_stat(summary.mean),
            format_stat(summary.median),
            format_stat(summary.std_dev),
            format_stat(summary.min),
            format_stat(summary.max),
        ));
    }

    out
}

/// Render the two-field vendor comparison table (current and old price
/// side by side).
pub fn vendor_comparison_table(
    current: &[(String, AggregateSummary)],
    old: &[(String, AggregateSummary)],
) -> String {
    let mut out = String::new();
    out.push_str("### Mean prices by vendor\n\n");
    out.push_str("| Vendor | Current mean | Old mean |\n");
    out.push_str("| --- | --- | --- |\n");

    for ((vendor, current_summary), (_, old_summary)) in current.iter().zip(old) {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            vendor,
            format_stat(current_summary.mean),
            format_stat(old_summary.mean),
        ));
    }

    out
}
