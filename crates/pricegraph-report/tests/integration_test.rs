//! End-to-end test: CSV in, summaries and tables out.
//!
//! Chart rendering is disabled here so the test exercises the full pipeline
//! without depending on a font stack; the renderer itself is covered in
//! pricegraph-charts.

use pricegraph_config::ReportConfig;
use pricegraph_report::run;
use std::fs;
use std::io::Write;

fn config_for(csv: &str) -> (ReportConfig, tempfile::TempDir, tempfile::NamedTempFile) {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(input, "{csv}").unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    let mut config = ReportConfig::default();
    config.input.path = input.path().to_string_lossy().into_owned();
    config.output.dir = out_dir.path().to_string_lossy().into_owned();
    config.charts.enabled.histogram = false;
    config.charts.enabled.grouped_bar = false;
    config.charts.enabled.scatter = false;

    (config, out_dir, input)
}

#[test]
fn test_end_to_end_scenario() {
    let (config, _out_dir, _input) = config_for(
        "vendor,current_price,old_price,units\n\
         Loblaws,5,10,\n\
         Loblaws,15,10,\n\
         Metro,8,8,\n",
    );

    let artifacts = run(&config).unwrap();

    // Grouped current-price means per the scenario
    assert_eq!(artifacts.vendor_current[0].0, "Loblaws");
    assert_eq!(artifacts.vendor_current[0].1.mean, Some(10.0));
    assert_eq!(artifacts.vendor_current[1].0, "Metro");
    assert_eq!(artifacts.vendor_current[1].1.mean, Some(8.0));

    // Grouped bar spec pairs both means for both vendors
    assert_eq!(artifacts.grouped_bar.groups.len(), 2);
    assert_eq!(artifacts.grouped_bar.groups[0].current_mean, Some(10.0));
    assert_eq!(artifacts.grouped_bar.groups[0].old_mean, Some(10.0));
    assert_eq!(artifacts.grouped_bar.groups[1].current_mean, Some(8.0));
    assert_eq!(artifacts.grouped_bar.groups[1].old_mean, Some(8.0));

    // Tables and spec snapshot were written
    assert_eq!(artifacts.files.len(), 3);
    let tables = fs::read_to_string(&artifacts.files[0]).unwrap();
    assert!(tables.contains("| Loblaws | 10.00 | 10.00 |"));
    assert!(tables.contains("| Metro | 8.00 | 8.00 |"));

    let specs = fs::read_to_string(&artifacts.files[2]).unwrap();
    assert!(specs.contains("\"histogram\""));
    assert!(specs.contains("\"scatter\""));
}

#[test]
fn test_missing_input_aborts_run() {
    let mut config = ReportConfig::default();
    config.input.path = "definitely/missing.csv".to_string();
    config.output.dir = tempfile::tempdir().unwrap().path().to_string_lossy().into_owned();

    let result = run(&config);
    assert!(result.is_err());
}
