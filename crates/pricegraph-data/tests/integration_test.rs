//! Integration tests for pricegraph-data: load a CSV and summarize it.

use pricegraph_data::{load_table, summarize, GroupBy, PriceField, Transform};
use std::io::Write;

fn sample_csv() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "vendor,current_price,old_price,units\n\
         Loblaws,5,10,1kg\n\
         Loblaws,15,10,2kg\n\
         Metro,8,8,500g\n"
    )
    .unwrap();
    file
}

#[test]
fn test_load_then_summarize() {
    let file = sample_csv();
    let table = load_table(file.path()).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.vendors(), vec!["Loblaws", "Metro"]);

    let current = summarize(
        &table,
        PriceField::CurrentPrice,
        Transform::Identity,
        GroupBy::Vendor,
    );
    let (key, summary) = &current[0];
    assert_eq!(key, "Loblaws");
    assert_eq!(summary.mean, Some(10.0));
    assert_eq!(summary.median, Some(10.0));
    assert_eq!(summary.min, Some(5.0));
    assert_eq!(summary.max, Some(15.0));
    assert_eq!(current[1].0, "Metro");
    assert_eq!(current[1].1.mean, Some(8.0));
    // A single Metro observation has no sample standard deviation
    assert_eq!(current[1].1.std_dev, None);
}

#[test]
fn test_overall_log_summary() {
    let file = sample_csv();
    let table = load_table(file.path()).unwrap();

    let result = summarize(
        &table,
        PriceField::CurrentPrice,
        Transform::LogPlusOne,
        GroupBy::None,
    );
    assert_eq!(result.len(), 1);

    let expected_mean = (6.0f64.ln() + 16.0f64.ln() + 9.0f64.ln()) / 3.0;
    assert!((result[0].1.mean.unwrap() - expected_mean).abs() < 1e-12);
}
