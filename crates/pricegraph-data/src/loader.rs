//! CSV loading for the grocery price table

use crate::{PriceRecord, PriceTable};
use pricegraph_common::{format_count, ReportError, Result};
use std::path::Path;
use tracing::info;

/// Load the price table from a CSV file.
///
/// The header must contain `vendor` and `current_price`; `old_price` and
/// `units` columns are optional and read as all-absent when missing. Empty
/// numeric fields are preserved as absent values, never coerced to zero.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<PriceTable> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ReportError::input_not_found(path));
    }

    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let vendor_idx = column("vendor")
        .ok_or_else(|| ReportError::malformed("required column 'vendor' missing from header"))?;
    let current_idx = column("current_price").ok_or_else(|| {
        ReportError::malformed("required column 'current_price' missing from header")
    })?;
    let old_idx = column("old_price");
    let units_idx = column("units");

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let row = i + 1; // 1-based data row for error messages
        let record = result?;

        let vendor = record.get(vendor_idx).unwrap_or("").trim();
        if vendor.is_empty() {
            return Err(ReportError::malformed_at("vendor cannot be empty", row));
        }

        let current_price = parse_price(record.get(current_idx), "current_price", row)?;
        let old_price = match old_idx {
            Some(idx) => parse_price(record.get(idx), "old_price", row)?,
            None => None,
        };
        let units = units_idx
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        records.push(PriceRecord {
            vendor: vendor.to_string(),
            current_price,
            old_price,
            units,
        });
    }

    info!(
        "Loaded {} price records from {}",
        format_count(records.len()),
        path.display()
    );
    Ok(PriceTable::new(records))
}

/// Parse an optional non-negative price cell. Empty means absent.
fn parse_price(cell: Option<&str>, column: &str, row: usize) -> Result<Option<f64>> {
    let Some(raw) = cell.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let value: f64 = raw.parse().map_err(|_| {
        ReportError::malformed_at(format!("{column} value '{raw}' is not a number"), row)
    })?;

    if !value.is_finite() || value < 0.0 {
        return Err(ReportError::malformed_at(
            format!("{column} value '{raw}' must be a non-negative number"),
            row,
        ));
    }

    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_missing_file() {
        let result = load_table("does/not/exist.csv");
        assert!(matches!(result, Err(ReportError::InputNotFound { .. })));
    }

    #[test]
    fn test_missing_required_column() {
        let file = write_csv("vendor,old_price,units\nLoblaws,5.00,500g\n");
        let result = load_table(file.path());
        assert!(matches!(result, Err(ReportError::MalformedInput { .. })));

        let message = result.unwrap_err().to_string();
        assert!(message.contains("current_price"));
    }

    #[test]
    fn test_empty_cells_stay_absent() {
        let file = write_csv(
            "vendor,current_price,old_price,units\n\
             Loblaws,4.99,,500g\n\
             Metro,,3.49,\n",
        );
        let table = load_table(file.path()).unwrap();
        assert_eq!(table.len(), 2);

        let loblaws = &table.records()[0];
        assert_eq!(loblaws.current_price, Some(4.99));
        assert_eq!(loblaws.old_price, None);
        assert_eq!(loblaws.units.as_deref(), Some("500g"));

        let metro = &table.records()[1];
        assert_eq!(metro.current_price, None);
        assert_eq!(metro.old_price, Some(3.49));
        assert_eq!(metro.units, None);
    }

    #[test]
    fn test_optional_columns_may_be_missing() {
        let file = write_csv("vendor,current_price\nLoblaws,4.99\n");
        let table = load_table(file.path()).unwrap();
        assert_eq!(table.records()[0].old_price, None);
        assert_eq!(table.records()[0].units, None);
    }

    #[test]
    fn test_bad_numeric_cell_reports_row() {
        let file = write_csv(
            "vendor,current_price,old_price,units\n\
             Loblaws,4.99,,\n\
             Metro,cheap,,\n",
        );
        let result = load_table(file.path());
        match result {
            Err(ReportError::MalformedInput { row, .. }) => assert_eq!(row, Some(2)),
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_price_rejected() {
        let file = write_csv("vendor,current_price\nLoblaws,-1.00\n");
        assert!(matches!(
            load_table(file.path()),
            Err(ReportError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_empty_vendor_rejected() {
        let file = write_csv("vendor,current_price\n,4.99\n");
        assert!(matches!(
            load_table(file.path()),
            Err(ReportError::MalformedInput { row: Some(1), .. })
        ));
    }
}
