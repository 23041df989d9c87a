//! CSV export of the campaign table
//!
//! Consumes the filtered and sorted but unpaginated row list, so an
//! export always covers every matching row, not just the visible page.
//! Cell formatting mirrors the on-screen table: currency prefixes,
//! thousands separators, percentage and multiplier suffixes.

use crate::model::campaign::{group_thousands, Campaign};
use anyhow::{Context, Result};
use chrono::Local;
use std::io::Write;
use std::path::{Path, PathBuf};

const HEADERS: [&str; 10] = [
    "Campaign",
    "Status",
    "Budget",
    "Spent",
    "Clicks",
    "Conversions",
    "CTR",
    "CPC",
    "ROAS",
    "Date",
];

/// Write the rows as CSV to any writer
pub fn write_csv<W: Write>(writer: W, rows: &[&Campaign], currency: &str) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADERS)?;

    for row in rows {
        out.write_record([
            row.name.clone(),
            row.status.name().to_string(),
            format!("{}{}", currency, group_thousands(row.budget as u64)),
            format!("{}{}", currency, group_thousands(row.spent as u64)),
            group_thousands(row.clicks),
            row.conversions.to_string(),
            format!("{:.2}%", row.ctr),
            format!("{}{:.2}", currency, row.cpc),
            format!("{:.2}x", row.roas),
            row.date.clone(),
        ])?;
    }

    out.flush()?;
    Ok(())
}

/// Export the rows to a timestamped file in `dir`, returning its path
pub fn export_csv(dir: &Path, rows: &[&Campaign], currency: &str) -> Result<PathBuf> {
    let filename = format!(
        "campaign-performance-{}.csv",
        Local::now().format("%Y%m%d-%H%M%S")
    );
    let path = dir.join(filename);

    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    write_csv(file, rows, currency)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::campaign::Status;

    fn sample_row() -> Campaign {
        Campaign {
            id: "campaign-1".to_string(),
            name: "Summer Sale 2024".to_string(),
            status: Status::Active,
            budget: 42_000.0,
            spent: 18_500.0,
            clicks: 9_342,
            conversions: 311,
            ctr: 4.2,
            cpc: 1.98,
            roas: 3.5,
            date: "6/14/2024".to_string(),
        }
    }

    #[test]
    fn test_write_csv_formats_cells() {
        let row = sample_row();
        let rows = vec![&row];
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &rows, "$").unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Campaign,Status,Budget,Spent,Clicks,Conversions,CTR,CPC,ROAS,Date"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Summer Sale 2024,Active,\"$42,000\",\"$18,500\",\"9,342\",311,4.20%,$1.98,3.50x,6/14/2024"
        );
    }

    #[test]
    fn test_write_csv_empty_result_has_header_only() {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &[], "$").unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_custom_currency_symbol() {
        let row = sample_row();
        let rows = vec![&row];
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &rows, "€").unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("€1.98"));
    }
}
