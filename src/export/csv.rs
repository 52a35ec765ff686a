//! CSV export functionality

use crate::error::Result;
use crate::types::FootprintSummary;
use std::path::Path;

/// Export the emissions table to a CSV file.
///
/// One row per populated transport category, followed by a totals row and
/// a reduction row. Numbers are written unrounded; consumers format them.
pub fn export_to_csv(summary: &FootprintSummary, output_path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output_path)?;

    writer.write_record([
        "Type",
        "Quantity",
        "Total CO2 (kg)",
        "Total Coal CO2 (kg)",
        "Green Energy CO2 (kg)",
    ])?;

    for result in &summary.results {
        writer.write_record([
            result.kind.label().to_string(),
            result.quantity.to_string(),
            result.co2_total.to_string(),
            result.coal_total.to_string(),
            result.green_total.to_string(),
        ])?;
    }

    writer.write_record([
        "Total".to_string(),
        String::new(),
        summary.total_co2.to_string(),
        summary.total_coal.to_string(),
        summary.total_green.to_string(),
    ])?;

    writer.write_record([
        "Reduction (%)".to_string(),
        String::new(),
        summary.reduction_percent.to_string(),
        String::new(),
        String::new(),
    ])?;

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{EnergyMix, TransportInput, TransportKind};
    use crate::domain::service::compute_emissions;
    use tempfile::tempdir;

    #[test]
    fn test_export_writes_rows_and_totals() {
        let summary = compute_emissions(
            &[
                TransportInput::new(TransportKind::Car, 10),
                TransportInput::new(TransportKind::Passenger, 5),
            ],
            &EnergyMix::new(100.0, 0.0, 0.0),
        );

        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("emissions.csv");
        export_to_csv(&summary, &path).expect("Export failed");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        // Header + 2 categories + totals + reduction
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Type,Quantity"));
        assert!(lines[1].starts_with("Car,10,8.7"));
        assert!(lines[2].starts_with("Passenger,5,1.25"));
        assert!(lines[3].starts_with("Total,,"));
        assert!(lines[4].starts_with("Reduction (%),,"));
    }

    #[test]
    fn test_export_empty_summary() {
        let summary = compute_emissions(&[], &EnergyMix::none());

        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("empty.csv");
        export_to_csv(&summary, &path).expect("Export failed");

        let content = std::fs::read_to_string(&path).unwrap();
        // Header, totals, reduction only
        assert_eq!(content.lines().count(), 3);
    }
}
