//! Output formatting module

use crate::cli::OutputFormat;
use crate::constants::emission_factors::get_emission_factor;
use crate::domain::model::TransportKind;
use crate::error::Result;
use crate::types::{FootprintSummary, ImpactGrade};

pub fn output_summary(output_format: OutputFormat, summary: &FootprintSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(summary)?;
        println!("{}", content);
    } else {
        // Table format
        println!("\nCO2 Emission Table");
        println!("==================");
        println!(
            "{:<12} {:>10} {:>14} {:>16} {:>16}",
            "Type", "Quantity", "CO2 (kg)", "Coal CO2 (kg)", "Green CO2 (kg)"
        );
        println!("{}", "-".repeat(72));

        for result in &summary.results {
            println!(
                "{:<12} {:>10} {:>14.2} {:>16.2} {:>16.4}",
                result.kind.label(),
                result.quantity,
                result.co2_total,
                result.coal_total,
                result.green_total
            );
        }

        println!("{}", "-".repeat(72));
        println!(
            "{:<12} {:>10} {:>14.2} {:>16.2} {:>16.4}",
            "Total", "", summary.total_co2, summary.total_coal, summary.total_green
        );

        println!("\nComparison");
        println!("----------");
        println!("Without green energy: {:>10.2} kg CO2", summary.total_co2);
        println!("With green energy:    {:>10.2} kg CO2", summary.total_green);
        println!("Green coefficient:    {:>10.5} kg per kWh-equivalent", summary.green_coefficient);

        let grade = ImpactGrade::from_reduction(summary.reduction_percent);
        println!(
            "\nReduction: {:.0}% ({})",
            summary.reduction_percent,
            grade.label()
        );
        println!("{}", reduction_bar(summary.reduction_percent));

        print_factor_footnote();
    }

    Ok(())
}

/// Text progress bar for the reduction, clamped to [0, 100]
fn reduction_bar(percent: f64) -> String {
    const WIDTH: usize = 50;
    let clamped = percent.clamp(0.0, 100.0);
    let filled = (clamped / 100.0 * WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(WIDTH - filled))
}

/// Per-unit factors, shown under the table as in the source calculator
fn print_factor_footnote() {
    println!("\nPer unit CO2 emissions          Coal per unit");
    for kind in TransportKind::ALL {
        let factor = get_emission_factor(kind);
        println!(
            "  {:<12} {:>6.2} kg          {:<12} {:>6.2} kg",
            factor.name, factor.co2_per_unit, factor.name, factor.coal_per_unit
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduction_bar_bounds() {
        assert_eq!(reduction_bar(0.0), format!("[{}]", ".".repeat(50)));
        assert_eq!(reduction_bar(100.0), format!("[{}]", "#".repeat(50)));
        // Out-of-range values are clamped, not truncated mid-bar
        assert_eq!(reduction_bar(150.0), reduction_bar(100.0));
        assert_eq!(reduction_bar(-5.0), reduction_bar(0.0));
    }

    #[test]
    fn test_reduction_bar_half() {
        let bar = reduction_bar(50.0);
        assert_eq!(bar.matches('#').count(), 25);
        assert_eq!(bar.matches('.').count(), 25);
    }
}
