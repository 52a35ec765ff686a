//! Grouped bar chart rendered as text
//!
//! One group per transport category, three bars per group: no-mitigation
//! CO2, coal-equivalent CO2, and green-mitigated CO2. Bars are scaled to
//! the largest value in the summary.

use crate::types::FootprintSummary;

const BAR_WIDTH: usize = 40;

/// Render the emissions comparison chart for a summary.
///
/// Returns an empty string when there are no rows to draw.
pub fn render_chart(summary: &FootprintSummary) -> String {
    if summary.results.is_empty() {
        return String::new();
    }

    let max_value = summary
        .results
        .iter()
        .map(|result| result.coal_total)
        .fold(0.0_f64, f64::max);

    let mut chart = String::new();
    chart.push_str("Emission Sources by Transport Type\n");
    chart.push_str("==================================\n\n");

    for result in &summary.results {
        chart.push_str(&format!("{} (x{})\n", result.kind.label(), result.quantity));
        chart.push_str(&bar_line("CO2", result.co2_total, max_value));
        chart.push_str(&bar_line("Coal", result.coal_total, max_value));
        chart.push_str(&bar_line("Green", result.green_total, max_value));
        chart.push('\n');
    }

    chart.push_str(&format!(
        "Scale: full bar = {:.2} kg CO2\n",
        max_value
    ));

    chart
}

fn bar_line(label: &str, value: f64, max_value: f64) -> String {
    format!("  {:<6} {:<width$} {:>10.2} kg\n", label, bar(value, max_value), value, width = BAR_WIDTH)
}

fn bar(value: f64, max_value: f64) -> String {
    if max_value <= 0.0 {
        return String::new();
    }

    let filled = ((value / max_value) * BAR_WIDTH as f64).round() as usize;
    // A non-zero value always gets at least one mark
    let filled = if value > 0.0 { filled.max(1) } else { filled };
    "█".repeat(filled.min(BAR_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{EnergyMix, TransportInput, TransportKind};
    use crate::domain::service::compute_emissions;

    fn sample_summary() -> FootprintSummary {
        compute_emissions(
            &[
                TransportInput::new(TransportKind::Car, 10),
                TransportInput::new(TransportKind::Container, 1),
            ],
            &EnergyMix::new(100.0, 0.0, 0.0),
        )
    }

    #[test]
    fn test_chart_has_group_per_category() {
        let chart = render_chart(&sample_summary());
        assert!(chart.contains("Car (x10)"));
        assert!(chart.contains("Container (x1)"));
        assert!(!chart.contains("Passenger"));
    }

    #[test]
    fn test_largest_bar_is_full_width() {
        // Container coal total (14.71) is the largest value here
        let chart = render_chart(&sample_summary());
        let full_bar = "█".repeat(BAR_WIDTH);
        assert!(chart.contains(&full_bar));
        assert!(chart.contains("Scale: full bar = 14.71 kg CO2"));
    }

    #[test]
    fn test_small_values_still_visible() {
        // Green totals are tiny but non-zero, so each gets at least one mark
        let chart = render_chart(&sample_summary());
        for line in chart.lines().filter(|line| line.trim_start().starts_with("Green")) {
            assert!(line.contains('█'), "green bar missing from: {}", line);
        }
    }

    #[test]
    fn test_empty_summary_renders_nothing() {
        let summary = compute_emissions(&[], &EnergyMix::none());
        assert_eq!(render_chart(&summary), "");
    }
}
