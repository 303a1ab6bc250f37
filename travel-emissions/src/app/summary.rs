use serde::{Deserialize, Serialize};
use travel_emissions_core::model::{CalculationResult, TransportMode};

use super::chart;

/// a comparison row as written to CSV
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub mode: TransportMode,
    pub label: String,
    pub emission_kg: f64,
    pub saving_kg: f64,
    pub selected: bool,
}

pub fn comparison_rows(result: &CalculationResult) -> Vec<ComparisonRow> {
    result
        .all_modes
        .iter()
        .map(|row| ComparisonRow {
            mode: row.mode,
            label: row.mode.label().to_string(),
            emission_kg: row.emission,
            saving_kg: row.saving,
            selected: row.mode == result.mode,
        })
        .collect()
}

/// the headline figures of an estimate, one statement per line.
pub fn render_summary(result: &CalculationResult) -> String {
    let mut lines = vec![
        format!("Estimated Emissions: {:.2} kg CO₂", result.total_emission),
        format!(
            "{} emits {:.3} kg CO₂/km per person",
            result.mode.label(),
            result.per_person_rate
        ),
    ];
    if result.is_shared_vehicle() {
        lines.push(format!(
            "Total emissions for vehicle: {:.2} kg CO₂, shared among {} passengers.",
            result.vehicle_total, result.passengers
        ));
    }
    if result.saved_vs_baseline > 0.0 {
        lines.push(format!(
            "You saved approximately {:.2} kg CO₂ compared to driving a small car alone.",
            result.saved_vs_baseline
        ));
    } else {
        lines.push(format!(
            "This mode emits {:.2} kg more CO₂ than driving a small car solo.",
            result.saved_vs_baseline.abs()
        ));
    }
    lines.join("\n")
}

/// summary followed by the comparison chart
pub fn render_estimate(result: &CalculationResult, chart_width: usize) -> String {
    format!(
        "{}\n\n{}",
        render_summary(result),
        chart::render_chart(result, chart_width)
    )
}
