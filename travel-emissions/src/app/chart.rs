use itertools::Itertools;
use travel_emissions_core::model::{CalculationResult, ModeEmission};

const SELECTED_FILL: char = '#';
const OTHER_FILL: char = '=';
/// savings at or below this many kg are not worth annotating
const REDUCTION_LABEL_THRESHOLD: f64 = 0.1;

/// chart title, noting car occupancy when a car is selected
pub fn chart_title(result: &CalculationResult) -> String {
    let mut title = String::from("Carbon Emissions by Transport Mode");
    if result.mode.is_car() {
        let plural = if result.passengers > 1 { "s" } else { "" };
        title.push_str(&format!(" (car: {} passenger{plural})", result.passengers));
    }
    title.push_str(&format!(
        " ({:.1} km per {})",
        result.distance_km,
        result.view.label_suffix()
    ));
    title
}

/// value label at the end of a bar
pub fn bar_label(row: &ModeEmission) -> String {
    let mut label = format!("{:.1} kg", row.emission);
    if row.saving > REDUCTION_LABEL_THRESHOLD {
        label.push_str(&format!(" ({:.1} kg reduction)", row.saving));
    }
    label
}

/// number of fill characters for a value, relative to the largest value
pub fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 {
        0
    } else {
        ((value / max) * width as f64).round() as usize
    }
}

/// renders the comparison of all modes as a horizontal bar chart in ascending
/// order of emissions. the selected mode is drawn with `#`, the others with `=`.
///
/// # Arguments
///
/// * `result` - an evaluated estimate
/// * `width`  - characters used by the longest bar
pub fn render_chart(result: &CalculationResult, width: usize) -> String {
    let max = result.max_emission();
    let label_width = result
        .all_modes
        .iter()
        .map(|row| row.mode.label().chars().count())
        .max()
        .unwrap_or(0);

    let bars = result
        .all_modes
        .iter()
        .map(|row| {
            let fill = if row.mode == result.mode {
                SELECTED_FILL
            } else {
                OTHER_FILL
            };
            let bar = std::iter::repeat(fill)
                .take(bar_length(row.emission, max, width))
                .collect::<String>();
            format!(
                "{:>label_width$} | {bar:<width$} {}",
                row.mode.label(),
                bar_label(row)
            )
        })
        .join("\n");

    let axis = format!("{:>label_width$} +{}", "", "-".repeat(width + 1));
    let x_label = format!(
        "{:>label_width$}   kg CO₂ per {}",
        "",
        result.view.label_suffix()
    );
    format!("{}\n\n{bars}\n{axis}\n{x_label}", chart_title(result))
}
