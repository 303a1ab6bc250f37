use itertools::Itertools;
use serde::{Deserialize, Serialize};
use travel_emissions_core::model::{self, DietType, TransportMode};

/// the breakdown of one mode's emission factor under a diet
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FactorRow {
    pub mode: TransportMode,
    pub label: String,
    pub embodied_kg_per_km: f64,
    pub kcal_per_km: Option<f64>,
    pub food_kg_per_km: f64,
    pub factor_kg_per_km: f64,
}

pub fn factor_rows(diet: DietType) -> Vec<FactorRow> {
    model::build_factors(diet)
        .iter()
        .map(|(mode, factor)| FactorRow {
            mode,
            label: mode.label().to_string(),
            embodied_kg_per_km: mode.embodied_emissions(),
            kcal_per_km: mode.kcal_per_km(),
            food_kg_per_km: diet.food_emissions(&mode),
            factor_kg_per_km: factor,
        })
        .collect()
}

pub fn render_factor_table(diet: DietType) -> String {
    let rows = factor_rows(diet);
    let label_width = rows
        .iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Mode".len());
    let header = format!(
        "{:<label_width$}  {:>10}  {:>7}  {:>10}  {:>10}",
        "Mode", "embodied", "kcal/km", "food", "total"
    );
    let body = rows
        .iter()
        .map(|r| {
            let kcal = r
                .kcal_per_km
                .map(|k| format!("{k:.0}"))
                .unwrap_or_else(|| String::from("-"));
            format!(
                "{:<label_width$}  {:>10.5}  {:>7}  {:>10.5}  {:>10.5}",
                r.label, r.embodied_kg_per_km, kcal, r.food_kg_per_km, r.factor_kg_per_km
            )
        })
        .join("\n");
    format!(
        "Emission factors, kg CO₂/km per person ({} diet, {} kg CO₂/kcal)\n\n{header}\n{body}",
        diet.label(),
        diet.food_emission_per_kcal()
    )
}
