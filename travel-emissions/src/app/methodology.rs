use travel_emissions_core::model::{CalculationInput, DietType, TripView};

use super::factor_table;

const SOURCES: [&str; 5] = [
    "IPCC Sixth Assessment Report (2021)",
    "UK Government GHG Conversion Factors (DEFRA)",
    "European Cyclists' Federation LCA of bicycles",
    "Nature Scientific Reports (2020), https://www.nature.com/articles/s41598-020-66170-y",
    "GREET Model, Argonne National Lab",
];

/// describes how estimates are computed, followed by the factor table for a diet
/// and the data sources.
pub fn render_methodology(diet: DietType) -> String {
    let western = DietType::AverageWestern.food_emission_per_kcal() * 1000.0;
    let plant = DietType::LowCarbonPlantBased.food_emission_per_kcal() * 1000.0;
    let sources = SOURCES
        .iter()
        .map(|s| format!("  - {s}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Methodology\n\
         \n\
         Each mode's emission factor (kg CO₂ per km per person) combines:\n\
         \n\
         - embodied emissions: manufacturing of vehicles, bikes and batteries, spread\n\
         \x20 over their lifetime distance\n\
         - operational emissions: tailpipe or electricity use of motorized modes\n\
         - food-based emissions: calories burned per km on foot or by bike, times the\n\
         \x20 CO₂ cost of the traveler's diet\n\
         \x20   - {}: {western:.1} kg CO₂ per 1000 kcal\n\
         \x20   - {}: {plant:.1} kg CO₂ per 1000 kcal\n\
         \n\
         Car emissions are divided among {}-{} passengers when shared. Every estimate is\n\
         compared against driving a small car alone. Yearly figures assume {} trips\n\
         (5 days a week, 52 weeks, there and back).\n\
         \n\
         {}\n\
         \n\
         Sources\n\
         \n\
         {sources}",
        DietType::AverageWestern.label(),
        DietType::LowCarbonPlantBased.label(),
        CalculationInput::MIN_PASSENGERS,
        CalculationInput::MAX_PASSENGERS,
        TripView::TRIPS_PER_YEAR,
        factor_table::render_factor_table(diet),
    )
}

#[cfg(test)]
mod tests {
    use super::render_methodology;
    use travel_emissions_core::model::DietType;

    #[test]
    fn test_methodology_mentions_diets_and_sources() {
        let text = render_methodology(DietType::AverageWestern);
        assert!(text.starts_with("Methodology"));
        assert!(text.contains("Average Western: 2.5 kg CO₂ per 1000 kcal"));
        assert!(text.contains("Low-carbon / Plant-based: 1.2 kg CO₂ per 1000 kcal"));
        assert!(text.contains("520 trips"));
        assert!(text.contains("Local Electric Train"));
        assert!(text.contains("DEFRA"));
    }
}
