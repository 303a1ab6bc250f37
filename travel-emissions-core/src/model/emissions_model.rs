use itertools::Itertools;

use super::{
    CalculationInput, CalculationResult, DietType, EmissionsError, EmissionsFactors,
    ModeEmission, TransportMode,
};

/// builds the per-mode emission factor table for a diet.
pub fn build_factors(diet: DietType) -> EmissionsFactors {
    EmissionsFactors::new(diet)
}

/// estimates the emissions of a trip and compares it against every other mode.
///
/// the comparison against a solo small car always uses the raw small car
/// factor, independent of diet.
///
/// in the comparison rows, passenger sharing is only applied to the row of
/// the selected mode. choosing a small car with 4 passengers divides the
/// small car row by 4 but leaves the electric car row undivided.
///
/// # Arguments
///
/// * `input` - trip distance, mode, passengers, diet and view
///
/// # Returns
///
/// the estimate for the selected mode along with all modes sorted by ascending
/// emissions (ties kept in table order), or an error if the input is out of range.
pub fn evaluate(input: &CalculationInput) -> Result<CalculationResult, EmissionsError> {
    let passengers = input.validate()?;
    log::debug!(
        "evaluate mode={}, distance_km={}, passengers={passengers}, diet={}, view={}",
        input.mode,
        input.distance_km,
        input.diet,
        input.view
    );

    let factors = build_factors(input.diet);
    let multiplier = input.view.multiplier();
    let distance = input.distance_km;
    let divisor = passengers as f64;

    let base_factor = factors.get(&input.mode);
    let per_person_rate = base_factor / divisor;
    let total_emission = per_person_rate * distance * multiplier;
    let vehicle_total = base_factor * distance * multiplier;
    let baseline_total = TransportMode::SmallCar.embodied_emissions() * distance * multiplier;
    let saved_vs_baseline = baseline_total - total_emission;

    let all_modes = factors
        .iter()
        .map(|(mode, factor)| {
            let emission = if mode == input.mode && mode.is_car() {
                (factor / divisor) * distance * multiplier
            } else {
                factor * distance * multiplier
            };
            ModeEmission {
                mode,
                emission,
                saving: baseline_total - emission,
            }
        })
        .sorted_by(|a, b| a.emission.total_cmp(&b.emission))
        .collect_vec();

    Ok(CalculationResult {
        mode: input.mode,
        diet: input.diet,
        view: input.view,
        distance_km: distance,
        passengers,
        per_person_rate,
        total_emission,
        vehicle_total,
        baseline_total,
        saved_vs_baseline,
        all_modes,
    })
}
