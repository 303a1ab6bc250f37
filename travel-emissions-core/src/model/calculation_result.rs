use serde::{Deserialize, Serialize};

use super::{DietType, TransportMode, TripView};

/// one row of the comparison across all modes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModeEmission {
    pub mode: TransportMode,
    /// kg CO₂ for the configured distance and view
    pub emission: f64,
    /// kg CO₂ avoided relative to driving a small car alone. negative when
    /// this mode emits more than the baseline.
    pub saving: f64,
}

/// the outcome of evaluating a [`super::CalculationInput`]. all emission
/// values are in kg CO₂ and already scaled by the trip view.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalculationResult {
    pub mode: TransportMode,
    pub diet: DietType,
    pub view: TripView,
    pub distance_km: f64,
    /// passengers sharing the selected mode after resolution (1 for non-car modes)
    pub passengers: u32,
    /// kg CO₂ per kilometer per person
    pub per_person_rate: f64,
    pub total_emission: f64,
    /// emissions of the whole vehicle before dividing among passengers
    pub vehicle_total: f64,
    /// solo small car emissions for the same distance and view
    pub baseline_total: f64,
    pub saved_vs_baseline: f64,
    /// every mode, sorted by ascending emission
    pub all_modes: Vec<ModeEmission>,
}

impl CalculationResult {
    /// true when a car's emissions are divided among more than one person
    pub fn is_shared_vehicle(&self) -> bool {
        self.mode.is_car() && self.passengers > 1
    }

    /// the largest emission across all modes, used to scale charts
    pub fn max_emission(&self) -> f64 {
        self.all_modes
            .iter()
            .map(|row| row.emission)
            .fold(0.0, f64::max)
    }
}
