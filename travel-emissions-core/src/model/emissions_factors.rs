use serde::{Deserialize, Serialize};

use super::{DietType, TransportMode};

/// per-person emission factors (kg CO₂ per kilometer, before any passenger
/// sharing) for every transport mode under a single diet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EmissionsFactors {
    diet: DietType,
    factors: [f64; TransportMode::COUNT],
}

impl EmissionsFactors {
    /// combines each mode's embodied emissions with the food emissions of
    /// its calorie burn under this diet.
    pub fn new(diet: DietType) -> EmissionsFactors {
        let factors =
            TransportMode::ALL.map(|mode| mode.embodied_emissions() + diet.food_emissions(&mode));
        EmissionsFactors { diet, factors }
    }

    pub fn diet(&self) -> DietType {
        self.diet
    }

    pub fn get(&self, mode: &TransportMode) -> f64 {
        self.factors[mode.index()]
    }

    /// factors in table order
    pub fn iter(&self) -> impl Iterator<Item = (TransportMode, f64)> + '_ {
        TransportMode::ALL
            .iter()
            .map(move |mode| (*mode, self.get(mode)))
    }
}

#[cfg(test)]
mod tests {
    use super::EmissionsFactors;
    use crate::model::{DietType, TransportMode};

    #[test]
    fn test_factors_total_finite_non_negative() {
        for diet in DietType::ALL {
            let factors = EmissionsFactors::new(diet);
            assert_eq!(factors.iter().count(), TransportMode::COUNT);
            for (mode, value) in factors.iter() {
                assert!(value.is_finite(), "{mode} factor not finite");
                assert!(value >= 0.0, "{mode} factor negative");
            }
        }
    }

    #[test]
    fn test_standard_bike_factor() {
        let factors = EmissionsFactors::new(DietType::AverageWestern);
        // 0.02 embodied + 50 kcal/km * 0.0025 kg/kcal
        assert!((factors.get(&TransportMode::StandardBike) - 0.145).abs() < 1e-12);
    }

    #[test]
    fn test_iter_preserves_table_order() {
        let factors = EmissionsFactors::new(DietType::LowCarbonPlantBased);
        let modes = factors.iter().map(|(m, _)| m).collect::<Vec<_>>();
        assert_eq!(modes, TransportMode::ALL.to_vec());
    }
}
