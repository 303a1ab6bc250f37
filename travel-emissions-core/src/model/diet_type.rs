use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{EmissionsError, TransportMode};

/// the traveler's diet, which sets the carbon cost of the food energy
/// burned on human-powered trips.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    #[default]
    AverageWestern,
    LowCarbonPlantBased,
}

impl DietType {
    pub const ALL: [DietType; 2] = [DietType::AverageWestern, DietType::LowCarbonPlantBased];

    /// kg CO₂ per kcal of food eaten
    pub fn food_emission_per_kcal(&self) -> f64 {
        match self {
            DietType::AverageWestern => 0.0025,
            DietType::LowCarbonPlantBased => 0.0012,
        }
    }

    /// food-based emissions in kg CO₂ per kilometer for a mode. modes without
    /// a calorie burn contribute zero.
    pub fn food_emissions(&self, mode: &TransportMode) -> f64 {
        match mode.kcal_per_km() {
            Some(kcal) => kcal * self.food_emission_per_kcal(),
            None => 0.0,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            DietType::AverageWestern => "average_western",
            DietType::LowCarbonPlantBased => "low_carbon_plant_based",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietType::AverageWestern => "Average Western",
            DietType::LowCarbonPlantBased => "Low-carbon / Plant-based",
        }
    }
}

impl Display for DietType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for DietType {
    type Err = EmissionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "average_western" | "western" => Ok(DietType::AverageWestern),
            "low_carbon_plant_based" | "low_carbon" | "plant_based" => {
                Ok(DietType::LowCarbonPlantBased)
            }
            _ => Err(EmissionsError::unknown_enum(format!(
                "unknown diet type '{s}', expected one of [average_western, low_carbon_plant_based]"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DietType;
    use crate::model::{InvalidInputKind, TransportMode};

    #[test]
    fn test_food_emissions_walking() {
        let western = DietType::AverageWestern.food_emissions(&TransportMode::Walking);
        let plant = DietType::LowCarbonPlantBased.food_emissions(&TransportMode::Walking);
        assert!((western - 0.2).abs() < 1e-12);
        assert!((plant - 0.096).abs() < 1e-12);
    }

    #[test]
    fn test_no_food_emissions_for_motorized_modes() {
        for diet in DietType::ALL {
            assert_eq!(diet.food_emissions(&TransportMode::SmallCar), 0.0);
            assert_eq!(diet.food_emissions(&TransportMode::ElectricTrain), 0.0);
        }
    }

    #[test]
    fn test_from_str() {
        let diet: DietType = "low-carbon-plant-based".parse().expect("should parse");
        assert_eq!(diet, DietType::LowCarbonPlantBased);
        let err = "carnivore"
            .parse::<DietType>()
            .expect_err("carnivore is not a supported diet");
        assert_eq!(err.kind(), InvalidInputKind::UnknownEnum);
    }

    #[test]
    fn test_deserialize_unknown_diet_fails() {
        let result = serde_json::from_str::<DietType>("\"keto\"");
        assert!(result.is_err());
    }
}
