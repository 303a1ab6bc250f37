use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use super::EmissionsError;

/// the modes of travel supported by the emissions model, listed in table order.
/// this order is used to break ties when sorting comparisons between modes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Walking,
    StandardBike,
    LightweightBike,
    EBike,
    SmallCar,
    ElectricCar,
    Bus,
    ElectricTrain,
}

impl TransportMode {
    pub const COUNT: usize = 8;

    pub const ALL: [TransportMode; TransportMode::COUNT] = [
        TransportMode::Walking,
        TransportMode::StandardBike,
        TransportMode::LightweightBike,
        TransportMode::EBike,
        TransportMode::SmallCar,
        TransportMode::ElectricCar,
        TransportMode::Bus,
        TransportMode::ElectricTrain,
    ];

    /// embodied (manufacturing, amortized) plus direct operational emissions
    /// in kg CO₂ per kilometer. for buses this is already a per-passenger value.
    pub fn embodied_emissions(&self) -> f64 {
        match self {
            TransportMode::Walking => 0.0,
            TransportMode::StandardBike => 0.02,
            TransportMode::LightweightBike => 0.016,
            TransportMode::EBike => 0.05,
            TransportMode::SmallCar => 0.44,
            TransportMode::ElectricCar => 0.24,
            TransportMode::Bus => 0.12,
            TransportMode::ElectricTrain => 0.00935,
        }
    }

    /// food energy burned by the traveler in kcal per kilometer. only
    /// human-powered (or human-assisted) modes have a calorie burn; all
    /// other modes return None and carry no food-based emissions.
    pub fn kcal_per_km(&self) -> Option<f64> {
        match self {
            TransportMode::Walking => Some(80.0),
            TransportMode::StandardBike => Some(50.0),
            TransportMode::LightweightBike => Some(40.0),
            TransportMode::EBike => Some(20.0),
            TransportMode::SmallCar
            | TransportMode::ElectricCar
            | TransportMode::Bus
            | TransportMode::ElectricTrain => None,
        }
    }

    /// true for the modes where the vehicle's emissions can be shared among passengers
    pub fn is_car(&self) -> bool {
        matches!(self, TransportMode::SmallCar | TransportMode::ElectricCar)
    }

    /// position of this mode in table order
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// snake_case identifier, matching the serialized form
    pub fn id(&self) -> &'static str {
        match self {
            TransportMode::Walking => "walking",
            TransportMode::StandardBike => "standard_bike",
            TransportMode::LightweightBike => "lightweight_bike",
            TransportMode::EBike => "e_bike",
            TransportMode::SmallCar => "small_car",
            TransportMode::ElectricCar => "electric_car",
            TransportMode::Bus => "bus",
            TransportMode::ElectricTrain => "electric_train",
        }
    }

    /// human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Walking => "Walking (including food fuel)",
            TransportMode::StandardBike => "Standard Bike",
            TransportMode::LightweightBike => "Lightweight Bike",
            TransportMode::EBike => "E-Bike",
            TransportMode::SmallCar => "Small Car",
            TransportMode::ElectricCar => "Electric Car",
            TransportMode::Bus => "Bus (per passenger)",
            TransportMode::ElectricTrain => "Local Electric Train",
        }
    }
}

impl Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for TransportMode {
    type Err = EmissionsError;

    /// accepts snake_case or kebab-case identifiers as well as the display label,
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        TransportMode::ALL
            .into_iter()
            .find(|m| m.id() == normalized || m.label().to_lowercase() == s.trim().to_lowercase())
            .ok_or_else(|| {
                let valid = TransportMode::ALL.iter().map(|m| m.id()).collect::<Vec<_>>();
                EmissionsError::unknown_enum(format!(
                    "unknown transport mode '{s}', expected one of [{}]",
                    valid.join(", ")
                ))
            })
    }
}
