use serde::{Deserialize, Serialize};

use super::{DietType, EmissionsError, TransportMode, TripView};

/// the parameters of a single emissions estimate.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalculationInput {
    pub distance_km: f64,
    pub mode: TransportMode,
    /// people sharing the vehicle. only meaningful for car modes.
    pub passengers: u32,
    pub diet: DietType,
    pub view: TripView,
}

impl CalculationInput {
    pub const MIN_PASSENGERS: u32 = 1;
    pub const MAX_PASSENGERS: u32 = 5;

    pub fn new(
        distance_km: f64,
        mode: TransportMode,
        passengers: u32,
        diet: DietType,
        view: TripView,
    ) -> CalculationInput {
        CalculationInput {
            distance_km,
            mode,
            passengers,
            diet,
            view,
        }
    }

    /// checks the input ranges and resolves the number of passengers sharing
    /// the trip's emissions, which is always 1 for modes other than cars.
    ///
    /// # Returns
    ///
    /// the passenger count to divide the selected mode's emissions by, or an
    /// error if the distance is negative or not finite, or the passenger count
    /// falls outside of [1, 5].
    pub fn validate(&self) -> Result<u32, EmissionsError> {
        if !self.distance_km.is_finite() || self.distance_km < 0.0 {
            return Err(EmissionsError::out_of_range(format!(
                "distance must be a non-negative number of kilometers, found {}",
                self.distance_km
            )));
        }
        if !(Self::MIN_PASSENGERS..=Self::MAX_PASSENGERS).contains(&self.passengers) {
            return Err(EmissionsError::out_of_range(format!(
                "passengers must be in [{}, {}], found {}",
                Self::MIN_PASSENGERS,
                Self::MAX_PASSENGERS,
                self.passengers
            )));
        }
        if self.mode.is_car() {
            Ok(self.passengers)
        } else {
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CalculationInput;
    use crate::model::{DietType, InvalidInputKind, TransportMode, TripView};

    fn input(distance_km: f64, mode: TransportMode, passengers: u32) -> CalculationInput {
        CalculationInput::new(
            distance_km,
            mode,
            passengers,
            DietType::AverageWestern,
            TripView::PerTrip,
        )
    }

    #[test]
    fn test_passengers_forced_to_one_for_non_car() {
        let resolved = input(3.0, TransportMode::Bus, 4)
            .validate()
            .expect("input is valid");
        assert_eq!(resolved, 1);
    }

    #[test]
    fn test_passengers_kept_for_car() {
        let resolved = input(3.0, TransportMode::ElectricCar, 4)
            .validate()
            .expect("input is valid");
        assert_eq!(resolved, 4);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let cases = [
            input(-0.5, TransportMode::Walking, 1),
            input(f64::NAN, TransportMode::Walking, 1),
            input(f64::INFINITY, TransportMode::SmallCar, 1),
            input(1.0, TransportMode::SmallCar, 0),
            input(1.0, TransportMode::SmallCar, 6),
            input(1.0, TransportMode::Walking, 0),
        ];
        for case in cases {
            let err = case.validate().expect_err("input should be rejected");
            assert_eq!(err.kind(), InvalidInputKind::OutOfRange, "{case:?}");
        }
    }
}
