//! emissions-factor model for comparing the carbon footprint of travel modes.
//!
//! combines per-mode embodied emissions with diet-dependent food emissions
//! for human-powered modes, then scales by distance, passengers and trip view.
//!
//! ```
//! use travel_emissions_core::model::{self, CalculationInput, DietType, TransportMode, TripView};
//!
//! let input = CalculationInput::new(
//!     10.0,
//!     TransportMode::ElectricCar,
//!     2,
//!     DietType::AverageWestern,
//!     TripView::PerTrip,
//! );
//! let result = model::evaluate(&input).expect("valid input");
//! assert!((result.total_emission - 1.2).abs() < 1e-9);
//! ```
pub mod model;
