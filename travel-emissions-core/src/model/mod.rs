mod calculation_input;
mod calculation_result;
mod diet_type;
mod emissions_error;
mod emissions_factors;
pub mod emissions_model;
mod transport_mode;
mod trip_view;

pub use calculation_input::CalculationInput;
pub use calculation_result::{CalculationResult, ModeEmission};
pub use diet_type::DietType;
pub use emissions_error::{EmissionsError, InvalidInputKind};
pub use emissions_factors::EmissionsFactors;
pub use emissions_model::{build_factors, evaluate};
pub use transport_mode::TransportMode;
pub use trip_view::TripView;
