pub mod chart;
mod distance_unit;
mod emissions_app_error;
mod emissions_cli;
mod estimator_config;
pub mod factor_table;
pub mod methodology;
pub mod output_ops;
mod output_format;
pub mod summary;

pub use distance_unit::DistanceUnit;
pub use emissions_app_error::EmissionsAppError;
pub use emissions_cli::{EmissionsOperation, TravelEmissionsArguments};
pub use estimator_config::EstimatorConfig;
pub use output_format::OutputFormat;
