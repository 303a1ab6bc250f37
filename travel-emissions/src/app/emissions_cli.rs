use clap::{Parser, Subcommand};
use travel_emissions_core::model::{self, CalculationInput, DietType, TransportMode, TripView};

use super::{
    factor_table, methodology, output_ops, summary, DistanceUnit, EmissionsAppError,
    EstimatorConfig, OutputFormat,
};

/// command line tool estimating the carbon emissions of a trip by transport mode
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TravelEmissionsArguments {
    /// TOML file with default estimate parameters
    #[arg(long, global = true)]
    pub config_file: Option<String>,
    /// select the operation to run
    #[command(subcommand)]
    pub op: EmissionsOperation,
}

impl TravelEmissionsArguments {
    /// loads the configuration and runs the selected operation
    pub fn run(&self) -> Result<String, EmissionsAppError> {
        let conf = EstimatorConfig::load(self.config_file.as_deref())?;
        self.op.run(&conf)
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum EmissionsOperation {
    /// estimates the emissions of a trip and compares them against all modes
    Estimate {
        /// travel distance
        #[arg(short, long, allow_negative_numbers = true)]
        distance: Option<f64>,
        /// unit of the travel distance
        #[arg(short, long, value_enum)]
        unit: Option<DistanceUnit>,
        /// transport mode, such as walking, e_bike, small_car, bus
        #[arg(short, long)]
        mode: Option<TransportMode>,
        /// people sharing the car (1-5), ignored for other modes
        #[arg(short, long)]
        passengers: Option<u32>,
        /// diet of the traveler, average_western or low_carbon_plant_based
        #[arg(long)]
        diet: Option<DietType>,
        /// report emissions per_trip or per_year
        #[arg(long)]
        view: Option<TripView>,
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// lists the emission factor of every mode for a diet
    Factors {
        #[arg(long)]
        diet: Option<DietType>,
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// describes the methodology and data sources
    Methodology {
        #[arg(long)]
        diet: Option<DietType>,
    },
}

impl EmissionsOperation {
    pub fn run(&self, conf: &EstimatorConfig) -> Result<String, EmissionsAppError> {
        match self {
            EmissionsOperation::Estimate {
                distance,
                unit,
                mode,
                passengers,
                diet,
                view,
                format,
            } => {
                let unit = unit.unwrap_or(conf.distance_unit);
                let distance = distance.unwrap_or(conf.distance);
                let input = CalculationInput::new(
                    unit.to_kilometers(distance),
                    mode.unwrap_or(conf.mode),
                    passengers.unwrap_or(conf.passengers),
                    diet.unwrap_or(conf.diet),
                    view.unwrap_or(conf.view),
                );
                let result = model::evaluate(&input)?;
                log::info!(
                    "{} over {distance} {unit}: {:.3} kg CO₂ per {}",
                    result.mode,
                    result.total_emission,
                    result.view.label_suffix()
                );
                match format.unwrap_or(conf.output_format) {
                    OutputFormat::Text => {
                        Ok(summary::render_estimate(&result, conf.chart_width))
                    }
                    OutputFormat::Json => output_ops::write_json(&result),
                    OutputFormat::Csv => {
                        output_ops::write_csv(&summary::comparison_rows(&result))
                    }
                }
            }
            EmissionsOperation::Factors { diet, format } => {
                let diet = diet.unwrap_or(conf.diet);
                match format.unwrap_or(conf.output_format) {
                    OutputFormat::Text => Ok(factor_table::render_factor_table(diet)),
                    OutputFormat::Json => {
                        output_ops::write_json(&factor_table::factor_rows(diet))
                    }
                    OutputFormat::Csv => output_ops::write_csv(&factor_table::factor_rows(diet)),
                }
            }
            EmissionsOperation::Methodology { diet } => {
                Ok(methodology::render_methodology(diet.unwrap_or(conf.diet)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TravelEmissionsArguments;
    use crate::app::{EmissionsAppError, EstimatorConfig};
    use clap::Parser;
    use travel_emissions_core::model::{CalculationResult, InvalidInputKind, TransportMode};

    fn run_args(args: &[&str]) -> Result<String, EmissionsAppError> {
        let parsed = TravelEmissionsArguments::try_parse_from(args)
            .expect("test invariant failed: arguments should parse");
        parsed.op.run(&EstimatorConfig::default())
    }

    #[test]
    fn test_estimate_json() {
        let output = run_args(&[
            "travel_emissions",
            "estimate",
            "--distance",
            "10",
            "--mode",
            "electric-car",
            "--passengers",
            "2",
            "--format",
            "json",
        ])
        .expect("estimate should succeed");
        let result: CalculationResult =
            serde_json::from_str(&output).expect("output should be a CalculationResult");
        assert_eq!(result.mode, TransportMode::ElectricCar);
        assert_eq!(result.passengers, 2);
        assert!((result.total_emission - 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_text_uses_config_defaults() {
        let output = run_args(&["travel_emissions", "estimate"]).expect("estimate should succeed");
        assert!(output.starts_with("Estimated Emissions: 1.00 kg CO₂"));
        assert!(output.contains("Carbon Emissions by Transport Mode (5.0 km per trip)"));
    }

    #[test]
    fn test_estimate_miles() {
        let output = run_args(&[
            "travel_emissions",
            "estimate",
            "--distance",
            "1",
            "--unit",
            "miles",
            "--mode",
            "small_car",
            "--format",
            "json",
        ])
        .expect("estimate should succeed");
        let result: CalculationResult =
            serde_json::from_str(&output).expect("output should be a CalculationResult");
        assert!((result.distance_km - 1.609344).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_csv() {
        let output = run_args(&[
            "travel_emissions",
            "estimate",
            "--mode",
            "bus",
            "--view",
            "per_year",
            "--format",
            "csv",
        ])
        .expect("estimate should succeed");
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), TransportMode::COUNT + 1);
        assert_eq!(lines[0], "mode,label,emission_kg,saving_kg,selected");
        assert!(lines.iter().any(|l| l.starts_with("bus,") && l.ends_with(",true")));
    }

    #[test]
    fn test_estimate_rejects_negative_distance() {
        let err = run_args(&["travel_emissions", "estimate", "--distance", "-2"])
            .expect_err("negative distance should be rejected");
        match err {
            EmissionsAppError::EmissionsError { source } => {
                assert_eq!(source.kind(), InvalidInputKind::OutOfRange)
            }
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_estimate_rejects_too_many_passengers() {
        let result = run_args(&[
            "travel_emissions",
            "estimate",
            "--mode",
            "small_car",
            "--passengers",
            "6",
        ]);
        assert!(matches!(
            result,
            Err(EmissionsAppError::EmissionsError { .. })
        ));
    }

    #[test]
    fn test_unknown_mode_fails_to_parse() {
        let result = TravelEmissionsArguments::try_parse_from([
            "travel_emissions",
            "estimate",
            "--mode",
            "rocket",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_factors_csv() {
        let output = run_args(&["travel_emissions", "factors", "--format", "csv"])
            .expect("factors should succeed");
        let lines = output.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), TransportMode::COUNT + 1);
        assert!(lines[1].starts_with("walking,Walking (including food fuel),0.0,80.0,"));
    }

    #[test]
    fn test_methodology() {
        let output = run_args(&["travel_emissions", "methodology", "--diet", "low_carbon"])
            .expect("methodology should succeed");
        assert!(output.contains("Low-carbon / Plant-based diet"));
    }
}
