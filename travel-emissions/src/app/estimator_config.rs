use config::Config;
use serde::{Deserialize, Serialize};
use travel_emissions_core::model::{DietType, TransportMode, TripView};

use super::{DistanceUnit, EmissionsAppError, OutputFormat};

/// default values for an estimate. command line arguments take precedence
/// over these.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct EstimatorConfig {
    pub distance: f64,
    pub distance_unit: DistanceUnit,
    pub mode: TransportMode,
    pub passengers: u32,
    pub diet: DietType,
    pub view: TripView,
    pub output_format: OutputFormat,
    /// number of characters used by the longest bar in the comparison chart
    pub chart_width: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            distance: 5.0,
            distance_unit: DistanceUnit::Kilometers,
            mode: TransportMode::Walking,
            passengers: 1,
            diet: DietType::AverageWestern,
            view: TripView::PerTrip,
            output_format: OutputFormat::Text,
            chart_width: 40,
        }
    }
}

impl EstimatorConfig {
    pub const ENV_PREFIX: &'static str = "TRAVEL_EMISSIONS";

    /// reads the estimator configuration, layering (lowest to highest precedence)
    /// the built-in defaults, an optional TOML file and `TRAVEL_EMISSIONS_*`
    /// environment variables.
    pub fn load(config_file: Option<&str>) -> Result<EstimatorConfig, EmissionsAppError> {
        let file_source =
            config_file.map(|f| config::File::new(f, config::FileFormat::Toml).required(true));
        let env_source = config::Environment::with_prefix(Self::ENV_PREFIX).try_parsing(true);
        let source_name = config_file.unwrap_or("<defaults>");
        Self::build(file_source, Some(env_source), source_name)
    }

    /// reads an estimator configuration from TOML text over the built-in defaults.
    pub fn from_toml_str(contents: &str) -> Result<EstimatorConfig, EmissionsAppError> {
        let source = config::File::from_str(contents, config::FileFormat::Toml);
        Self::build(Some(source), None::<config::Environment>, "<string>")
    }

    fn build<F, E>(
        file_source: Option<F>,
        env_source: Option<E>,
        source_name: &str,
    ) -> Result<EstimatorConfig, EmissionsAppError>
    where
        F: config::Source + Send + Sync + 'static,
        E: config::Source + Send + Sync + 'static,
    {
        let defaults = Config::try_from(&EstimatorConfig::default()).map_err(|e| {
            EmissionsAppError::ConfigReadError {
                msg: String::from("failed encoding default configuration"),
                source: e,
            }
        })?;
        let mut builder = Config::builder().add_source(defaults);
        if let Some(source) = file_source {
            builder = builder.add_source(source);
        }
        if let Some(source) = env_source {
            builder = builder.add_source(source);
        }
        let config = builder
            .build()
            .map_err(|e| EmissionsAppError::ConfigReadError {
                msg: format!("failed reading '{source_name}'"),
                source: e,
            })?;
        let result = config.try_deserialize::<EstimatorConfig>().map_err(|e| {
            EmissionsAppError::ConfigReadError {
                msg: format!("failed decoding estimator configuration from '{source_name}'"),
                source: e,
            }
        })?;
        log::debug!("estimator configuration: {result:?}");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::EstimatorConfig;
    use crate::app::{DistanceUnit, OutputFormat};
    use travel_emissions_core::model::{DietType, TransportMode, TripView};

    #[test]
    fn test_empty_toml_uses_defaults() {
        let conf = EstimatorConfig::from_toml_str("").expect("empty config should load");
        assert_eq!(conf, EstimatorConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let toml = r#"
            distance = 12.5
            distance_unit = "miles"
            mode = "electric_car"
            passengers = 3
            diet = "low_carbon_plant_based"
            view = "per_year"
            output_format = "json"
        "#;
        let conf = EstimatorConfig::from_toml_str(toml).expect("config should load");
        assert_eq!(conf.distance, 12.5);
        assert_eq!(conf.distance_unit, DistanceUnit::Miles);
        assert_eq!(conf.mode, TransportMode::ElectricCar);
        assert_eq!(conf.passengers, 3);
        assert_eq!(conf.diet, DietType::LowCarbonPlantBased);
        assert_eq!(conf.view, TripView::PerYear);
        assert_eq!(conf.output_format, OutputFormat::Json);
        assert_eq!(conf.chart_width, 40, "unset values keep their default");
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result = EstimatorConfig::from_toml_str(r#"mode = "hovercraft""#);
        assert!(result.is_err());
    }
}
