use thiserror::Error;
use travel_emissions_core::model::EmissionsError;

#[derive(Error, Debug)]
pub enum EmissionsAppError {
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("failure estimating emissions: {source}")]
    EmissionsError {
        #[from]
        source: EmissionsError,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure writing output: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("{0}")]
    InternalError(String),
}
