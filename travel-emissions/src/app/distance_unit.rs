use std::fmt::Display;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::Length,
    length::{kilometer, mile},
};

/// unit of a distance provided by the user
#[derive(Serialize, Deserialize, ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    pub fn to_length(&self, value: f64) -> Length {
        match self {
            DistanceUnit::Kilometers => Length::new::<kilometer>(value),
            DistanceUnit::Miles => Length::new::<mile>(value),
        }
    }

    /// converts a distance in this unit to kilometers, the unit of the emissions model
    pub fn to_kilometers(&self, value: f64) -> f64 {
        self.to_length(value).get::<kilometer>()
    }
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistanceUnit::Kilometers => write!(f, "km"),
            DistanceUnit::Miles => write!(f, "mi"),
        }
    }
}
