use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use super::EmissionsError;

/// whether emissions are reported for a single trip or for a year of commuting.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TripView {
    #[default]
    PerTrip,
    PerYear,
}

impl TripView {
    /// 5 days a week, 52 weeks a year, there and back
    pub const TRIPS_PER_YEAR: f64 = 520.0;

    pub fn multiplier(&self) -> f64 {
        match self {
            TripView::PerTrip => 1.0,
            TripView::PerYear => TripView::TRIPS_PER_YEAR,
        }
    }

    /// the unit of time emissions are reported per, "trip" or "year"
    pub fn label_suffix(&self) -> &'static str {
        match self {
            TripView::PerTrip => "trip",
            TripView::PerYear => "year",
        }
    }
}

impl Display for TripView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TripView::PerTrip => "per_trip",
            TripView::PerYear => "per_year",
        };
        write!(f, "{s}")
    }
}

impl FromStr for TripView {
    type Err = EmissionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "per_trip" | "trip" => Ok(TripView::PerTrip),
            "per_year" | "year" => Ok(TripView::PerYear),
            _ => Err(EmissionsError::unknown_enum(format!(
                "unknown trip view '{s}', expected one of [per_trip, per_year]"
            ))),
        }
    }
}
