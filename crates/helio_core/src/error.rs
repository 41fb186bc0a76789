//! Error types for solar event calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use helio_time::TimeError;

use crate::riseset_types::HorizonCondition;

/// Errors from solar noon, sunrise and sunset calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolarError {
    /// The date argument is not a calendar date or date-bearing timestamp.
    InvalidInput(TimeError),
    /// The Sun does not cross the horizon at this location on this date.
    InvalidCoordinates {
        latitude_deg: f64,
        longitude_deg: f64,
        condition: HorizonCondition,
    },
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "{e}"),
            Self::InvalidCoordinates {
                latitude_deg,
                longitude_deg,
                condition,
            } => write!(
                f,
                "could not determine sunrise/sunset for coordinates {latitude_deg}, {longitude_deg}: {condition}"
            ),
        }
    }
}

impl Error for SolarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            Self::InvalidCoordinates { .. } => None,
        }
    }
}

impl From<TimeError> for SolarError {
    fn from(e: TimeError) -> Self {
        Self::InvalidInput(e)
    }
}
