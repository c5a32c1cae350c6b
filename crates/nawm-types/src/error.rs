use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from nawm operations.
#[derive(Debug, Error, Clone, PartialEq, Serialize, Deserialize)]
pub enum NawmError {
    /// Pre-dawn anchor does not come after the evening anchor.
    #[error("Pre-dawn prayer ({pre_dawn}) must come after evening prayer ({evening})")]
    InvalidAnchors {
        evening: NaiveDateTime,
        pre_dawn: NaiveDateTime,
    },

    /// Bedtime input is not a valid `HH:MM` 24-hour time.
    #[error("Invalid bedtime {input:?}: expected HH:MM in 24-hour form")]
    InvalidBedtime { input: String },

    /// Bedtime falls on or after wake time.
    #[error("Sleep window is {hours:.2} hours; bedtime must fall before wake time")]
    NonPositiveDuration { hours: f64 },

    /// Date arithmetic left the representable calendar.
    #[error("Date {date} is out of supported range")]
    DateOutOfRange { date: NaiveDate },

    /// Invalid configuration.
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Latitude or longitude outside valid bounds.
    #[error("Invalid coordinate: latitude {lat}, longitude {lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },
}

impl NawmError {
    /// Creates a `DateOutOfRange` error.
    pub fn date_out_of_range(date: NaiveDate) -> Self {
        Self::DateOutOfRange { date }
    }

    /// Creates an `InvalidConfiguration` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { reason: reason.into() }
    }

    /// Creates an `InvalidBedtime` error.
    pub fn invalid_bedtime(input: impl Into<String>) -> Self {
        Self::InvalidBedtime { input: input.into() }
    }
}

/// Failure to obtain a location fix.
///
/// The `Display` text is meant to be shown to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationError {
    /// The user refused the location permission.
    #[error("Please enable location services to get accurate prayer times.")]
    PermissionDenied,
    /// The device or runtime has no location capability.
    #[error("Geolocation is not supported by this device.")]
    Unsupported,
    /// The provider was reachable but could not produce a fix.
    #[error("Location unavailable: {0}")]
    Unavailable(String),
}
