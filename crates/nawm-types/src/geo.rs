use serde::{Deserialize, Serialize};

use crate::NawmError;

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl GeoCoordinate {
    /// Creates a coordinate, rejecting latitude outside [-90, 90] or
    /// longitude outside [-180, 180].
    pub fn new(lat: f64, lng: f64) -> Result<Self, NawmError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(NawmError::InvalidCoordinate { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Creates a coordinate without range checks.
    pub fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
