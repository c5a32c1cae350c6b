//! Location providers.
//!
//! The planner asks for a location exactly once. Providers here answer that
//! request from a fixed coordinate or, with the `async` feature, from an IP
//! geolocation service.

pub mod geo;

use nawm_types::{GeoCoordinate, LocationError};

pub use geo::LocationInfo;
#[cfg(feature = "async")]
pub use geo::IpLocationProvider;

/// One-shot location request.
pub trait LocationProvider: std::fmt::Debug {
    fn request_location(&self) -> Result<GeoCoordinate, LocationError>;
}

/// Always answers with the same coordinate, e.g. one the user typed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticLocation(pub GeoCoordinate);

impl LocationProvider for StaticLocation {
    fn request_location(&self) -> Result<GeoCoordinate, LocationError> {
        Ok(self.0)
    }
}

/// Platform without any location capability.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl LocationProvider for Unsupported {
    fn request_location(&self) -> Result<GeoCoordinate, LocationError> {
        Err(LocationError::Unsupported)
    }
}
