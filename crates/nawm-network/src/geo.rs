//! IP-based Geolocation.
//!
//! Resolves the caller's approximate position through an `ip-api.com`
//! compatible JSON endpoint.

use nawm_types::GeoCoordinate;
#[cfg(feature = "async")]
use nawm_types::LocationError;
#[cfg(feature = "async")]
use serde::Deserialize;

/// Location information with coordinates and place name.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationInfo {
    /// Geographic coordinates.
    pub coords: GeoCoordinate,
    /// City name (if available).
    pub city: Option<String>,
    /// Region/Province name (if available).
    pub region: Option<String>,
    /// Country name (if available).
    pub country: Option<String>,
}

impl LocationInfo {
    /// Returns formatted location string (e.g., "Yogyakarta, Yogyakarta, Indonesia").
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [
            self.city.as_deref(),
            self.region.as_deref(),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .collect();

        if parts.is_empty() {
            format!("{:.4}°, {:.4}°", self.coords.lat, self.coords.lng)
        } else {
            parts.join(", ")
        }
    }
}

/// Default lookup endpoint.
#[cfg(feature = "async")]
pub const DEFAULT_ENDPOINT: &str = "http://ip-api.com/json/";

/// Looks up the caller's location from their public IP.
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub struct IpLocationProvider {
    client: reqwest::Client,
    endpoint: String,
}

#[cfg(feature = "async")]
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    country: Option<String>,
}

#[cfg(feature = "async")]
impl Default for IpLocationProvider {
    fn default() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }
}

#[cfg(feature = "async")]
impl IpLocationProvider {
    /// Uses a custom endpoint, e.g. a self-hosted mirror.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Performs the lookup.
    ///
    /// # Errors
    /// `LocationError::Unavailable` on transport failure, a `fail` status, or
    /// a response without usable coordinates.
    ///
    /// # Example
    /// ```rust,no_run
    /// use nawm_network::IpLocationProvider;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let info = IpLocationProvider::default().locate().await.unwrap();
    ///     println!("Location: {}", info.display_name());
    /// }
    /// ```
    pub async fn locate(&self) -> Result<LocationInfo, LocationError> {
        tracing::debug!(endpoint = %self.endpoint, "requesting IP geolocation");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| LocationError::Unavailable(format!("Geolocation request failed: {}", e)))?;

        let data: IpApiResponse = response
            .json()
            .await
            .map_err(|e| {
                LocationError::Unavailable(format!("Failed to parse geolocation response: {}", e))
            })?;

        if data.status != "success" {
            let reason = data.message.unwrap_or_else(|| data.status.clone());
            tracing::warn!(%reason, "geolocation lookup rejected");
            return Err(LocationError::Unavailable(reason));
        }

        let (lat, lon) = data
            .lat
            .zip(data.lon)
            .ok_or_else(|| LocationError::Unavailable("Response carried no coordinates".into()))?;
        let coords =
            GeoCoordinate::new(lat, lon).map_err(|e| LocationError::Unavailable(e.to_string()))?;

        Ok(LocationInfo {
            coords,
            city: data.city,
            region: data.region_name,
            country: data.country,
        })
    }
}
