//! GeoJSON `Point` locations.
//!
//! Both projects and field reports carry a point in GeoJSON convention:
//! `{ "type": "Point", "coordinates": [longitude, latitude] }`. The array
//! order is load-bearing for the map clients; it must survive a round trip
//! through the store unchanged.

use serde::{Deserialize, Serialize};

/// The only GeoJSON geometry kind this system uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeoJsonType {
    Point,
}

/// A GeoJSON point, `[longitude, latitude]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type")]
    pub geometry_type: GeoJsonType,
    pub coordinates: [f64; 2],
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            geometry_type: GeoJsonType::Point,
            coordinates: [longitude, latitude],
        }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    /// Check coordinate ranges: longitude in [-180, 180], latitude in
    /// [-90, 90], both finite.
    pub fn validate(&self) -> Result<(), String> {
        let [lon, lat] = self.coordinates;
        if !lon.is_finite() || !lat.is_finite() {
            return Err("coordinates must be finite numbers".into());
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(format!("longitude {lon} out of range [-180, 180]"));
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!("latitude {lat} out of range [-90, 90]"));
        }
        Ok(())
    }
}
