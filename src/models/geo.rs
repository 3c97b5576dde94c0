use serde::{Deserialize, Serialize};

/// A geographic coordinate pair from the gazetteer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A stop successfully resolved to a coordinate, carrying its 1-based
/// display index (the number painted on its pin).
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStop {
    pub lat: f64,
    pub lng: f64,
    pub location: String,
    pub index: usize,
}

impl ResolvedStop {
    #[must_use]
    pub fn new(point: GeoPoint, location: impl Into<String>, index: usize) -> Self {
        Self {
            lat: point.lat,
            lng: point.lng,
            location: location.into(),
            index,
        }
    }
}
