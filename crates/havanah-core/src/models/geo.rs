//! Geographic primitives shared by the wizard, the catalog and the map.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A WGS84 point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, rejecting values outside the WGS84 ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, String> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(format!("Latitude out of range: {latitude}"));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(format!("Longitude out of range: {longitude}"));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

impl FromStr for Coordinate {
    type Err = String;

    /// Parses `"lat,lon"`, whitespace around either part allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| format!("Expected 'latitude,longitude', got: {s}"))?;
        let latitude = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid latitude '{}': {e}", lat.trim()))?;
        let longitude = lon
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid longitude '{}': {e}", lon.trim()))?;
        Coordinate::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Visible map viewport: a centre and the spans shown around it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// Span used when the map recentres on a looked-up place.
pub const LOOKUP_DELTA: f64 = 0.2;

/// Padding factor applied around a set of paths.
const FIT_PADDING: f64 = 1.3;

impl MapRegion {
    /// A region centred on `point` with the lookup zoom level.
    pub fn around(point: Coordinate) -> Self {
        Self {
            latitude: point.latitude,
            longitude: point.longitude,
            latitude_delta: LOOKUP_DELTA,
            longitude_delta: LOOKUP_DELTA,
        }
    }

    /// The smallest padded region containing every point, or `None` when
    /// there are no points.
    pub fn fitting<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (mut min_lat, mut max_lat) = (first.latitude, first.latitude);
        let (mut min_lng, mut max_lng) = (first.longitude, first.longitude);

        for point in points {
            min_lat = min_lat.min(point.latitude);
            max_lat = max_lat.max(point.latitude);
            min_lng = min_lng.min(point.longitude);
            max_lng = max_lng.max(point.longitude);
        }

        Some(Self {
            latitude: (max_lat + min_lat) / 2.0,
            longitude: (max_lng + min_lng) / 2.0,
            latitude_delta: (max_lat - min_lat) * FIT_PADDING,
            longitude_delta: (max_lng - min_lng) * FIT_PADDING,
        })
    }

    /// Centre of the region.
    pub fn center(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

impl Default for MapRegion {
    /// Mainland France.
    fn default() -> Self {
        Self {
            latitude: 46.603354,
            longitude: 1.888334,
            latitude_delta: 3.0,
            longitude_delta: 3.0,
        }
    }
}
