//! Detailed van routes between itinerary waypoints.

use std::{fmt, str::FromStr, time::Duration};

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{Result, TripError},
    models::{Coordinate, DetailedRoute, RouteInstruction, Waypoint},
};

/// GraphHopper routing endpoint.
pub const GRAPHHOPPER_URL: &str = "https://graphhopper.com/api/1/route";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Routing profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Vehicle {
    #[default]
    Van,
    Car,
    Truck,
}

impl Vehicle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vehicle::Van => "van",
            Vehicle::Car => "car",
            Vehicle::Truck => "truck",
        }
    }
}

impl FromStr for Vehicle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "van" => Ok(Vehicle::Van),
            "car" => Ok(Vehicle::Car),
            "truck" => Ok(Vehicle::Truck),
            other => Err(format!("Unknown vehicle: {other}")),
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraints applied when routing a van.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VanRoutingOptions {
    pub vehicle: Vehicle,
    pub avoid_tolls: bool,
    pub avoid_highways: bool,
    /// Metres
    pub height: Option<f64>,
    /// Tonnes
    pub weight: Option<f64>,
    /// Metres
    pub width: Option<f64>,
}

/// Computes detailed routes through ordered waypoints.
#[async_trait]
pub trait Router: Send + Sync {
    async fn route(
        &self,
        waypoints: &[Waypoint],
        options: &VanRoutingOptions,
    ) -> Result<DetailedRoute>;
}

/// [`Router`] backed by the GraphHopper Directions API.
#[derive(Debug, Clone)]
pub struct GraphHopperRouter {
    http: Client,
    api_key: String,
    url: String,
}

impl GraphHopperRouter {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_url(api_key, GRAPHHOPPER_URL)
    }

    /// A router calling the route endpoint at `url`.
    pub fn with_url(api_key: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TripError::http("Failed to create HTTP client", e))?;

        Ok(Self {
            http,
            api_key: api_key.into(),
            url: url.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    #[serde(default)]
    paths: Vec<RoutePath>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RoutePath {
    distance: f64,
    /// Milliseconds
    time: f64,
    #[serde(default)]
    ascend: Option<f64>,
    #[serde(default)]
    descend: Option<f64>,
    points: RoutePoints,
    #[serde(default)]
    instructions: Vec<RouteInstruction>,
}

/// GeoJSON line string, `[longitude, latitude]` pairs with an optional
/// elevation.
#[derive(Debug, Deserialize)]
struct RoutePoints {
    coordinates: Vec<Vec<f64>>,
}

#[async_trait]
impl Router for GraphHopperRouter {
    async fn route(
        &self,
        waypoints: &[Waypoint],
        options: &VanRoutingOptions,
    ) -> Result<DetailedRoute> {
        let query = route_query(&self.api_key, waypoints, options)?;
        debug!(
            "Requesting {} route through {} waypoints",
            options.vehicle,
            waypoints.len()
        );

        let response = self
            .http
            .get(&self.url)
            .query(&query)
            .send()
            .await
            .map_err(|e| TripError::http("Failed to request route", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TripError::http("Failed to read route response", e))?;

        if !status.is_success() {
            let message = serde_json::from_str::<RouteResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| body.chars().take(200).collect());
            return Err(TripError::Service {
                message: format!("GraphHopper error {status}: {message}"),
            });
        }

        parse_route(&body)
    }
}

/// Query parameters for a route request. Waypoints are sent in `order`.
fn route_query(
    api_key: &str,
    waypoints: &[Waypoint],
    options: &VanRoutingOptions,
) -> Result<Vec<(&'static str, String)>> {
    if waypoints.len() < 2 {
        return Err(TripError::invalid_input("waypoints")
            .with_reason(format!("need at least 2, got {}", waypoints.len())));
    }

    let mut query = vec![
        ("key", api_key.to_string()),
        ("vehicle", options.vehicle.as_str().to_string()),
        ("points_encoded", "false".to_string()),
        ("instructions", "true".to_string()),
        ("calc_points", "true".to_string()),
        ("elevation", "true".to_string()),
    ];
    if options.avoid_tolls {
        query.push(("ch.disable", "true".to_string()));
    }
    if options.avoid_highways {
        query.push(("avoid", "motorway".to_string()));
    }
    if let Some(height) = options.height {
        query.push(("vehicle.height", height.to_string()));
    }
    if let Some(weight) = options.weight {
        query.push(("vehicle.weight", weight.to_string()));
    }
    if let Some(width) = options.width {
        query.push(("vehicle.width", width.to_string()));
    }

    let mut ordered: Vec<&Waypoint> = waypoints.iter().collect();
    ordered.sort_by_key(|waypoint| waypoint.order);
    for waypoint in ordered {
        query.push((
            "point",
            format!("{},{}", waypoint.latitude, waypoint.longitude),
        ));
    }

    Ok(query)
}

/// Converts the first path of a GraphHopper answer.
fn parse_route(body: &str) -> Result<DetailedRoute> {
    let response: RouteResponse = serde_json::from_str(body)?;
    let path = response
        .paths
        .into_iter()
        .next()
        .ok_or_else(|| TripError::Service {
            message: "Aucune route trouvée".to_string(),
        })?;

    let points = path
        .points
        .coordinates
        .iter()
        .map(|pair| match pair.as_slice() {
            [longitude, latitude, ..] => Ok(Coordinate {
                latitude: *latitude,
                longitude: *longitude,
            }),
            _ => Err(TripError::Service {
                message: format!("Malformed route point: {pair:?}"),
            }),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DetailedRoute {
        path: points,
        instructions: path.instructions,
        distance: path.distance,
        duration: path.time / 1000.0,
        ascend: path.ascend,
        descend: path.descend,
    })
}
