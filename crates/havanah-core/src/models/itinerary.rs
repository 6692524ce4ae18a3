//! Proposed itineraries and the detailed routes computed for them.

use serde::{Deserialize, Serialize};

use super::geo::Coordinate;

/// A candidate trip offered once the wizard is complete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProposedItinerary {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Human readable length, e.g. "5 jours"
    pub duration: String,
    /// Human readable distance, e.g. "320 km"
    pub distance: String,
    /// Named stops, in travel order
    pub highlights: Vec<String>,
    /// Coarse path, in travel order
    pub path: Vec<Coordinate>,
    pub estimated_budget: String,
    /// Stroke colour used by the map
    pub color: String,
}

impl ProposedItinerary {
    /// First point of the path.
    pub fn departure(&self) -> Option<Coordinate> {
        self.path.first().copied()
    }

    /// Last point of the path.
    pub fn destination(&self) -> Option<Coordinate> {
        self.path.last().copied()
    }

    /// Waypoints pairing each path point with its highlight name.
    pub fn waypoints(&self) -> Vec<Waypoint> {
        let last = self.path.len().saturating_sub(1);
        self.path
            .iter()
            .enumerate()
            .map(|(index, point)| Waypoint {
                id: format!("{}-{}", self.id, index),
                latitude: point.latitude,
                longitude: point.longitude,
                name: self
                    .highlights
                    .get(index)
                    .cloned()
                    .unwrap_or_else(|| format!("Étape {}", index + 1)),
                kind: match index {
                    0 => WaypointKind::Departure,
                    i if i == last => WaypointKind::Destination,
                    _ => WaypointKind::Stop,
                },
                order: index as u32,
            })
            .collect()
    }
}

/// Role of a waypoint within an itinerary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WaypointKind {
    Departure,
    Stop,
    Destination,
    Intermediate,
}

/// A named stop within an itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Waypoint {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: WaypointKind,
    pub order: u32,
}

/// A dense path with turn-by-turn instructions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailedRoute {
    pub path: Vec<Coordinate>,
    pub instructions: Vec<RouteInstruction>,
    /// Metres
    pub distance: f64,
    /// Seconds
    pub duration: f64,
    /// Positive elevation change in metres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascend: Option<f64>,
    /// Negative elevation change in metres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descend: Option<f64>,
}

/// One manoeuvre of a detailed route.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteInstruction {
    /// Metres covered by this instruction
    pub distance: f64,
    /// -3 hard left … 3 hard right, 4 finish, 6 roundabout
    pub sign: i32,
    /// Index range into the route path
    pub interval: [usize; 2],
    pub text: String,
    /// Milliseconds
    pub time: u64,
    #[serde(default)]
    pub street_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_number: Option<u32>,
}

/// Severity of a van warning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// What a van warning is about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WarningKind {
    Height,
    Weight,
    Width,
    Elevation,
    Restriction,
}

/// A route property a van driver should know about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VanWarning {
    pub kind: WarningKind,
    pub message: String,
    pub severity: Severity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
}
