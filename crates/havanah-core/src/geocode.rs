//! Place-name lookup for the departure question.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{Result, TripError},
    models::Coordinate,
};

/// Public Nominatim instance.
pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Identifies the application to Nominatim, whose usage policy requires it.
pub const USER_AGENT: &str = "HavanahApp/1.0 (contact@havanah.app)";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Resolves free text to a point.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Returns the best match for `query`.
    ///
    /// # Errors
    ///
    /// `TripError::PlaceNotFound` when nothing matches.
    async fn search(&self, query: &str) -> Result<Coordinate>;
}

/// [`Geocoder`] backed by the Nominatim search API.
#[derive(Debug, Clone)]
pub struct NominatimGeocoder {
    http: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl NominatimGeocoder {
    /// A geocoder querying the public instance.
    pub fn new() -> Result<Self> {
        Self::with_base_url(NOMINATIM_URL)
    }

    /// A geocoder querying the instance at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TripError::http("Failed to create HTTP client", e))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn search(&self, query: &str) -> Result<Coordinate> {
        let query = query.trim();
        if query.is_empty() {
            return Err(TripError::invalid_input("query").with_reason("search text is empty"));
        }

        let url = format!("{}/search", self.base_url);
        debug!("Geocoding '{query}' via {url}");

        let response = self
            .http
            .get(&url)
            .query(&[("format", "json"), ("q", query)])
            .send()
            .await
            .map_err(|e| TripError::http(format!("Failed to search for '{query}'"), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TripError::Service {
                message: format!(
                    "Nominatim error {status}: {}",
                    body.chars().take(200).collect::<String>()
                ),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| TripError::http("Failed to read Nominatim response", e))?;
        first_place(query, &body)
    }
}

/// Picks the first hit of a Nominatim JSON answer.
fn first_place(query: &str, body: &str) -> Result<Coordinate> {
    let places: Vec<NominatimPlace> = serde_json::from_str(body)?;
    let place = places.first().ok_or_else(|| TripError::PlaceNotFound {
        query: query.to_string(),
    })?;

    let parse = |field: &str, raw: &str| -> Result<f64> {
        raw.parse::<f64>().map_err(|e| TripError::Service {
            message: format!("Nominatim returned an invalid {field} '{raw}': {e}"),
        })
    };
    let point = Coordinate::new(parse("latitude", &place.lat)?, parse("longitude", &place.lon)?)
        .map_err(|message| TripError::Service { message })?;

    debug!(
        "Resolved '{query}' to {point} ({})",
        place.display_name.as_deref().unwrap_or("unnamed")
    );
    Ok(point)
}
