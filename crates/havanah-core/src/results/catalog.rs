//! Sources of proposed itineraries.

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{Coordinate, ProposedItinerary, TripPreferences},
};

/// Proposes itineraries for a completed questionnaire.
///
/// Matching answers to itineraries is entirely up to the implementation.
#[async_trait]
pub trait ItineraryCatalog: Send + Sync {
    async fn propose(&self, preferences: &TripPreferences) -> Result<Vec<ProposedItinerary>>;
}

/// Hand-picked itineraries around Montpellier, returned for any answers.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    itineraries: Vec<ProposedItinerary>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self {
            itineraries: default_itineraries(),
        }
    }

    pub fn itineraries(&self) -> &[ProposedItinerary] {
        &self.itineraries
    }

    /// Looks an itinerary up by ID.
    pub fn get(&self, id: u32) -> Option<&ProposedItinerary> {
        self.itineraries.iter().find(|itinerary| itinerary.id == id)
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItineraryCatalog for StaticCatalog {
    async fn propose(&self, _preferences: &TripPreferences) -> Result<Vec<ProposedItinerary>> {
        Ok(self.itineraries.clone())
    }
}

fn point(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate {
        latitude,
        longitude,
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn default_itineraries() -> Vec<ProposedItinerary> {
    vec![
        ProposedItinerary {
            id: 1,
            title: "Côte Méditerranéenne".to_string(),
            description: "Découvrez les plus belles plages de l'Hérault".to_string(),
            duration: "5 jours".to_string(),
            distance: "320 km".to_string(),
            highlights: strings(&["Montpellier", "Palavas", "Sète", "Cap d'Agde"]),
            path: vec![
                point(43.6108, 3.8767),
                point(43.5285, 3.9310),
                point(43.4023, 3.6967),
                point(43.3089, 3.4814),
            ],
            estimated_budget: "200-300€".to_string(),
            color: "#FF9900".to_string(),
        },
        ProposedItinerary {
            id: 2,
            title: "Arrière-pays & Nature".to_string(),
            description: "Immersion nature entre gorges et montagnes".to_string(),
            duration: "7 jours".to_string(),
            distance: "450 km".to_string(),
            highlights: strings(&["Montpellier", "Saint-Guilhem", "Millau", "Cévennes"]),
            path: vec![
                point(43.6108, 3.8767),
                point(43.7314, 3.5483),
                point(44.0993, 3.0808),
                point(44.1944, 3.8333),
            ],
            estimated_budget: "150-250€".to_string(),
            color: "#4CAF50".to_string(),
        },
        ProposedItinerary {
            id: 3,
            title: "Circuit Culturel".to_string(),
            description: "Découverte du patrimoine historique régional".to_string(),
            duration: "6 jours".to_string(),
            distance: "380 km".to_string(),
            highlights: strings(&["Montpellier", "Nîmes", "Arles", "Avignon"]),
            path: vec![
                point(43.6108, 3.8767),
                point(43.8367, 4.3601),
                point(43.6761, 4.6309),
                point(43.9493, 4.8059),
            ],
            estimated_budget: "250-350€".to_string(),
            color: "#2196F3".to_string(),
        },
    ]
}
