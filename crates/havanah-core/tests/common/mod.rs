#![allow(dead_code)]

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use havanah_core::{
    models::{AnswerKey, Coordinate, ProposedItinerary, TripPreferences},
    wizard::{QuestionKind, Step, Wizard},
    Geocoder, ItineraryCatalog, Result, TripBook, TripBookBuilder, TripError,
};
use jiff::civil::date;
use tempfile::TempDir;
use tokio::sync::Notify;

/// Helper function to create a test trip book
pub async fn create_test_book() -> (TempDir, TripBook) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let book = TripBookBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create trip book");
    (temp_dir, book)
}

pub fn montpellier() -> Coordinate {
    Coordinate::new(43.6108, 3.8767).expect("valid coordinate")
}

/// Geocoder answering every query with the same point.
pub struct FixedGeocoder(pub Coordinate);

#[async_trait]
impl Geocoder for FixedGeocoder {
    async fn search(&self, query: &str) -> Result<Coordinate> {
        if query == "nowhere" {
            return Err(TripError::PlaceNotFound {
                query: query.to_string(),
            });
        }
        Ok(self.0)
    }
}

/// Catalog that fails every request.
pub struct FailingCatalog;

#[async_trait]
impl ItineraryCatalog for FailingCatalog {
    async fn propose(&self, _: &TripPreferences) -> Result<Vec<ProposedItinerary>> {
        Err(TripError::Service {
            message: "catalog unavailable".to_string(),
        })
    }
}

/// Geocoder that only answers once released.
pub struct GatedGeocoder {
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
    pub point: Coordinate,
}

#[async_trait]
impl Geocoder for GatedGeocoder {
    async fn search(&self, _query: &str) -> Result<Coordinate> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(self.point)
    }
}

/// Catalog that never answers.
pub struct StalledCatalog;

#[async_trait]
impl ItineraryCatalog for StalledCatalog {
    async fn propose(&self, _: &TripPreferences) -> Result<Vec<ProposedItinerary>> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(Vec::new())
    }
}

/// Answers the precise-date branch with an owned van and stops on the
/// companions step.
pub fn answer_until_companions(wizard: &mut Wizard) {
    wizard
        .select_single(AnswerKey::DateType, "precise")
        .expect("Failed to select date type");
    wizard.advance().expect("Failed to enter dates");
    wizard
        .set_date_range(date(2030, 7, 1), Some(date(2030, 7, 8)))
        .expect("Failed to set range");
    wizard.advance().expect("Failed to reach departure");
    wizard
        .set_departure(montpellier())
        .expect("Failed to set departure");
    wizard.advance().expect("Failed to reach van");
    wizard
        .select_single(AnswerKey::Van, "own")
        .expect("Failed to select van");
    wizard.advance().expect("Failed to reach companions");
    assert_eq!(wizard.step(), Step::Companions);
}

/// Answers every question from companions on with its first option and
/// stops on the last step.
pub fn answer_remaining(wizard: &mut Wizard) {
    while wizard.step() != Step::LAST {
        let question = wizard.question().expect("step has a question");
        let first = question.options[0].value;
        match question.kind {
            QuestionKind::MultiChoice => {
                wizard
                    .toggle_multi(question.key, first)
                    .expect("Failed to toggle");
            }
            _ => wizard
                .select_single(question.key, first)
                .expect("Failed to select"),
        }
        wizard.advance().expect("Failed to advance");
    }
    assert_eq!(wizard.step(), Step::Constraints);
}
