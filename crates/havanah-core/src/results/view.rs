use crate::{
    error::{Result, TripError},
    models::{MapRegion, ProposedItinerary},
};

/// Itineraries shown after completion, with the user's pick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsView {
    itineraries: Vec<ProposedItinerary>,
    selected: Option<u32>,
}

impl ResultsView {
    pub fn new(itineraries: Vec<ProposedItinerary>) -> Self {
        Self {
            itineraries,
            selected: None,
        }
    }

    pub fn itineraries(&self) -> &[ProposedItinerary] {
        &self.itineraries
    }

    pub fn is_empty(&self) -> bool {
        self.itineraries.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&ProposedItinerary> {
        self.itineraries.iter().find(|itinerary| itinerary.id == id)
    }

    /// Marks `id` as chosen.
    pub fn select(&mut self, id: u32) -> Result<&ProposedItinerary> {
        let position = self
            .itineraries
            .iter()
            .position(|itinerary| itinerary.id == id)
            .ok_or(TripError::ItineraryNotFound { id })?;
        self.selected = Some(id);
        Ok(&self.itineraries[position])
    }

    pub fn selected(&self) -> Option<&ProposedItinerary> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Map viewport fitting every proposed path.
    pub fn region(&self) -> Option<MapRegion> {
        MapRegion::fitting(
            self.itineraries
                .iter()
                .flat_map(|itinerary| itinerary.path.iter().copied()),
        )
    }

    /// Stroke width for an itinerary's polyline; the selection is drawn
    /// thicker.
    pub fn stroke_width(&self, id: u32) -> u8 {
        if self.selected == Some(id) {
            6
        } else {
            4
        }
    }
}
