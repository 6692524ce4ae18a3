//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{ProposedItinerary, TripSummary, VanWarning};

/// Newtype wrapper for displaying saved trip listings.
pub struct TripSummaries(pub Vec<TripSummary>);

impl TripSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of trips in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the trip summary at the given index.
    pub fn get(&self, index: usize) -> Option<&TripSummary> {
        self.0.get(index)
    }

    /// Get an iterator over the trip summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, TripSummary> {
        self.0.iter()
    }
}

impl Index<usize> for TripSummaries {
    type Output = TripSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for TripSummaries {
    type Item = TripSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TripSummaries {
    type Item = &'a TripSummary;
    type IntoIter = std::slice::Iter<'a, TripSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TripSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No trips found.")
        } else {
            for trip in &self.0 {
                write!(f, "{trip}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying proposed itineraries.
pub struct Itineraries(pub Vec<ProposedItinerary>);

impl Itineraries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProposedItinerary> {
        self.0.iter()
    }
}

impl fmt::Display for Itineraries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No itineraries found.")
        } else {
            for itinerary in &self.0 {
                write!(f, "{itinerary}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the warnings attached to a route.
pub struct VanWarnings(pub Vec<VanWarning>);

impl VanWarnings {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for VanWarnings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No van warnings for this route.");
        }
        writeln!(f, "## Van warnings")?;
        writeln!(f)?;
        for warning in &self.0 {
            write!(f, "{warning}")?;
        }
        Ok(())
    }
}
