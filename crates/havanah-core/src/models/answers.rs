//! Answer storage for the trip wizard and the frozen preference bundle.

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    str::FromStr,
};

use jiff::{civil::Date, ToSpan};
use serde::{Deserialize, Serialize};

use super::geo::Coordinate;
use crate::{
    error::{Result, TripError},
    wizard::questions::{DATE_APPROX, DATE_PRECISE},
};

/// Stable identifier of a wizard question.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AnswerKey {
    DateType,
    Range,
    ApproxDays,
    Departure,
    Van,
    Companions,
    Distance,
    Rhythm,
    Places,
    Ambiance,
    Budget,
    SpotTypes,
    Activities,
    Eco,
    Constraints,
}

impl AnswerKey {
    /// Every key, in questionnaire order.
    pub const ALL: [AnswerKey; 15] = [
        AnswerKey::DateType,
        AnswerKey::Range,
        AnswerKey::ApproxDays,
        AnswerKey::Departure,
        AnswerKey::Van,
        AnswerKey::Companions,
        AnswerKey::Distance,
        AnswerKey::Rhythm,
        AnswerKey::Places,
        AnswerKey::Ambiance,
        AnswerKey::Budget,
        AnswerKey::SpotTypes,
        AnswerKey::Activities,
        AnswerKey::Eco,
        AnswerKey::Constraints,
    ];

    /// Wire name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerKey::DateType => "dateType",
            AnswerKey::Range => "range",
            AnswerKey::ApproxDays => "approxDays",
            AnswerKey::Departure => "departure",
            AnswerKey::Van => "van",
            AnswerKey::Companions => "companions",
            AnswerKey::Distance => "distance",
            AnswerKey::Rhythm => "rhythm",
            AnswerKey::Places => "places",
            AnswerKey::Ambiance => "ambiance",
            AnswerKey::Budget => "budget",
            AnswerKey::SpotTypes => "spotTypes",
            AnswerKey::Activities => "activities",
            AnswerKey::Eco => "eco",
            AnswerKey::Constraints => "constraints",
        }
    }
}

impl FromStr for AnswerKey {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AnswerKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown question key: {s}"))
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar selection. `end` stays empty until the second day is picked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: Date,
    pub end: Option<Date>,
}

impl DateRange {
    /// A range with only its first day chosen.
    pub fn starting(start: Date) -> Self {
        Self { start, end: None }
    }

    /// A closed range. Fails when `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<Self> {
        if start > end {
            return Err(TripError::invalid_input(AnswerKey::Range.as_str())
                .with_reason(format!("start {start} is after end {end}")));
        }
        Ok(Self {
            start,
            end: Some(end),
        })
    }

    /// Both endpoints are set.
    pub fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    /// Number of days from start to end, when the range is complete.
    pub fn length_days(&self) -> Option<u32> {
        let end = self.end?;
        let days = (end - self.start).get_days();
        u32::try_from(days).ok()
    }

    /// Every calendar day covered by the range, both ends included. An open
    /// range yields only its start.
    pub fn days(&self) -> impl Iterator<Item = Date> {
        let last = self.end.unwrap_or(self.start);
        self.start
            .series(1.day())
            .take_while(move |day| *day <= last)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{} → {}", self.start, end),
            None => write!(f, "{} → …", self.start),
        }
    }
}

/// A recorded answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum AnswerValue {
    Single(String),
    Multi(BTreeSet<String>),
    Range(DateRange),
    Count(u32),
    Point(Coordinate),
}

impl AnswerValue {
    /// Whether the value satisfies a required question.
    pub fn is_answered(&self) -> bool {
        match self {
            AnswerValue::Single(value) => !value.is_empty(),
            AnswerValue::Multi(values) => !values.is_empty(),
            AnswerValue::Range(range) => range.is_complete(),
            AnswerValue::Count(_) | AnswerValue::Point(_) => true,
        }
    }
}

/// Answers collected so far, keyed by question.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Answers(BTreeMap<AnswerKey, AnswerValue>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: AnswerKey) -> Option<&AnswerValue> {
        self.0.get(&key)
    }

    pub fn contains(&self, key: AnswerKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Whether `key` holds a value that satisfies a required question.
    pub fn is_answered(&self, key: AnswerKey) -> bool {
        self.get(key).is_some_and(AnswerValue::is_answered)
    }

    pub fn single(&self, key: AnswerKey) -> Option<&str> {
        match self.get(key) {
            Some(AnswerValue::Single(value)) => Some(value),
            _ => None,
        }
    }

    pub fn multi(&self, key: AnswerKey) -> Option<&BTreeSet<String>> {
        match self.get(key) {
            Some(AnswerValue::Multi(values)) => Some(values),
            _ => None,
        }
    }

    pub fn range(&self) -> Option<&DateRange> {
        match self.get(AnswerKey::Range) {
            Some(AnswerValue::Range(range)) => Some(range),
            _ => None,
        }
    }

    pub fn count(&self, key: AnswerKey) -> Option<u32> {
        match self.get(key) {
            Some(AnswerValue::Count(count)) => Some(*count),
            _ => None,
        }
    }

    pub fn point(&self, key: AnswerKey) -> Option<Coordinate> {
        match self.get(key) {
            Some(AnswerValue::Point(point)) => Some(*point),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AnswerKey, &AnswerValue)> {
        self.0.iter()
    }

    pub(crate) fn insert(&mut self, key: AnswerKey, value: AnswerValue) {
        self.0.insert(key, value);
    }

    pub(crate) fn remove(&mut self, key: AnswerKey) -> Option<AnswerValue> {
        self.0.remove(&key)
    }

    /// Adds `value` to a multi-choice answer, or removes it if present.
    /// Returns whether the value is selected afterwards. Removing the last
    /// value drops the answer altogether.
    pub(crate) fn toggle(&mut self, key: AnswerKey, value: &str) -> bool {
        let mut values = match self.0.remove(&key) {
            Some(AnswerValue::Multi(values)) => values,
            _ => BTreeSet::new(),
        };
        let selected = if values.remove(value) {
            false
        } else {
            values.insert(value.to_string());
            true
        };
        if !values.is_empty() {
            self.0.insert(key, AnswerValue::Multi(values));
        }
        selected
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

/// When the trip happens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TripDates {
    /// Fixed departure and return days.
    Precise { start: Date, end: Date },
    /// A number of days somewhere inside a period.
    Approximate { start: Date, end: Date, days: u32 },
}

impl TripDates {
    pub fn start(&self) -> Date {
        match self {
            TripDates::Precise { start, .. } | TripDates::Approximate { start, .. } => *start,
        }
    }

    pub fn end(&self) -> Date {
        match self {
            TripDates::Precise { end, .. } | TripDates::Approximate { end, .. } => *end,
        }
    }
}

impl fmt::Display for TripDates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TripDates::Precise { start, end } => write!(f, "{start} → {end}"),
            TripDates::Approximate { start, end, days } => {
                write!(f, "{days} days between {start} and {end}")
            }
        }
    }
}

/// The frozen answer bundle produced by a completed wizard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripPreferences {
    pub dates: TripDates,
    pub departure: Coordinate,
    pub van: String,
    pub companions: Vec<String>,
    pub distance: String,
    pub rhythm: String,
    pub places: Vec<String>,
    pub ambiance: Vec<String>,
    pub budget: String,
    pub spot_types: Vec<String>,
    pub activities: Vec<String>,
    pub eco: String,
    #[serde(default)]
    pub constraints: Vec<String>,
}

impl TripPreferences {
    /// Builds the bundle, failing on the first required answer that is
    /// missing along the chosen date branch.
    pub fn from_answers(answers: &Answers) -> Result<Self> {
        let single = |key: AnswerKey| -> Result<String> {
            answers
                .single(key)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
                .ok_or(TripError::IncompleteAnswer { key })
        };
        let multi = |key: AnswerKey| -> Result<Vec<String>> {
            answers
                .multi(key)
                .filter(|values| !values.is_empty())
                .map(|values| values.iter().cloned().collect())
                .ok_or(TripError::IncompleteAnswer { key })
        };

        let date_type = single(AnswerKey::DateType)?;
        let range = answers
            .range()
            .filter(|range| range.is_complete())
            .ok_or(TripError::IncompleteAnswer {
                key: AnswerKey::Range,
            })?;
        let (start, end) = (range.start, range.end.unwrap_or(range.start));
        let dates = match date_type.as_str() {
            DATE_PRECISE => TripDates::Precise { start, end },
            DATE_APPROX => TripDates::Approximate {
                start,
                end,
                days: answers
                    .count(AnswerKey::ApproxDays)
                    .ok_or(TripError::IncompleteAnswer {
                        key: AnswerKey::ApproxDays,
                    })?,
            },
            other => {
                return Err(TripError::invalid_input(AnswerKey::DateType.as_str())
                    .with_reason(format!("unknown date type '{other}'")))
            }
        };

        Ok(Self {
            dates,
            departure: answers
                .point(AnswerKey::Departure)
                .ok_or(TripError::IncompleteAnswer {
                    key: AnswerKey::Departure,
                })?,
            van: single(AnswerKey::Van)?,
            companions: multi(AnswerKey::Companions)?,
            distance: single(AnswerKey::Distance)?,
            rhythm: single(AnswerKey::Rhythm)?,
            places: multi(AnswerKey::Places)?,
            ambiance: multi(AnswerKey::Ambiance)?,
            budget: single(AnswerKey::Budget)?,
            spot_types: multi(AnswerKey::SpotTypes)?,
            activities: multi(AnswerKey::Activities)?,
            eco: single(AnswerKey::Eco)?,
            constraints: answers
                .multi(AnswerKey::Constraints)
                .map(|values| values.iter().cloned().collect())
                .unwrap_or_default(),
        })
    }
}
