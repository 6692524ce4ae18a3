//! Trip-creation wizard.
//!
//! The [`Wizard`] walks a traveller through the questionnaire defined in
//! [`questions`], one [`Step`] at a time. Every transition is a plain method
//! call that either succeeds or returns an error without touching the state,
//! so a presentation layer can drive it from input events and grey out the
//! "next" control with [`Wizard::can_advance`].
//!
//! ```text
//! DateType ──precise──▶ PreciseDates ──────────────────┐
//!    │                                                 ▼
//!    └─approx──▶ ApproxPeriod ──▶ ApproxDays ──▶ Departure ──▶ Van
//!                                                              │
//!        ┌─────────────own─────────────────────────────────────┤
//!        │                  ┌─rented─▶ PartnerInfo ──┐         │
//!        │                  └─looking▶ PartnerRent ──┤◀────────┘
//!        ▼                                           │
//!    Companions ◀────────────────────────────────────┘
//!        │
//!        ▼
//!    Distance ▶ Rhythm ▶ Places ▶ Ambiance ▶ Budget ▶ SpotTypes
//!        ▶ Activities ▶ Eco ▶ Constraints ──complete──▶ Results
//! ```
//!
//! # Example
//!
//! ```rust
//! use havanah_core::wizard::{questions::DATE_PRECISE, Step, Wizard};
//! use havanah_core::models::AnswerKey;
//! use jiff::civil::date;
//!
//! let mut wizard = Wizard::new();
//! assert!(wizard.advance().is_err());
//!
//! wizard.select_single(AnswerKey::DateType, DATE_PRECISE).unwrap();
//! assert_eq!(wizard.advance().unwrap(), Step::PreciseDates);
//!
//! wizard.pick_day(date(2025, 6, 1)).unwrap();
//! wizard.pick_day(date(2025, 6, 5)).unwrap();
//! assert_eq!(wizard.advance().unwrap(), Step::Departure);
//! ```

pub mod calendar;
pub mod questions;
pub mod step;

#[cfg(test)]
mod tests;

use jiff::civil::Date;
use log::{debug, info};

pub use calendar::{DayPick, MarkedDay};
pub use questions::{Choice, Question, QuestionKind, QUESTIONS};
pub use step::Step;

use crate::{
    error::{Result, TripError},
    models::{AnswerKey, AnswerValue, Answers, Coordinate, DateRange, MapRegion, TripPreferences},
};
use questions::{DATE_APPROX, DATE_PRECISE, VAN_LOOKING, VAN_OWN, VAN_RENTED};

/// State of one questionnaire run.
#[derive(Debug, Clone)]
pub struct Wizard {
    step: Step,
    answers: Answers,
    region: MapRegion,
    min_date: Option<Date>,
    preferences: Option<TripPreferences>,
}

impl Wizard {
    /// A wizard on its first step with no answers.
    pub fn new() -> Self {
        Self {
            step: Step::FIRST,
            answers: Answers::new(),
            region: MapRegion::default(),
            min_date: None,
            preferences: None,
        }
    }

    /// Rejects calendar days before `date`.
    pub fn with_min_date(mut self, date: Date) -> Self {
        self.min_date = Some(date);
        self
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Viewport of the departure map.
    pub fn region(&self) -> MapRegion {
        self.region
    }

    pub fn min_date(&self) -> Option<Date> {
        self.min_date
    }

    /// Frozen bundle, available once [`Wizard::complete`] succeeded.
    pub fn preferences(&self) -> Option<&TripPreferences> {
        self.preferences.as_ref()
    }

    /// Question asked on the current step.
    pub fn question(&self) -> Option<&'static Question> {
        self.step.question()
    }

    pub fn is_closed(&self) -> bool {
        self.step == Step::Closed
    }

    /// Whether [`Wizard::advance`] would succeed.
    pub fn can_advance(&self) -> bool {
        self.check_advance().is_ok()
    }

    /// Moves to the next step, or into a branch, once the current answer
    /// satisfies its question. On the last step this completes the wizard.
    pub fn advance(&mut self) -> Result<Step> {
        self.check_advance()?;
        if self.step == Step::LAST {
            self.complete()?;
            return Ok(self.step);
        }
        let next = self.next_step()?;
        debug!("Wizard advance: {} -> {}", self.step, next);
        self.step = next;
        Ok(next)
    }

    /// Moves back one step without clearing any answer. No-op on the first
    /// step and when closed.
    pub fn retreat(&mut self) -> Step {
        let previous = match self.step {
            Step::DateType | Step::Closed => self.step,
            Step::PreciseDates | Step::ApproxPeriod => Step::DateType,
            Step::ApproxDays => Step::ApproxPeriod,
            Step::Departure => match self.answers.single(AnswerKey::DateType) {
                Some(DATE_PRECISE) => Step::PreciseDates,
                Some(DATE_APPROX) => Step::ApproxDays,
                _ => Step::DateType,
            },
            Step::Van => Step::Departure,
            Step::PartnerInfo | Step::PartnerRent | Step::Companions => Step::Van,
            Step::Distance => Step::Companions,
            Step::Rhythm => Step::Distance,
            Step::Places => Step::Rhythm,
            Step::Ambiance => Step::Places,
            Step::Budget => Step::Ambiance,
            Step::SpotTypes => Step::Budget,
            Step::Activities => Step::SpotTypes,
            Step::Eco => Step::Activities,
            Step::Constraints => Step::Eco,
            Step::Results => {
                self.preferences = None;
                Step::Constraints
            }
        };
        if previous != self.step {
            debug!("Wizard retreat: {} -> {}", self.step, previous);
        }
        self.step = previous;
        previous
    }

    /// Records a single-choice (or branch) answer for the active question.
    ///
    /// Switching the date type drops the range and day count collected for
    /// the other date type.
    pub fn select_single(&mut self, key: AnswerKey, value: &str) -> Result<()> {
        let question = self.active_question(key)?;
        if !matches!(
            question.kind,
            QuestionKind::SingleChoice | QuestionKind::Branch
        ) {
            return Err(TripError::invalid_input(key.as_str())
                .with_reason("not a single-choice question"));
        }
        let choice = question.choice(value).ok_or_else(|| {
            TripError::invalid_input(key.as_str()).with_reason(format!("unknown option '{value}'"))
        })?;

        if key == AnswerKey::DateType && self.answers.single(key) != Some(choice.value) {
            self.answers.remove(AnswerKey::Range);
            self.answers.remove(AnswerKey::ApproxDays);
        }
        self.answers
            .insert(key, AnswerValue::Single(choice.value.to_string()));
        Ok(())
    }

    /// Adds or removes a multi-choice option for the active question.
    /// Returns whether the option is selected afterwards.
    pub fn toggle_multi(&mut self, key: AnswerKey, value: &str) -> Result<bool> {
        let question = self.active_question(key)?;
        if question.kind != QuestionKind::MultiChoice {
            return Err(TripError::invalid_input(key.as_str())
                .with_reason("not a multi-choice question"));
        }
        let choice = question.choice(value).ok_or_else(|| {
            TripError::invalid_input(key.as_str()).with_reason(format!("unknown option '{value}'"))
        })?;
        Ok(self.answers.toggle(key, choice.value))
    }

    /// Applies a calendar tap on the active date step.
    pub fn pick_day(&mut self, day: Date) -> Result<DayPick> {
        self.ensure_range_step()?;
        self.check_min_date(day)?;
        let picked = calendar::pick(self.answers.range(), day);
        self.store_range(picked);
        Ok(picked)
    }

    /// Sets the date range directly.
    ///
    /// When a complete range is already recorded the selection restarts at
    /// `start` and `end` is ignored, exactly like a calendar tap.
    pub fn set_date_range(&mut self, start: Date, end: Option<Date>) -> Result<DayPick> {
        self.ensure_range_step()?;
        self.check_min_date(start)?;
        let picked = match (self.answers.range(), end) {
            (Some(existing), _) if existing.is_complete() => {
                DayPick::Restarted(DateRange::starting(start))
            }
            (_, Some(end)) => DayPick::Closed(DateRange::new(start, end)?),
            (_, None) => DayPick::Restarted(DateRange::starting(start)),
        };
        self.store_range(picked);
        Ok(picked)
    }

    /// Day counts offered on the approximate-days step.
    pub fn day_count_options(&self) -> Vec<u32> {
        calendar::day_count_options(self.answers.range())
    }

    /// Highlighted calendar cells for the current selection.
    pub fn marked_days(&self) -> Vec<MarkedDay> {
        calendar::marked_days(self.answers.range())
    }

    /// Chooses how many days to travel within the approximate period.
    pub fn select_day_count(&mut self, days: u32) -> Result<()> {
        self.active_question(AnswerKey::ApproxDays)?;
        if !self.day_count_options().contains(&days) {
            return Err(TripError::invalid_input(AnswerKey::ApproxDays.as_str())
                .with_reason(format!("{days} is not an offered day count")));
        }
        self.answers
            .insert(AnswerKey::ApproxDays, AnswerValue::Count(days));
        Ok(())
    }

    /// Sets the departure point, e.g. from a tap on the map.
    pub fn set_departure(&mut self, point: Coordinate) -> Result<()> {
        self.active_question(AnswerKey::Departure)?;
        self.answers
            .insert(AnswerKey::Departure, AnswerValue::Point(point));
        Ok(())
    }

    /// Recentres the departure map, e.g. after a place lookup.
    pub fn set_region(&mut self, region: MapRegion) {
        self.region = region;
    }

    /// Validates every required answer, freezes them and shows the results.
    /// Only allowed from the last step.
    pub fn complete(&mut self) -> Result<&TripPreferences> {
        if self.step != Step::LAST {
            return Err(TripError::InvalidTransition {
                step: self.step,
                action: "complete",
            });
        }
        let preferences = TripPreferences::from_answers(&self.answers)?;
        info!("Wizard completed: {}", serde_json::to_string(&preferences)?);
        self.step = Step::Results;
        let frozen: &TripPreferences = self.preferences.insert(preferences);
        Ok(frozen)
    }

    /// Back to the first step with no answers and the default map.
    pub fn reset(&mut self) {
        debug!("Wizard reset from {}", self.step);
        self.step = Step::FIRST;
        self.answers.clear();
        self.region = MapRegion::default();
        self.preferences = None;
    }

    /// Resets and hides the wizard.
    pub fn close(&mut self) {
        self.reset();
        self.step = Step::Closed;
    }

    /// Shows a closed wizard again, on its first step.
    pub fn open(&mut self) {
        if self.step == Step::Closed {
            self.step = Step::FIRST;
        }
    }

    fn check_advance(&self) -> Result<()> {
        match self.step {
            Step::Results | Step::Closed => Err(TripError::InvalidTransition {
                step: self.step,
                action: "advance",
            }),
            Step::PartnerInfo | Step::PartnerRent => Ok(()),
            Step::ApproxDays => match self.answers.count(AnswerKey::ApproxDays) {
                Some(days) if self.day_count_options().contains(&days) => Ok(()),
                _ => Err(TripError::IncompleteAnswer {
                    key: AnswerKey::ApproxDays,
                }),
            },
            step => match step.question() {
                Some(question) if question.required && !self.answers.is_answered(question.key) => {
                    Err(TripError::IncompleteAnswer { key: question.key })
                }
                _ => Ok(()),
            },
        }
    }

    fn next_step(&self) -> Result<Step> {
        let next = match self.step {
            Step::DateType => match self.answers.single(AnswerKey::DateType) {
                Some(DATE_PRECISE) => Step::PreciseDates,
                Some(DATE_APPROX) => Step::ApproxPeriod,
                _ => {
                    return Err(TripError::IncompleteAnswer {
                        key: AnswerKey::DateType,
                    })
                }
            },
            Step::PreciseDates | Step::ApproxDays => Step::Departure,
            Step::ApproxPeriod => Step::ApproxDays,
            Step::Departure => Step::Van,
            Step::Van => match self.answers.single(AnswerKey::Van) {
                Some(VAN_OWN) => Step::Companions,
                Some(VAN_RENTED) => Step::PartnerInfo,
                Some(VAN_LOOKING) => Step::PartnerRent,
                _ => return Err(TripError::IncompleteAnswer { key: AnswerKey::Van }),
            },
            Step::PartnerInfo | Step::PartnerRent => Step::Companions,
            Step::Companions => Step::Distance,
            Step::Distance => Step::Rhythm,
            Step::Rhythm => Step::Places,
            Step::Places => Step::Ambiance,
            Step::Ambiance => Step::Budget,
            Step::Budget => Step::SpotTypes,
            Step::SpotTypes => Step::Activities,
            Step::Activities => Step::Eco,
            Step::Eco => Step::Constraints,
            Step::Constraints | Step::Results | Step::Closed => {
                return Err(TripError::InvalidTransition {
                    step: self.step,
                    action: "advance",
                })
            }
        };
        Ok(next)
    }

    fn active_question(&self, key: AnswerKey) -> Result<&'static Question> {
        match self.step.question() {
            Some(question) if question.key == key => Ok(question),
            _ => Err(TripError::InactiveQuestion {
                key,
                step: self.step,
            }),
        }
    }

    fn ensure_range_step(&self) -> Result<()> {
        match self.step {
            Step::PreciseDates | Step::ApproxPeriod => Ok(()),
            step => Err(TripError::InactiveQuestion {
                key: AnswerKey::Range,
                step,
            }),
        }
    }

    fn check_min_date(&self, day: Date) -> Result<()> {
        match self.min_date {
            Some(min) if day < min => Err(TripError::invalid_input(AnswerKey::Range.as_str())
                .with_reason(format!("{day} is before {min}"))),
            _ => Ok(()),
        }
    }

    fn store_range(&mut self, picked: DayPick) {
        if matches!(picked, DayPick::Restarted(_)) {
            self.answers.remove(AnswerKey::ApproxDays);
        }
        self.answers
            .insert(AnswerKey::Range, AnswerValue::Range(picked.range()));
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
