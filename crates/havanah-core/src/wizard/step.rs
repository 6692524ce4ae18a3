//! Wizard steps.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::questions::{question_for, Question};
use crate::models::AnswerKey;

/// Body of the notice shown to travellers who already rented a van.
pub const PARTNER_INFO_NOTICE: &str = "Profite de tarifs avantageux chez nos partenaires pour la location de van.\nExemple : VanLiberté - à partir de 59€/jour, RoadSurfer - à partir de 65€/jour.";

/// Body of the notice shown to travellers looking for a rental.
pub const PARTNER_RENT_NOTICE: &str = "Tu n'as pas encore de van ? Découvre nos partenaires et réserve facilement !\nExemple : VanLiberté - à partir de 59€/jour, RoadSurfer - à partir de 65€/jour.";

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    DateType,
    PreciseDates,
    /// First stage of the approximate-date branch: the period
    ApproxPeriod,
    /// Second stage of the approximate-date branch: days within the period
    ApproxDays,
    Departure,
    Van,
    PartnerInfo,
    PartnerRent,
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
    Results,
    Closed,
}

impl Step {
    /// Entry point of the questionnaire.
    pub const FIRST: Step = Step::DateType;

    /// Last question; completing it leads to [`Step::Results`].
    pub const LAST: Step = Step::Constraints;

    /// Linear position of the step. The date sub-stages share index 1;
    /// partner notices, results and the closed state have none.
    pub fn index(&self) -> Option<u8> {
        let index = match self {
            Step::DateType => 0,
            Step::PreciseDates | Step::ApproxPeriod | Step::ApproxDays => 1,
            Step::Departure => 2,
            Step::Van => 3,
            Step::Companions => 4,
            Step::Distance => 5,
            Step::Rhythm => 6,
            Step::Places => 7,
            Step::Ambiance => 8,
            Step::Budget => 9,
            Step::SpotTypes => 10,
            Step::Activities => 11,
            Step::Eco => 12,
            Step::Constraints => 13,
            Step::PartnerInfo | Step::PartnerRent | Step::Results | Step::Closed => return None,
        };
        Some(index)
    }

    /// Answer recorded on this step, if it asks a question.
    pub fn key(&self) -> Option<AnswerKey> {
        let key = match self {
            Step::DateType => AnswerKey::DateType,
            Step::PreciseDates | Step::ApproxPeriod => AnswerKey::Range,
            Step::ApproxDays => AnswerKey::ApproxDays,
            Step::Departure => AnswerKey::Departure,
            Step::Van => AnswerKey::Van,
            Step::Companions => AnswerKey::Companions,
            Step::Distance => AnswerKey::Distance,
            Step::Rhythm => AnswerKey::Rhythm,
            Step::Places => AnswerKey::Places,
            Step::Ambiance => AnswerKey::Ambiance,
            Step::Budget => AnswerKey::Budget,
            Step::SpotTypes => AnswerKey::SpotTypes,
            Step::Activities => AnswerKey::Activities,
            Step::Eco => AnswerKey::Eco,
            Step::Constraints => AnswerKey::Constraints,
            Step::PartnerInfo | Step::PartnerRent | Step::Results | Step::Closed => return None,
        };
        Some(key)
    }

    /// Question asked on this step.
    pub fn question(&self) -> Option<&'static Question> {
        self.key().map(question_for)
    }

    /// Heading shown for the step.
    pub fn title(&self) -> &'static str {
        match self {
            Step::ApproxPeriod => "Sélectionne ta période approximative",
            Step::PartnerInfo => "Nos partenaires location van",
            Step::PartnerRent => "Loue ton van avec nos partenaires",
            Step::Results => "Voici vos itinéraires personnalisés !",
            Step::Closed => "Questionnaire fermé",
            other => other.question().map(|q| q.prompt).unwrap_or_default(),
        }
    }

    /// Informational text of the partner side branches.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Step::PartnerInfo => Some(PARTNER_INFO_NOTICE),
            Step::PartnerRent => Some(PARTNER_RENT_NOTICE),
            _ => None,
        }
    }

    /// Whether the step is one of the date sub-stages.
    pub fn is_date_stage(&self) -> bool {
        matches!(
            self,
            Step::PreciseDates | Step::ApproxPeriod | Step::ApproxDays
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::DateType => "date-type",
            Step::PreciseDates => "precise-dates",
            Step::ApproxPeriod => "approx-period",
            Step::ApproxDays => "approx-days",
            Step::Departure => "departure",
            Step::Van => "van",
            Step::PartnerInfo => "partner-info",
            Step::PartnerRent => "partner-rent",
            Step::Companions => "companions",
            Step::Distance => "distance",
            Step::Rhythm => "rhythm",
            Step::Places => "places",
            Step::Ambiance => "ambiance",
            Step::Budget => "budget",
            Step::SpotTypes => "spot-types",
            Step::Activities => "activities",
            Step::Eco => "eco",
            Step::Constraints => "constraints",
            Step::Results => "results",
            Step::Closed => "closed",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
