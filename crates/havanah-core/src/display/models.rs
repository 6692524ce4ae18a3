//! Display implementations for domain models.
//!
//! Everything here renders markdown for the terminal renderer. Stored option
//! values are shown with their French labels.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{
        AnswerKey, AnswerValue, Answers, DetailedRoute, ProposedItinerary, Severity, Trip,
        TripPreferences, TripSummary, VanWarning,
    },
    wizard::{questions::question_for, Question, QuestionKind},
};

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "## {}", self.prompt)?;
        if !self.required {
            write!(f, " (optionnel)")?;
        }
        writeln!(f)?;
        writeln!(f)?;

        if self.kind.has_options() {
            for (position, choice) in self.options.iter().enumerate() {
                writeln!(f, "{}. {}", position + 1, choice.label)?;
            }
            if self.kind == QuestionKind::MultiChoice {
                writeln!(f)?;
                writeln!(f, "*Plusieurs choix possibles.*")?;
            }
        }
        Ok(())
    }
}

fn labels<'a>(key: AnswerKey, values: impl IntoIterator<Item = &'a String>) -> String {
    let question = question_for(key);
    values
        .into_iter()
        .map(|value| question.label_of(value))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Single(value) => write!(f, "{value}"),
            AnswerValue::Multi(values) => {
                let joined = values.iter().map(String::as_str).collect::<Vec<_>>();
                write!(f, "{}", joined.join(", "))
            }
            AnswerValue::Range(range) => write!(f, "{range}"),
            AnswerValue::Count(count) => write!(f, "{count} jours"),
            AnswerValue::Point(point) => write!(f, "{point}"),
        }
    }
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No answers yet.");
        }
        for (key, value) in self.iter() {
            let question = question_for(*key);
            match value {
                AnswerValue::Single(value) => {
                    writeln!(f, "- **{key}**: {}", question.label_of(value))?
                }
                AnswerValue::Multi(values) => writeln!(f, "- **{key}**: {}", labels(*key, values))?,
                other => writeln!(f, "- **{key}**: {other}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for TripPreferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let single = |key: AnswerKey, value: &str| question_for(key).label_of(value).to_string();

        writeln!(f, "- **Dates**: {}", self.dates)?;
        writeln!(f, "- **Départ**: {}", self.departure)?;
        writeln!(f, "- **Van**: {}", single(AnswerKey::Van, &self.van))?;
        writeln!(
            f,
            "- **Compagnons**: {}",
            labels(AnswerKey::Companions, &self.companions)
        )?;
        writeln!(
            f,
            "- **Distance**: {}",
            single(AnswerKey::Distance, &self.distance)
        )?;
        writeln!(f, "- **Rythme**: {}", single(AnswerKey::Rhythm, &self.rhythm))?;
        writeln!(f, "- **Lieux**: {}", labels(AnswerKey::Places, &self.places))?;
        writeln!(
            f,
            "- **Ambiance**: {}",
            labels(AnswerKey::Ambiance, &self.ambiance)
        )?;
        writeln!(f, "- **Budget**: {}", single(AnswerKey::Budget, &self.budget))?;
        writeln!(
            f,
            "- **Spots**: {}",
            labels(AnswerKey::SpotTypes, &self.spot_types)
        )?;
        writeln!(
            f,
            "- **Activités**: {}",
            labels(AnswerKey::Activities, &self.activities)
        )?;
        writeln!(f, "- **Éco**: {}", single(AnswerKey::Eco, &self.eco))?;
        if !self.constraints.is_empty() {
            writeln!(
                f,
                "- **Contraintes**: {}",
                labels(AnswerKey::Constraints, &self.constraints)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ProposedItinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}. {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;
        writeln!(f, "- **Durée**: {}", self.duration)?;
        writeln!(f, "- **Distance**: {}", self.distance)?;
        writeln!(f, "- **Budget estimé**: {}", self.estimated_budget)?;
        writeln!(f, "- **Étapes**: {}", self.highlights.join(" → "))?;
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.itinerary_title)?;
        writeln!(f)?;
        writeln!(f, "- Itinerary: {}", self.itinerary_id)?;
        if let Some(budget) = &self.estimated_budget {
            writeln!(f, "- Budget: {budget}")?;
        }
        writeln!(f, "- Saved: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;
        writeln!(f, "## Preferences")?;
        writeln!(f)?;
        write!(f, "{}", self.preferences)
    }
}

impl fmt::Display for TripSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.itinerary_title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Dates**: {} → {}", self.start_date, self.end_date)?;
        writeln!(f, "- **Saved**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for DetailedRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = (self.duration / 60.0).round() as u64;
        writeln!(f, "# Route")?;
        writeln!(f)?;
        writeln!(f, "- **Distance**: {:.1} km", self.distance / 1000.0)?;
        writeln!(f, "- **Durée**: {}h{:02}", minutes / 60, minutes % 60)?;
        if let Some(ascend) = self.ascend {
            writeln!(f, "- **Dénivelé +**: {}m", ascend.round())?;
        }
        if let Some(descend) = self.descend {
            writeln!(f, "- **Dénivelé -**: {}m", descend.round())?;
        }

        if !self.instructions.is_empty() {
            writeln!(f)?;
            writeln!(f, "## Instructions")?;
            writeln!(f)?;
            for (position, instruction) in self.instructions.iter().enumerate() {
                writeln!(
                    f,
                    "{}. {} ({:.0} m)",
                    position + 1,
                    instruction.text,
                    instruction.distance
                )?;
            }
        }
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for VanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self.severity {
            Severity::Info => "ℹ",
            Severity::Warning => "⚠",
            Severity::Error => "⛔",
        };
        write!(f, "- {icon} {}", self.message)?;
        if let Some(location) = &self.location {
            write!(f, " ({location})")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::{
        display::{Itineraries, TripSummaries, VanWarnings},
        models::{Coordinate, RouteInstruction, TripDates, WarningKind},
        wizard::QUESTIONS,
    };

    fn preferences() -> TripPreferences {
        TripPreferences {
            dates: TripDates::Approximate {
                start: date(2030, 7, 1),
                end: date(2030, 7, 31),
                days: 6,
            },
            departure: Coordinate::new(43.6108, 3.8767).unwrap(),
            van: "looking".to_string(),
            companions: vec!["En couple".to_string()],
            distance: "Plusieurs régions".to_string(),
            rhythm: "Tranquille".to_string(),
            places: vec!["Mer".to_string()],
            ambiance: vec!["Calme".to_string()],
            budget: "Moyen".to_string(),
            spot_types: vec!["Nature".to_string()],
            activities: vec!["Randonnée".to_string()],
            eco: "Oui".to_string(),
            constraints: Vec::new(),
        }
    }

    #[test]
    fn test_question_lists_numbered_options() {
        let output = QUESTIONS[0].to_string();
        assert!(output.starts_with("## Quand souhaites-tu partir ?"));
        assert!(output.contains("1. J'ai une date précise"));
        assert!(output.contains("2. J'ai une date approximative"));

        let optional = QUESTIONS.iter().find(|q| !q.required).unwrap();
        assert!(optional.to_string().contains("(optionnel)"));
    }

    #[test]
    fn test_preferences_use_labels() {
        let output = preferences().to_string();
        assert!(output.contains("6 days between 2030-07-01 and 2030-07-31"));
        assert!(output.contains("Non, je cherche à louer un van"));
        assert!(output.contains("43.6108, 3.8767"));
        assert!(!output.contains("Contraintes"));
    }

    #[test]
    fn test_trip_summaries_empty() {
        assert_eq!(TripSummaries(Vec::new()).to_string(), "No trips found.\n");
        assert_eq!(Itineraries(Vec::new()).to_string(), "No itineraries found.\n");
    }

    #[test]
    fn test_trip_display() {
        let trip = Trip {
            id: 3,
            itinerary_id: 2,
            itinerary_title: "Arrière-pays & Nature".to_string(),
            estimated_budget: Some("150-250€".to_string()),
            preferences: preferences(),
            created_at: Timestamp::now(),
        };
        let output = trip.to_string();
        assert!(output.starts_with("# 3. Arrière-pays & Nature"));
        assert!(output.contains("- Budget: 150-250€"));
        assert!(output.contains("## Preferences"));

        let summary = TripSummary::from(&trip).to_string();
        assert!(summary.contains("## Arrière-pays & Nature (ID: 3)"));
        assert!(summary.contains("2030-07-01 → 2030-07-31"));
    }

    #[test]
    fn test_route_and_warnings_display() {
        let route = DetailedRoute {
            path: Vec::new(),
            instructions: vec![RouteInstruction {
                distance: 420.4,
                sign: 0,
                interval: [0, 3],
                text: "Continuez sur Avenue de la Mer".to_string(),
                time: 60_000,
                street_name: "Avenue de la Mer".to_string(),
                exit_number: None,
            }],
            distance: 12_345.0,
            duration: 5_400.0,
            ascend: Some(1500.2),
            descend: None,
        };
        let output = route.to_string();
        assert!(output.contains("12.3 km"));
        assert!(output.contains("1h30"));
        assert!(output.contains("1. Continuez sur Avenue de la Mer (420 m)"));

        let warnings = VanWarnings(vec![VanWarning {
            kind: WarningKind::Elevation,
            message: "Dénivelé important (+1500m), vérifiez votre moteur".to_string(),
            severity: Severity::Warning,
            location: None,
        }]);
        assert!(warnings.to_string().contains("- ⚠ Dénivelé important (+1500m)"));
        assert_eq!(
            VanWarnings(Vec::new()).to_string(),
            "No van warnings for this route.\n"
        );
    }
}
