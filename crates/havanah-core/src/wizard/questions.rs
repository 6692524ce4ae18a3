//! Static question catalog.
//!
//! Prompts and option labels are product content and stay in French. Option
//! values are what ends up in [`Answers`](crate::models::Answers); for most
//! questions the value is the label itself.

use crate::models::AnswerKey;

/// Date type value: fixed departure and return days.
pub const DATE_PRECISE: &str = "precise";
/// Date type value: a number of days inside a period.
pub const DATE_APPROX: &str = "approx";

/// Van value: the traveller owns a van.
pub const VAN_OWN: &str = "own";
/// Van value: a van is already rented.
pub const VAN_RENTED: &str = "rented";
/// Van value: the traveller is looking for a rental.
pub const VAN_LOOKING: &str = "looking";

/// Input type of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    SingleChoice,
    MultiChoice,
    DateRange,
    IntegerCount,
    GeoPoint,
    /// Single choice whose value picks the next step
    Branch,
}

impl QuestionKind {
    /// Whether answers come from the option list.
    pub fn has_options(&self) -> bool {
        matches!(
            self,
            QuestionKind::SingleChoice | QuestionKind::MultiChoice | QuestionKind::Branch
        )
    }
}

/// One selectable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Choice {
    const fn labelled(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }

    const fn plain(label: &'static str) -> Self {
        Self {
            value: label,
            label,
        }
    }
}

/// Static definition of a wizard question.
#[derive(Debug)]
pub struct Question {
    pub key: AnswerKey,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [Choice],
    pub required: bool,
}

impl Question {
    /// Looks an option up by value.
    pub fn choice(&self, value: &str) -> Option<&'static Choice> {
        self.options.iter().find(|choice| choice.value == value)
    }

    /// Looks an option up by its 1-based position, as shown to the user.
    pub fn choice_at(&self, position: usize) -> Option<&'static Choice> {
        position
            .checked_sub(1)
            .and_then(|index| self.options.get(index))
    }

    /// Label for a stored value, falling back to the value.
    pub fn label_of<'a>(&self, value: &'a str) -> &'a str {
        self.choice(value).map(|choice| choice.label).unwrap_or(value)
    }
}

/// Every question, in questionnaire order.
pub static QUESTIONS: [Question; 15] = [
    Question {
        key: AnswerKey::DateType,
        prompt: "Quand souhaites-tu partir ?",
        kind: QuestionKind::Branch,
        options: &[
            Choice::labelled(DATE_PRECISE, "J'ai une date précise"),
            Choice::labelled(DATE_APPROX, "J'ai une date approximative"),
        ],
        required: true,
    },
    Question {
        key: AnswerKey::Range,
        prompt: "Sélectionne ta date de départ et d'arrivée",
        kind: QuestionKind::DateRange,
        options: &[],
        required: true,
    },
    Question {
        key: AnswerKey::ApproxDays,
        prompt: "Nombre de jours dans cette période :",
        kind: QuestionKind::IntegerCount,
        options: &[],
        required: true,
    },
    Question {
        key: AnswerKey::Departure,
        prompt: "D'où pars-tu ?",
        kind: QuestionKind::GeoPoint,
        options: &[],
        required: true,
    },
    Question {
        key: AnswerKey::Van,
        prompt: "As-tu déjà un van pour le voyage ?",
        kind: QuestionKind::Branch,
        options: &[
            Choice::labelled(VAN_OWN, "Oui, j'ai mon propre van"),
            Choice::labelled(VAN_RENTED, "Oui, j'ai loué un van"),
            Choice::labelled(VAN_LOOKING, "Non, je cherche à louer un van"),
        ],
        required: true,
    },
    Question {
        key: AnswerKey::Companions,
        prompt: "Avec qui tu voyages ?",
        kind: QuestionKind::MultiChoice,
        options: &[
            Choice::plain("Seul(e)"),
            Choice::plain("En couple"),
            Choice::plain("En famille"),
            Choice::plain("Entre amis"),
            Choice::plain("Avec un animal de compagnie"),
        ],
        required: true,
    },
    Question {
        key: AnswerKey::Distance,
        prompt: "Jusqu'où veux-tu aller ?",
        kind: QuestionKind::SingleChoice,
        options: &[
            Choice::plain("Je reste dans la même région"),
            Choice::plain("Plusieurs régions"),
            Choice::plain("Changer de pays"),
        ],
        required: true,
    },
    Question {
        key: AnswerKey::Rhythm,
        prompt: "Quel rythme préfères-tu ?",
        kind: QuestionKind::SingleChoice,
        options: &[
            Choice::plain("Chill (peu de trajet)"),
            Choice::plain("Équilibré"),
            Choice::plain("Roadtrip intense (beaucoup de spots)"),
        ],
        required: true,
    },
    Question {
        key: AnswerKey::Places,
        prompt: "Quels types de lieux veux-tu explorer ?",
        kind: QuestionKind::MultiChoice,
        options: &[
            Choice::plain("Nature sauvage"),
            Choice::plain("Montagnes"),
            Choice::plain("Plages"),
            Choice::plain("Villes / culture"),
            Choice::plain("Spots secrets & insolites"),
        ],
        required: true,
    },
    Question {
        key: AnswerKey::Ambiance,
        prompt: "Ambiance recherchée :",
        kind: QuestionKind::MultiChoice,
        options: &[
            Choice::plain("Déconnexion & nature"),
            Choice::plain("Slow travel"),
            Choice::plain("Romantique"),
            Choice::plain("Festive / sociale"),
            Choice::plain("Familiale"),
        ],
        required: true,
    },
    Question {
        key: AnswerKey::Budget,
        prompt: "Quel est ton budget moyen par jour (par personne) ?",
        kind: QuestionKind::SingleChoice,
        options: &[
            Choice::plain("Moins de 20 €"),
            Choice::plain("20 € à 40 €"),
            Choice::plain("40 € à 70 €"),
            Choice::plain("Plus de 70 €"),
        ],
        required: true,
    },
    Question {
        key: AnswerKey::SpotTypes,
        prompt: "Souhaites-tu des spots :",
        kind: QuestionKind::MultiChoice,
        options: &[
            Choice::plain("100 % gratuits"),
            Choice::plain("Mix gratuits & payants"),
            Choice::plain("Avec services (douche, vidange…)"),
            Choice::plain("Calmes pour télétravail ou repos"),
        ],
        required: true,
    },
    Question {
        key: AnswerKey::Activities,
        prompt: "Qu’aimerais-tu faire pendant ce voyage ?",
        kind: QuestionKind::MultiChoice,
        options: &[
            Choice::plain("Rando"),
            Choice::plain("Baignade / sports nautiques"),
            Choice::plain("Visites culturelles"),
            Choice::plain("Détente Zen"),
            Choice::plain("Sport"),
            Choice::plain("Gastronomie locale"),
            Choice::plain("Activité extrême"),
        ],
        required: true,
    },
    Question {
        key: AnswerKey::Eco,
        prompt: "Souhaites-tu un itinéraire écoresponsable ?",
        kind: QuestionKind::SingleChoice,
        options: &[
            Choice::plain("Oui"),
            Choice::plain("Un bon équilibre"),
            Choice::plain("Non prioritaire"),
        ],
        required: true,
    },
    Question {
        key: AnswerKey::Constraints,
        prompt: "Des contraintes particulières ?",
        kind: QuestionKind::MultiChoice,
        options: &[
            Choice::plain("Animaux"),
            Choice::plain("Kids friendly"),
            Choice::plain("Pas d'autoroute"),
            Choice::plain("PMR"),
        ],
        required: false,
    },
];

/// The definition of the question answered under `key`.
pub fn question_for(key: AnswerKey) -> &'static Question {
    // QUESTIONS follows AnswerKey::ALL order
    let index = AnswerKey::ALL
        .iter()
        .position(|candidate| *candidate == key)
        .unwrap_or_default();
    &QUESTIONS[index]
}
