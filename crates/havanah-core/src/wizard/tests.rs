//! Tests for the wizard module.

use jiff::civil::date;

use super::*;
use crate::models::{AnswerKey, TripDates};

/// Walks a fresh wizard through the precise-date branch up to the van step.
fn wizard_at_van() -> Wizard {
    let mut wizard = Wizard::new();
    wizard
        .select_single(AnswerKey::DateType, DATE_PRECISE)
        .expect("Failed to select date type");
    wizard.advance().expect("Failed to enter precise dates");
    wizard.pick_day(date(2025, 6, 1)).expect("Failed to pick start");
    wizard.pick_day(date(2025, 6, 5)).expect("Failed to pick end");
    wizard.advance().expect("Failed to reach departure");
    wizard
        .set_departure(Coordinate {
            latitude: 43.6108,
            longitude: 3.8767,
        })
        .expect("Failed to set departure");
    wizard.advance().expect("Failed to reach van");
    wizard
}

/// Answers every remaining question with its first option.
fn finish_from_companions(wizard: &mut Wizard) {
    for key in [
        AnswerKey::Companions,
        AnswerKey::Distance,
        AnswerKey::Rhythm,
        AnswerKey::Places,
        AnswerKey::Ambiance,
        AnswerKey::Budget,
        AnswerKey::SpotTypes,
        AnswerKey::Activities,
        AnswerKey::Eco,
    ] {
        assert_eq!(wizard.step().key(), Some(key));
        let question = questions::question_for(key);
        let first = question.options[0].value;
        match question.kind {
            QuestionKind::MultiChoice => {
                wizard.toggle_multi(key, first).expect("Failed to toggle");
            }
            _ => wizard.select_single(key, first).expect("Failed to select"),
        }
        wizard.advance().expect("Failed to advance");
    }
    assert_eq!(wizard.step(), Step::Constraints);
}

#[test]
fn test_new_wizard_starts_empty_on_first_step() {
    let wizard = Wizard::new();
    assert_eq!(wizard.step(), Step::DateType);
    assert!(wizard.answers().is_empty());
    assert_eq!(wizard.region(), MapRegion::default());
    assert!(!wizard.can_advance());
}

#[test]
fn test_advance_without_answer_leaves_state_untouched() {
    let mut wizard = wizard_at_van();
    let before = wizard.answers().clone();

    let err = wizard.advance().unwrap_err();
    assert!(matches!(err, TripError::IncompleteAnswer { key: AnswerKey::Van }));
    assert_eq!(wizard.step(), Step::Van);
    assert_eq!(wizard.answers(), &before);
}

#[test]
fn test_advance_requires_complete_range() {
    let mut wizard = Wizard::new();
    wizard.select_single(AnswerKey::DateType, DATE_PRECISE).unwrap();
    wizard.advance().unwrap();

    wizard.pick_day(date(2025, 6, 1)).unwrap();
    assert!(!wizard.can_advance());
    assert!(wizard.advance().is_err());
    assert_eq!(wizard.step(), Step::PreciseDates);

    wizard.pick_day(date(2025, 6, 3)).unwrap();
    assert_eq!(wizard.advance().unwrap(), Step::Departure);
}

#[test]
fn test_empty_multi_choice_blocks_advance() {
    let mut wizard = wizard_at_van();
    wizard.select_single(AnswerKey::Van, VAN_OWN).unwrap();
    wizard.advance().unwrap();

    wizard.toggle_multi(AnswerKey::Companions, "Seul(e)").unwrap();
    wizard.toggle_multi(AnswerKey::Companions, "Seul(e)").unwrap();
    assert!(matches!(
        wizard.advance(),
        Err(TripError::IncompleteAnswer {
            key: AnswerKey::Companions
        })
    ));
}

#[test]
fn test_toggle_multi_twice_restores_set() {
    let mut wizard = wizard_at_van();
    wizard.select_single(AnswerKey::Van, VAN_OWN).unwrap();
    wizard.advance().unwrap();
    wizard.toggle_multi(AnswerKey::Companions, "Entre amis").unwrap();
    let before = wizard.answers().multi(AnswerKey::Companions).cloned();

    assert!(wizard.toggle_multi(AnswerKey::Companions, "En famille").unwrap());
    assert!(!wizard.toggle_multi(AnswerKey::Companions, "En famille").unwrap());
    assert_eq!(wizard.answers().multi(AnswerKey::Companions).cloned(), before);

    assert!(!wizard.toggle_multi(AnswerKey::Companions, "Entre amis").unwrap());
    assert!(wizard.toggle_multi(AnswerKey::Companions, "Entre amis").unwrap());
    assert_eq!(wizard.answers().multi(AnswerKey::Companions).cloned(), before);
}

#[test]
fn test_toggle_multi_twice_from_unanswered() {
    let mut wizard = wizard_at_van();
    wizard.select_single(AnswerKey::Van, VAN_OWN).unwrap();
    wizard.advance().unwrap();
    let before = wizard.answers().clone();
    assert!(!before.contains(AnswerKey::Companions));

    assert!(wizard.toggle_multi(AnswerKey::Companions, "En couple").unwrap());
    assert!(!wizard.toggle_multi(AnswerKey::Companions, "En couple").unwrap());

    assert_eq!(wizard.answers(), &before);
    assert!(!wizard.can_advance());
}

#[test]
fn test_answers_only_for_active_question() {
    let mut wizard = Wizard::new();
    let err = wizard
        .toggle_multi(AnswerKey::Companions, "En couple")
        .unwrap_err();
    assert!(matches!(
        err,
        TripError::InactiveQuestion {
            key: AnswerKey::Companions,
            step: Step::DateType
        }
    ));
    assert!(wizard.pick_day(date(2025, 6, 1)).is_err());
    assert!(wizard.answers().is_empty());
}

#[test]
fn test_unknown_option_is_rejected() {
    let mut wizard = Wizard::new();
    assert!(wizard.select_single(AnswerKey::DateType, "someday").is_err());
    assert!(wizard.answers().is_empty());
}

#[test]
fn test_retreat_from_first_step_is_noop() {
    let mut wizard = Wizard::new();
    wizard.select_single(AnswerKey::DateType, DATE_APPROX).unwrap();
    assert_eq!(wizard.retreat(), Step::DateType);
    assert_eq!(wizard.answers().single(AnswerKey::DateType), Some(DATE_APPROX));
}

#[test]
fn test_retreat_keeps_answers_and_moves_one_step() {
    let mut wizard = wizard_at_van();
    wizard.select_single(AnswerKey::Van, VAN_OWN).unwrap();
    wizard.advance().unwrap();
    finish_from_companions(&mut wizard);
    let answers = wizard.answers().clone();

    let mut previous_index = wizard.step().index().unwrap();
    while wizard.step() != Step::DateType {
        let step = wizard.retreat();
        let index = step.index().unwrap();
        assert!(index == previous_index - 1 || (index == previous_index && step.is_date_stage()));
        previous_index = index;
        assert_eq!(wizard.answers(), &answers);
    }
}

#[test]
fn test_retreat_from_departure_returns_to_last_date_stage() {
    let mut wizard = Wizard::new();
    wizard.select_single(AnswerKey::DateType, DATE_APPROX).unwrap();
    wizard.advance().unwrap();
    wizard
        .set_date_range(date(2025, 7, 1), Some(date(2025, 7, 11)))
        .unwrap();
    assert_eq!(wizard.advance().unwrap(), Step::ApproxDays);
    wizard.select_day_count(3).unwrap();
    assert_eq!(wizard.advance().unwrap(), Step::Departure);

    assert_eq!(wizard.retreat(), Step::ApproxDays);
    assert_eq!(wizard.retreat(), Step::ApproxPeriod);
    assert_eq!(wizard.retreat(), Step::DateType);
    assert_eq!(wizard.answers().count(AnswerKey::ApproxDays), Some(3));
}

#[test]
fn test_partner_branches_return_after_van_step() {
    for (value, partner) in [(VAN_RENTED, Step::PartnerInfo), (VAN_LOOKING, Step::PartnerRent)] {
        let mut wizard = wizard_at_van();
        wizard.select_single(AnswerKey::Van, value).unwrap();
        assert_eq!(wizard.advance().unwrap(), partner);
        assert!(partner.notice().is_some());

        assert_eq!(wizard.retreat(), Step::Van);
        assert_eq!(wizard.advance().unwrap(), partner);
        assert_eq!(wizard.advance().unwrap(), Step::Companions);
    }
}

#[test]
fn test_own_van_skips_partners() {
    let mut wizard = wizard_at_van();
    wizard.select_single(AnswerKey::Van, VAN_OWN).unwrap();
    assert_eq!(wizard.advance().unwrap(), Step::Companions);
}

#[test]
fn test_changing_date_type_drops_range() {
    let mut wizard = Wizard::new();
    wizard.select_single(AnswerKey::DateType, DATE_PRECISE).unwrap();
    wizard.advance().unwrap();
    wizard
        .set_date_range(date(2025, 6, 1), Some(date(2025, 6, 5)))
        .unwrap();
    wizard.retreat();

    wizard.select_single(AnswerKey::DateType, DATE_PRECISE).unwrap();
    assert!(wizard.answers().range().is_some());

    wizard.select_single(AnswerKey::DateType, DATE_APPROX).unwrap();
    assert!(wizard.answers().range().is_none());
}

#[test]
fn test_set_date_range_validates_order() {
    let mut wizard = Wizard::new();
    wizard.select_single(AnswerKey::DateType, DATE_PRECISE).unwrap();
    wizard.advance().unwrap();

    assert!(wizard
        .set_date_range(date(2025, 6, 5), Some(date(2025, 6, 1)))
        .is_err());
    assert!(wizard.answers().range().is_none());

    wizard
        .set_date_range(date(2025, 6, 1), Some(date(2025, 6, 1)))
        .unwrap();
    assert!(wizard.can_advance());
}

#[test]
fn test_set_date_range_on_complete_range_restarts() {
    let mut wizard = Wizard::new();
    wizard.select_single(AnswerKey::DateType, DATE_PRECISE).unwrap();
    wizard.advance().unwrap();
    wizard
        .set_date_range(date(2025, 6, 10), Some(date(2025, 6, 20)))
        .unwrap();

    let picked = wizard
        .set_date_range(date(2025, 6, 12), Some(date(2025, 6, 14)))
        .unwrap();
    assert_eq!(picked, DayPick::Restarted(DateRange::starting(date(2025, 6, 12))));
    assert_eq!(
        wizard.answers().range(),
        Some(&DateRange::starting(date(2025, 6, 12)))
    );
}

#[test]
fn test_min_date_rejects_past_days() {
    let mut wizard = Wizard::new().with_min_date(date(2025, 6, 1));
    wizard.select_single(AnswerKey::DateType, DATE_PRECISE).unwrap();
    wizard.advance().unwrap();

    assert!(wizard.pick_day(date(2025, 5, 31)).is_err());
    assert!(wizard.answers().range().is_none());
    assert!(wizard.pick_day(date(2025, 6, 1)).is_ok());
}

#[test]
fn test_day_count_must_be_offered() {
    let mut wizard = Wizard::new();
    wizard.select_single(AnswerKey::DateType, DATE_APPROX).unwrap();
    wizard.advance().unwrap();
    wizard
        .set_date_range(date(2025, 7, 1), Some(date(2025, 7, 6)))
        .unwrap();
    wizard.advance().unwrap();

    assert_eq!(wizard.day_count_options(), vec![1, 2, 3, 4]);
    assert!(wizard.select_day_count(0).is_err());
    assert!(wizard.select_day_count(5).is_err());
    assert!(!wizard.can_advance());
    wizard.select_day_count(4).unwrap();
    assert!(wizard.can_advance());
}

#[test]
fn test_one_day_period_blocks_day_count_step() {
    let mut wizard = Wizard::new();
    wizard.select_single(AnswerKey::DateType, DATE_APPROX).unwrap();
    wizard.advance().unwrap();
    wizard
        .set_date_range(date(2025, 7, 1), Some(date(2025, 7, 2)))
        .unwrap();
    assert_eq!(wizard.advance().unwrap(), Step::ApproxDays);

    assert!(wizard.day_count_options().is_empty());
    assert!(wizard.select_day_count(1).is_err());
    assert!(!wizard.can_advance());
    assert_eq!(wizard.retreat(), Step::ApproxPeriod);
}

#[test]
fn test_restarting_period_drops_day_count() {
    let mut wizard = Wizard::new();
    wizard.select_single(AnswerKey::DateType, DATE_APPROX).unwrap();
    wizard.advance().unwrap();
    wizard
        .set_date_range(date(2025, 7, 1), Some(date(2025, 7, 11)))
        .unwrap();
    wizard.advance().unwrap();
    wizard.select_day_count(8).unwrap();

    wizard.retreat();
    wizard.pick_day(date(2025, 7, 2)).unwrap();
    assert_eq!(wizard.answers().count(AnswerKey::ApproxDays), None);
}

#[test]
fn test_complete_only_from_last_step() {
    let mut wizard = wizard_at_van();
    assert!(matches!(
        wizard.complete(),
        Err(TripError::InvalidTransition {
            step: Step::Van,
            action: "complete"
        })
    ));
}

#[test]
fn test_complete_freezes_preferences() {
    let mut wizard = wizard_at_van();
    wizard.select_single(AnswerKey::Van, VAN_OWN).unwrap();
    wizard.advance().unwrap();
    finish_from_companions(&mut wizard);

    // Constraints are optional
    assert!(wizard.can_advance());
    assert_eq!(wizard.advance().unwrap(), Step::Results);

    let preferences = wizard.preferences().expect("preferences frozen");
    assert_eq!(
        preferences.dates,
        TripDates::Precise {
            start: date(2025, 6, 1),
            end: date(2025, 6, 5)
        }
    );
    assert_eq!(preferences.companions, vec!["Seul(e)".to_string()]);
    assert!(preferences.constraints.is_empty());
    assert!(wizard.advance().is_err());
}

#[test]
fn test_results_back_to_form() {
    let mut wizard = wizard_at_van();
    wizard.select_single(AnswerKey::Van, VAN_OWN).unwrap();
    wizard.advance().unwrap();
    finish_from_companions(&mut wizard);
    wizard.advance().unwrap();

    assert_eq!(wizard.retreat(), Step::Constraints);
    assert!(wizard.preferences().is_none());
    assert_eq!(wizard.answers().single(AnswerKey::Eco), Some("Oui"));
}

#[test]
fn test_reset_from_any_state() {
    let mut wizard = wizard_at_van();
    wizard.set_region(MapRegion::around(Coordinate {
        latitude: 45.0,
        longitude: 5.0,
    }));
    wizard.reset();
    assert_eq!(wizard.step(), Step::FIRST);
    assert!(wizard.answers().is_empty());
    assert_eq!(wizard.region(), MapRegion::default());

    let mut results = wizard_at_van();
    results.select_single(AnswerKey::Van, VAN_OWN).unwrap();
    results.advance().unwrap();
    finish_from_companions(&mut results);
    results.advance().unwrap();
    results.reset();
    assert_eq!(results.step(), Step::FIRST);
    assert!(results.answers().is_empty());
    assert!(results.preferences().is_none());
}

#[test]
fn test_close_and_open() {
    let mut wizard = wizard_at_van();
    wizard.close();
    assert!(wizard.is_closed());
    assert!(wizard.answers().is_empty());
    assert!(wizard.advance().is_err());
    assert_eq!(wizard.retreat(), Step::Closed);

    wizard.open();
    assert_eq!(wizard.step(), Step::FIRST);
}
