//! Line-based driver for the questionnaire.
//!
//! One line of input is one action on the current screen. Empty lines move
//! forward, `b` goes back, `q` closes; anything else answers the question on
//! screen. Rejected input is reported and the screen stays where it is.

use std::{fmt::Write as _, io::BufRead};

use anyhow::{anyhow, Context, Result};
use havanah_core::{
    display::{CreateResult, Itineraries, OperationStatus},
    models::Coordinate,
    wizard::{Question, QuestionKind},
    Step, TripError, TripSession, Wizard,
};
use jiff::civil::Date;
use log::debug;

use crate::renderer::TerminalRenderer;

const HINT: &str = "*Entrée : suivant | b : retour | q : quitter*";

/// Drives `session` from `input` until the questionnaire is closed or the
/// input ends.
pub async fn run<R: BufRead>(
    session: &TripSession,
    renderer: &TerminalRenderer,
    mut input: R,
) -> Result<()> {
    let mut redraw = true;
    loop {
        if session.is_closed() {
            return renderer.render("Questionnaire fermé.\n");
        }
        if redraw {
            renderer.render(&screen(session))?;
        }

        let mut line = String::new();
        if input
            .read_line(&mut line)
            .context("Failed to read answer")?
            == 0
        {
            debug!("Input closed, leaving the questionnaire");
            session.close();
            continue;
        }

        redraw = match handle_line(session, renderer, line.trim()).await {
            Ok(()) => true,
            Err(e) => {
                renderer.show(&OperationStatus::failure(e.to_string()))?;
                false
            }
        };
    }
}

async fn handle_line(session: &TripSession, renderer: &TerminalRenderer, line: &str) -> Result<()> {
    match line {
        "" | "n" => {
            session.advance().await?;
            Ok(())
        }
        "b" | "<" => {
            session.retreat();
            Ok(())
        }
        "q" => {
            session.close();
            Ok(())
        }
        _ => answer(session, renderer, line).await,
    }
}

async fn answer(session: &TripSession, renderer: &TerminalRenderer, line: &str) -> Result<()> {
    let step = session.step();
    if step == Step::Results {
        let id: u32 = line
            .parse()
            .map_err(|_| anyhow!("Tapez le numéro d'un itinéraire"))?;
        match session.select(id).await? {
            Some(trip) => renderer.show(&CreateResult::new(trip))?,
            None => renderer.show(&OperationStatus::success(format!(
                "Itinéraire {id} sélectionné"
            )))?,
        }
        return Ok(());
    }

    let question = step
        .question()
        .ok_or_else(|| anyhow!("Appuyez sur Entrée pour continuer"))?;
    let key = question.key;

    match question.kind {
        QuestionKind::SingleChoice | QuestionKind::Branch => {
            let choice = choice_from(question, line)?;
            session.with_wizard(|w| w.select_single(key, choice))?;
        }
        QuestionKind::MultiChoice => {
            let choices = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .map(|token| choice_from(question, token))
                .collect::<Result<Vec<_>>>()?;
            session.with_wizard(|w| {
                choices
                    .iter()
                    .try_for_each(|choice| w.toggle_multi(key, choice).map(|_| ()))
            })?;
        }
        QuestionKind::DateRange => {
            let days = line
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<Date>()
                        .map_err(|_| anyhow!("Date invalide '{token}', format attendu AAAA-MM-JJ"))
                })
                .collect::<Result<Vec<_>>>()?;
            session.with_wizard(|w| days.iter().try_for_each(|day| w.pick_day(*day).map(|_| ())))?;
        }
        QuestionKind::IntegerCount => {
            let days: u32 = line
                .parse()
                .map_err(|_| anyhow!("Tapez un nombre de jours"))?;
            session.with_wizard(|w| w.select_day_count(days))?;
        }
        QuestionKind::GeoPoint => {
            let point = match line.parse::<Coordinate>() {
                Ok(point) => point,
                Err(_) => match session.search_departure(line).await {
                    Ok(region) => region.center(),
                    Err(TripError::PlaceNotFound { .. }) => return Err(anyhow!("Lieu non trouvé")),
                    Err(e) => return Err(e.into()),
                },
            };
            session.with_wizard(|w| w.set_departure(point))?;
        }
    }
    Ok(())
}

fn choice_from(question: &Question, token: &str) -> Result<&'static str> {
    token
        .parse::<usize>()
        .ok()
        .and_then(|position| question.choice_at(position))
        .map(|choice| choice.value)
        .ok_or_else(|| anyhow!("Option inconnue '{token}'"))
}

/// Markdown for the current screen.
fn screen(session: &TripSession) -> String {
    let wizard = session.wizard();
    let step = wizard.step();
    let mut out = String::new();

    if step == Step::Results {
        let _ = writeln!(out, "# {}\n", step.title());
        let itineraries = session
            .results()
            .map(|view| view.itineraries().to_vec())
            .unwrap_or_default();
        let _ = write!(out, "{}", Itineraries(itineraries));
        let _ = writeln!(out, "\n*Numéro : choisir | b : modifier mes réponses*");
        return out;
    }

    let total = Step::LAST.index().map(|last| last + 1).unwrap_or_default();
    match step.index() {
        Some(index) => {
            let _ = writeln!(out, "# Étape {}/{total} : {}\n", index + 1, step.title());
        }
        None => {
            let _ = writeln!(out, "# {}\n", step.title());
        }
    }
    if let Some(notice) = step.notice() {
        let _ = writeln!(out, "{notice}\n");
    }

    if let Some(question) = step.question() {
        question_body(&mut out, &wizard, question);
    }

    let _ = writeln!(out, "\n{HINT}");
    out
}

/// Options, current answer and input hint for `question`.
fn question_body(out: &mut String, wizard: &Wizard, question: &Question) {
    let answers = wizard.answers();
    match question.kind {
        QuestionKind::SingleChoice | QuestionKind::Branch => {
            let current = answers.single(question.key);
            for (position, choice) in question.options.iter().enumerate() {
                let mark = if current == Some(choice.value) { "x" } else { " " };
                let _ = writeln!(out, "[{mark}] {}. {}", position + 1, choice.label);
            }
        }
        QuestionKind::MultiChoice => {
            let current = answers.multi(question.key);
            for (position, choice) in question.options.iter().enumerate() {
                let selected = current.is_some_and(|set| set.contains(choice.value));
                let mark = if selected { "x" } else { " " };
                let _ = writeln!(out, "[{mark}] {}. {}", position + 1, choice.label);
            }
            let _ = writeln!(out, "\n*Plusieurs choix possibles, séparés par des virgules.*");
        }
        QuestionKind::DateRange => {
            let marked = wizard.marked_days();
            match (marked.first(), marked.last()) {
                (Some(first), Some(last)) if last.ending_day => {
                    let _ = writeln!(
                        out,
                        "Sélection : du {} au {} ({} jours marqués)",
                        first.date,
                        last.date,
                        marked.len()
                    );
                }
                (Some(first), _) => {
                    let _ = writeln!(out, "Départ : {}", first.date);
                }
                _ => {}
            }
            let _ = writeln!(out, "*Tapez une date AAAA-MM-JJ, le départ puis le retour.*");
        }
        QuestionKind::IntegerCount => {
            let options = wizard.day_count_options();
            match (options.first(), options.last()) {
                (Some(first), Some(last)) => {
                    let _ = writeln!(out, "Entre {first} et {last} jours.");
                }
                _ => {
                    let _ = writeln!(out, "La période choisie est trop courte.");
                }
            }
            if let Some(count) = answers.count(question.key) {
                let _ = writeln!(out, "Sélection : {count} jours");
            }
        }
        QuestionKind::GeoPoint => {
            let _ = writeln!(out, "Carte centrée sur {}", wizard.region().center());
            if let Some(point) = answers.point(question.key) {
                let _ = writeln!(out, "Départ : {point}");
            }
            let _ = writeln!(out, "*Tapez un lieu, ou des coordonnées 'latitude,longitude'.*");
        }
    }
}
