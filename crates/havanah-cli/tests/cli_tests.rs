use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn havanah_cmd() -> Command {
    let mut cmd = Command::cargo_bin("havanah").expect("Failed to find havanah binary");
    cmd.arg("--no-color");
    cmd
}

/// Answers for a precise-date trip from Montpellier in one's own van,
/// picking the first option of every taste question, then the first
/// itinerary.
fn full_questionnaire() -> String {
    let mut lines = vec![
        "1", "", // precise dates
        "2030-07-01", "2030-07-08", "", //
        "43.6108,3.8767", "", // departure
        "1", "", // own van
        "2", "", // companions
    ];
    for _ in 0..8 {
        lines.extend(["1", ""]);
    }
    lines.push(""); // no constraints
    lines.push("1"); // first itinerary
    let mut script = lines.join("\n");
    script.push('\n');
    script
}

#[test]
fn test_cli_list_empty_trips() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    havanah_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trips found."));
}

#[test]
fn test_cli_default_command_lists_trips() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    havanah_cmd()
        .args(["--database-file", db_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trips found."));
}

#[test]
fn test_cli_questions() {
    havanah_cmd()
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Quand souhaites-tu partir ?"))
        .stdout(predicate::str::contains("1. J'ai une date précise"))
        .stdout(predicate::str::contains("(optionnel)"));
}

#[test]
fn test_cli_wizard_saves_selected_trip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    havanah_cmd()
        .args(["--database-file", db_arg, "wizard"])
        .write_stdin(full_questionnaire())
        .assert()
        .success()
        .stdout(predicate::str::contains("Voici vos itinéraires personnalisés"))
        .stdout(predicate::str::contains("Côte Méditerranéenne"))
        .stdout(predicate::str::contains("Saved trip with ID: 1"))
        .stdout(predicate::str::contains("Questionnaire fermé."));

    havanah_cmd()
        .args(["--database-file", db_arg, "trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 1)"));

    havanah_cmd()
        .args(["--database-file", db_arg, "trip", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1."))
        .stdout(predicate::str::contains("## Preferences"));
}

#[test]
fn test_cli_list_trips_in_period() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    havanah_cmd()
        .args(["--database-file", db_arg, "wizard"])
        .write_stdin(full_questionnaire())
        .assert()
        .success();

    havanah_cmd()
        .args([
            "--database-file",
            db_arg,
            "trip",
            "list",
            "--from",
            "2030-07-05",
            "--to",
            "2030-07-10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ID: 1)"));

    havanah_cmd()
        .args([
            "--database-file",
            db_arg,
            "trip",
            "list",
            "--from",
            "2030-08-01",
            "--to",
            "2030-08-31",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trips found."));
}

#[test]
fn test_cli_list_period_needs_both_bounds() {
    havanah_cmd()
        .args(["trip", "list", "--from", "2030-07-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--to"));
}

#[test]
fn test_cli_wizard_no_save() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    havanah_cmd()
        .args(["--database-file", db_arg, "wizard", "--no-save"])
        .write_stdin(full_questionnaire())
        .assert()
        .success()
        .stdout(predicate::str::contains("Itinéraire 1 sélectionné"));

    havanah_cmd()
        .args(["--database-file", db_arg, "trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No trips found."));
}

#[test]
fn test_cli_wizard_reports_rejected_input() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    havanah_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "wizard"])
        .write_stdin("\n9\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error:"))
        .stdout(predicate::str::contains("Option inconnue '9'"))
        .stdout(predicate::str::contains("Questionnaire fermé."));
}

#[test]
fn test_cli_delete_requires_confirmation() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    havanah_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "trip",
            "delete",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("--confirm"));
}

#[test]
fn test_cli_delete_missing_trip_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    havanah_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "trip",
            "delete",
            "42",
            "--confirm",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Trip with ID 42 not found"));
}

#[test]
fn test_cli_route_unknown_itinerary() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    havanah_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "route", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Itinerary with ID 9 not found"))
        .stdout(predicate::str::contains("Circuit Culturel"));
}

#[test]
fn test_cli_route_requires_api_key() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    havanah_cmd()
        .env_remove("GRAPHHOPPER_API_KEY")
        .args(["--database-file", db_path.to_str().unwrap(), "route", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GraphHopper API key is required"));
}
