use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONTACT: [&str; 8] = [
    "--name",
    "Jane O'Brien",
    "--title",
    "Head of Things",
    "--email",
    "jane@example.com",
    "--mobile",
    "0412 345 678",
];

fn sigcraft(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sigcraft").unwrap();
    cmd.env("SIGCRAFT_HOME", home.path())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_generate_fragment() {
    let home = TempDir::new().unwrap();
    sigcraft(&home)
        .args(["generate", "--fragment", "-l", "full", "--date", "2025-06-01"])
        .args(CONTACT)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<table"))
        .stdout(predicate::str::contains("Jane O&#39;Brien"))
        .stdout(predicate::str::contains("href=\"tel:+61412345678\""))
        .stdout(predicate::str::contains("<!DOCTYPE").not())
        .stderr(predicate::str::contains("Theme: Standard (normal)"));
}

#[test]
fn test_generate_document_follows_season() {
    let home = TempDir::new().unwrap();
    sigcraft(&home)
        .args(["generate", "-l", "compact", "--date", "2025-12-10"])
        .args(CONTACT)
        .assert()
        .success()
        .stdout(predicate::str::contains("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("logo-transparent.png"))
        .stderr(predicate::str::contains("Theme: Christmas"));
}

#[test]
fn test_generate_plain_ignores_season() {
    let home = TempDir::new().unwrap();
    sigcraft(&home)
        .args(["generate", "--plain", "--date", "2025-12-10"])
        .args(CONTACT)
        .assert()
        .success()
        .stdout(predicate::str::contains("logo-transparent.png").not())
        .stderr(predicate::str::contains("Theme: none (plain)"));
}

#[test]
fn test_missing_fields_fail() {
    let home = TempDir::new().unwrap();
    sigcraft(&home)
        .args(["generate", "--name", "Jane", "--email", "jane@example.com"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Missing required fields: jobTitle, mobile",
        ));
}

#[test]
fn test_invalid_email_fails_before_copy() {
    let home = TempDir::new().unwrap();
    sigcraft(&home)
        .args([
            "copy", "--name", "Jane", "--title", "CTO", "--email", "not-an-email", "--mobile",
            "0412345678",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid email address format: not-an-email",
        ));
}

#[test]
fn test_export_writes_configured_files() {
    let home = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    sigcraft(&home)
        .args(["config", "compact-filename", "reply.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("compact-filename set to reply.html"));

    sigcraft(&home)
        .arg("export")
        .arg("--dir")
        .arg(out.path())
        .args(CONTACT)
        .assert()
        .success()
        .stdout(predicate::str::contains("New email signature saved to"))
        .stdout(predicate::str::contains("Reply signature saved to"));

    let full = std::fs::read_to_string(out.path().join("signature-new-email.html")).unwrap();
    assert!(full.starts_with("<!DOCTYPE html>"));
    assert!(out.path().join("reply.html").exists());
}

#[test]
fn test_theme_preferences_round_trip_through_prefs() {
    let home = TempDir::new().unwrap();

    sigcraft(&home)
        .args(["theme", "christmas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to christmas"));

    sigcraft(&home)
        .args(["prefs", "--date", "2025-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Christmas (christmas)"))
        .stdout(predicate::str::contains("Auto-detect: off"));

    sigcraft(&home)
        .args(["generate", "--fragment", "-l", "full", "--date", "2025-06-01"])
        .args(CONTACT)
        .assert()
        .success()
        .stdout(predicate::str::contains("logo-transparent.png"));

    sigcraft(&home).arg("reset").assert().success();
    assert!(!home.path().join("preferences.json").exists());

    sigcraft(&home)
        .args(["prefs", "--date", "2025-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored:     auto"))
        .stdout(predicate::str::contains("Auto-detect: on"));
}

#[test]
fn test_unavailable_theme_warns() {
    let home = TempDir::new().unwrap();
    sigcraft(&home)
        .args(["theme", "easter"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Theme 'easter' is not available, using Standard",
        ))
        .stderr(predicate::str::is_empty());

    sigcraft(&home)
        .args(["generate", "--fragment", "-l", "full"])
        .args(CONTACT)
        .assert()
        .success()
        .stderr(
            predicate::str::contains("not available")
                .count(1)
                .and(predicate::str::contains("Theme: Standard")),
        );
}

#[test]
fn test_invalid_decoration_level_warns_and_keeps_prefs() {
    let home = TempDir::new().unwrap();
    sigcraft(&home)
        .args(["decoration", "sparkly"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid decoration level: sparkly. Valid levels: minimal, normal, festive",
        ))
        .stderr(predicate::str::is_empty());
    assert!(!home.path().join("preferences.json").exists());

    sigcraft(&home)
        .args(["decoration", "festive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Decoration level set to festive (1)"));
}

#[test]
fn test_themes_lists_available_only() {
    let home = TempDir::new().unwrap();
    sigcraft(&home)
        .args(["themes", "--date", "2025-12-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* Christmas"))
        .stdout(predicate::str::contains("in season"))
        .stdout(predicate::str::contains("Easter").not())
        .stdout(predicate::str::contains("Auto-detect is on"));
}

#[test]
fn test_config_show_and_unknown_key() {
    let home = TempDir::new().unwrap();
    sigcraft(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default-website"))
        .stdout(predicate::str::contains("www.example.com"));

    sigcraft(&home)
        .args(["config", "phone-prefix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+61"));

    sigcraft(&home)
        .args(["config", "nope", "x"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unknown config key: nope"));
}

#[test]
fn test_broken_catalog_is_reported() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("themes.json"), r#"{ "themes": [] }"#).unwrap();
    std::fs::write(
        home.path().join("config.json"),
        r#"{ "catalog": "themes.json" }"#,
    )
    .unwrap();

    sigcraft(&home)
        .arg("themes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid theme catalog"));
}

#[test]
fn test_bad_date_is_rejected() {
    let home = TempDir::new().unwrap();
    sigcraft(&home)
        .args(["themes", "--date", "12/10/2025"])
        .assert()
        .failure();
}

#[test]
fn test_copy_rejects_both_layouts() {
    let home = TempDir::new().unwrap();
    sigcraft(&home)
        .args(["copy", "-l", "both"])
        .args(CONTACT)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'both'"));
}
