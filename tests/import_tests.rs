use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{add_regular, init_db, setup_test_db, stz, temp_out};

const SAMPLE_DOC: &str = r#"{
  "employeeName": "Anna Schmidt",
  "savedLocations": ["Hauptsitz", "Werk Nord"],
  "baseOvertime": -2.5,
  "entries": [
    {
      "id": 1,
      "date": "2025-09-01",
      "location": "Hauptsitz",
      "startTime": "09:00",
      "endTime": "17:30",
      "isChildSick": false,
      "deployments": []
    },
    {
      "id": 2,
      "date": "2025-09-05",
      "location": "Bereitschaft",
      "startTime": "",
      "endTime": "",
      "isChildSick": false,
      "deployments": [
        { "id": 1, "location": "Leitstelle", "startTime": "22:00", "endTime": "23:00" }
      ]
    }
  ]
}"#;

#[test]
fn test_import_replaces_document() {
    let db_path = setup_test_db("import_replace");
    init_db(&db_path);
    add_regular(&db_path, "2025-08-01", "Altstandort", "09:00", "17:00");

    let file = temp_out("import_replace", "json");
    fs::write(&file, SAMPLE_DOC).expect("write sample doc");

    stz()
        .args(["--db", &db_path, "import", &file, "--force"])
        .assert()
        .success()
        .stdout(contains("Imported 2 entries"));

    stz()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-05"))
        .stdout(contains("2025-08-01").not());

    stz()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("Anna Schmidt"));

    fs::remove_file(&file).ok();
}

#[test]
fn test_import_applies_base_overtime() {
    let db_path = setup_test_db("import_base_overtime");
    init_db(&db_path);

    let file = temp_out("import_base_overtime", "json");
    fs::write(&file, SAMPLE_DOC).expect("write sample doc");

    stz()
        .args(["--db", &db_path, "import", &file, "--force"])
        .assert()
        .success();

    // 0.50 regular overtime + 1.00 on-call - 2.50 carried over
    stz()
        .args(["--db", &db_path, "summary", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Total overtime:        -1.00"));

    fs::remove_file(&file).ok();
}

#[test]
fn test_import_rejects_missing_entries_key() {
    let db_path = setup_test_db("import_missing_entries");
    init_db(&db_path);
    add_regular(&db_path, "2025-09-01", "Hauptsitz", "09:00", "17:00");

    let file = temp_out("import_missing_entries", "json");
    fs::write(&file, r#"{"employeeName": "Anna Schmidt"}"#).expect("write doc");

    stz()
        .args(["--db", &db_path, "import", &file, "--force"])
        .assert()
        .failure()
        .stderr(contains("entries"));

    // existing document untouched
    stz()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"));

    fs::remove_file(&file).ok();
}

#[test]
fn test_import_rejects_malformed_json() {
    let db_path = setup_test_db("import_malformed");
    init_db(&db_path);

    let file = temp_out("import_malformed", "json");
    fs::write(&file, "{not json").expect("write doc");

    stz()
        .args(["--db", &db_path, "import", &file, "--force"])
        .assert()
        .failure()
        .stderr(contains("malformed JSON"));

    fs::remove_file(&file).ok();
}

#[test]
fn test_import_defaults_optional_fields() {
    let db_path = setup_test_db("import_lenient");
    init_db(&db_path);

    // only the entries array; everything else falls back to defaults
    let file = temp_out("import_lenient", "json");
    fs::write(
        &file,
        r#"{"entries": [{"date": "2025-09-02", "location": "Urlaub"}]}"#,
    )
    .expect("write doc");

    stz()
        .args(["--db", &db_path, "import", &file, "--force"])
        .assert()
        .success()
        .stdout(contains("Imported 1 entries"));

    stz()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("vacation"));

    fs::remove_file(&file).ok();
}

#[test]
fn test_import_requires_confirmation() {
    let db_path = setup_test_db("import_confirm");
    init_db(&db_path);
    add_regular(&db_path, "2025-08-01", "Altstandort", "09:00", "17:00");

    let file = temp_out("import_confirm", "json");
    fs::write(&file, SAMPLE_DOC).expect("write sample doc");

    stz()
        .args(["--db", &db_path, "import", &file])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Import cancelled"));

    stz()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("2025-08-01"))
        .stdout(contains("2025-09-01").not());

    fs::remove_file(&file).ok();
}

#[test]
fn test_export_import_round_trip() {
    let db_path = setup_test_db("round_trip_src");
    init_db(&db_path);
    add_regular(&db_path, "2025-09-01", "Hauptsitz", "09:00", "17:30");
    stz()
        .args(["--db", &db_path, "config", "--name", "Anna Schmidt"])
        .assert()
        .success();

    let file = temp_out("round_trip", "json");
    stz()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &file,
        ])
        .assert()
        .success();

    let db2 = setup_test_db("round_trip_dst");
    init_db(&db2);
    stz()
        .args(["--db", &db2, "import", &file, "--force"])
        .assert()
        .success();

    stz()
        .args(["--db", &db2, "summary", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Anna Schmidt"))
        .stdout(contains("Total overtime:        +0.50"));

    fs::remove_file(&file).ok();
}
