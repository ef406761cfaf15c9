use predicates::str::contains;

mod common;
use common::{add_regular, init_db, setup_test_db, stz};

#[test]
fn test_summary_half_hour_overtime() {
    let db_path = setup_test_db("summary_half_hour");
    init_db(&db_path);
    add_regular(&db_path, "2025-09-01", "Hauptsitz", "09:00", "17:30");

    stz()
        .args(["--db", &db_path, "summary", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Total overtime:        +0.50"))
        .stdout(contains("Total work hours:      8.50"));
}

#[test]
fn test_summary_vacation_precedence() {
    let db_path = setup_test_db("summary_vacation_precedence");
    init_db(&db_path);

    // vacation and a regular entry on the same day: the day is off
    stz()
        .args(["--db", &db_path, "add", "2025-09-01", "Urlaub"])
        .assert()
        .success();
    add_regular(&db_path, "2025-09-01", "Hauptsitz", "09:00", "17:00");

    stz()
        .args(["--db", &db_path, "summary", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Total overtime:        +0.00"))
        .stdout(contains("Total work hours:      0.00"))
        .stdout(contains("Vacation: 1"));
}

#[test]
fn test_summary_on_call_is_pure_overtime() {
    let db_path = setup_test_db("summary_on_call");
    init_db(&db_path);

    stz()
        .args([
            "--db",
            &db_path,
            "add",
            "2025-09-05",
            "Bereitschaft",
            "--deployment",
            "Leitstelle,22:00,23:00",
        ])
        .assert()
        .success();

    stz()
        .args(["--db", &db_path, "summary", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Total overtime:        +1.00"))
        .stdout(contains("On-call: 1"));
}

#[test]
fn test_summary_base_overtime_correction() {
    let db_path = setup_test_db("summary_base_correction");
    init_db(&db_path);
    add_regular(&db_path, "2025-09-01", "Hauptsitz", "09:00", "18:00");

    stz()
        .args(["--db", &db_path, "config", "--base-overtime", "-2.5"])
        .assert()
        .success();

    stz()
        .args(["--db", &db_path, "summary", "--month", "2025-09"])
        .assert()
        .success()
        // +1.00 worked, -2.50 carried over
        .stdout(contains("Total overtime:        -1.50"))
        .stdout(contains("Overtime in September 2025:   +1.00"));
}

#[test]
fn test_summary_month_window() {
    let db_path = setup_test_db("summary_month_window");
    init_db(&db_path);
    add_regular(&db_path, "2025-08-29", "Hauptsitz", "09:00", "18:00");
    add_regular(&db_path, "2025-09-01", "Hauptsitz", "09:00", "17:30");

    stz()
        .args(["--db", &db_path, "summary", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("Total overtime:        +1.50"))
        .stdout(contains("Overtime in September 2025:   +0.50"));
}

#[test]
fn test_summary_rejects_bad_month() {
    let db_path = setup_test_db("summary_bad_month");
    init_db(&db_path);

    stz()
        .args(["--db", &db_path, "summary", "--month", "September"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}
