use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_reference_day, init_db_with_user, rtt, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    rtt("cli_init")
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    rtt("cli_init")
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("20250301_0002_create_activities"));
}

#[test]
fn test_user_add() {
    let db_path = setup_test_db("cli_user");
    init_db_with_user("cli_user", &db_path);

    rtt("cli_user")
        .args(["--db", &db_path, "user", "add", "bob", "pw"])
        .assert()
        .success()
        .stdout(contains("created with id 2"));

    // usernames are unique
    rtt("cli_user")
        .args(["--db", &db_path, "user", "add", "bob", "other"])
        .assert()
        .failure();
}

#[test]
fn test_report_reference_day() {
    let db_path = setup_test_db("cli_report");
    init_db_with_user("cli_report", &db_path);
    add_reference_day("cli_report", &db_path, "2025-03-10");

    rtt("cli_report")
        .args([
            "--db",
            &db_path,
            "report",
            "1",
            "--date",
            "2025-03-10",
            "--now",
            "18:00",
        ])
        .assert()
        .success()
        .stdout(contains("2025-03-10"))
        .stdout(contains("work"))
        .stdout(contains("08:00"))
        .stdout(contains("+00:00"))
        .stdout(contains("BREAK").not())
        .stdout(contains("DAY_END").not());
}

#[test]
fn test_report_midday_is_on_schedule() {
    let db_path = setup_test_db("cli_midday");
    init_db_with_user("cli_midday", &db_path);
    add_reference_day("cli_midday", &db_path, "2025-03-11");

    // at 12:00: worked 09-10 and 11-12 = 2h, expected 09-12 = 3h
    rtt("cli_midday")
        .args([
            "--db",
            &db_path,
            "report",
            "1",
            "--date",
            "2025-03-11",
            "--now",
            "12:00",
        ])
        .assert()
        .success()
        .stdout(contains("-01:00"));
}

#[test]
fn test_list_most_recent_first() {
    let db_path = setup_test_db("cli_list");
    init_db_with_user("cli_list", &db_path);
    add_reference_day("cli_list", &db_path, "2025-03-12");

    let out = rtt("cli_list")
        .args(["--db", &db_path, "list", "1", "--date", "2025-03-12"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(out).unwrap();

    let pos = |needle: &str| text.find(needle).unwrap_or_else(|| panic!("missing {needle}"));
    assert!(pos("18:00") < pos("11:00"));
    assert!(pos("11:00") < pos("10:00"));
    assert!(pos("10:00") < pos("09:00"));
    assert!(text.contains("DAY_END"));
    assert!(text.contains("| cli"));
}

#[test]
fn test_empty_day_cannot_be_read() {
    let db_path = setup_test_db("cli_empty");
    init_db_with_user("cli_empty", &db_path);

    rtt("cli_empty")
        .args(["--db", &db_path, "list", "1", "--date", "2025-01-01"])
        .assert()
        .failure()
        .stderr(contains("Cannot read activities"));
}

#[test]
fn test_add_rejects_bad_time() {
    let db_path = setup_test_db("cli_badtime");
    init_db_with_user("cli_badtime", &db_path);

    rtt("cli_badtime")
        .args([
            "--db", &db_path, "add", "1", "work", "--date", "2025-03-10", "--at", "9am",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_add_rejects_unknown_user() {
    let db_path = setup_test_db("cli_nouser");
    init_db_with_user("cli_nouser", &db_path);

    rtt("cli_nouser")
        .args([
            "--db", &db_path, "add", "7", "work", "--date", "2025-03-10", "--at", "09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Unknown user_id 7"));
}

#[test]
fn test_db_check() {
    let db_path = setup_test_db("cli_db");
    init_db_with_user("cli_db", &db_path);

    rtt("cli_db")
        .args(["--db", &db_path, "db", "--check", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("Vacuum completed"));
}
