use predicates::str::contains;

mod common;
use common::{cravings, log_craving, run, setup_test_db};

#[test]
fn test_register_and_status() {
    let db = setup_test_db();

    cravings()
        .args([
            "--db",
            &db.path,
            "register",
            "me@example.com",
            "--password",
            "pw",
            "--confirm",
            "pw",
        ])
        .assert()
        .success()
        .stdout(contains("Account created, me@example.com"));

    assert!(run(&db, &["status"]).contains("Signed in as"));
}

#[test]
fn test_register_password_mismatch() {
    let db = setup_test_db();

    cravings()
        .args([
            "--db",
            &db.path,
            "register",
            "me@example.com",
            "--password",
            "pw",
            "--confirm",
            "other",
        ])
        .assert()
        .success()
        .stdout(contains("Passwords do not match"));

    assert!(run(&db, &["status"]).contains("Anonymous session"));
}

#[test]
fn test_bad_login_sets_no_identity() {
    let db = setup_test_db();
    run(
        &db,
        &["register", "me@example.com", "--password", "pw", "--confirm", "pw"],
    );
    run(&db, &["logout"]);

    cravings()
        .args(["--db", &db.path, "login", "me@example.com", "--password", "nope"])
        .assert()
        .success()
        .stderr(contains("invalid email or password"));

    assert!(run(&db, &["status"]).contains("Anonymous session"));
}

#[test]
fn test_history_is_per_user() {
    let db = setup_test_db();

    run(
        &db,
        &["register", "a@example.com", "--password", "pw", "--confirm", "pw"],
    );
    log_craving(&db, "chips", &["--pick", "1"]);
    run(&db, &["logout"]);

    run(
        &db,
        &["register", "b@example.com", "--password", "pw", "--confirm", "pw"],
    );
    let out = run(&db, &["history"]);
    assert!(out.contains("No cravings logged yet"));
    run(&db, &["logout"]);

    // signed out: a's craving is not visible anonymously
    let out = run(&db, &["history"]);
    assert!(out.contains("No cravings logged yet"));
    assert!(!run(&db, &["insights"]).contains("Total cravings"));

    run(&db, &["login", "a@example.com", "--password", "pw"]);
    let out = run(&db, &["history"]);
    assert!(out.contains("chips"));
}

#[test]
fn test_logout_is_refused_while_a_craving_is_pending() {
    let db = setup_test_db();
    run(
        &db,
        &["register", "a@example.com", "--password", "pw", "--confirm", "pw"],
    );
    run(&db, &["crave", "chips"]);

    cravings()
        .args(["--db", &db.path, "logout"])
        .assert()
        .success()
        .stdout(contains("Cannot sign out while a craving is awaiting an action"));

    let status = run(&db, &["status"]);
    assert!(status.contains("Signed in as"));
    assert!(status.contains("chips"));
}

#[test]
fn test_prompted_password_warns_it_is_visible() {
    let db = setup_test_db();

    cravings()
        .args(["--db", &db.path, "register", "me@example.com"])
        .write_stdin("pw\npw\n")
        .assert()
        .success()
        .stdout(contains("input is visible"))
        .stdout(contains("Account created, me@example.com"));
}

#[test]
fn test_logout_when_anonymous_is_refused() {
    let db = setup_test_db();

    cravings()
        .args(["--db", &db.path, "logout"])
        .assert()
        .success()
        .stdout(contains("Cannot sign out"));
}
