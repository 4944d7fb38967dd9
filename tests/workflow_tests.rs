use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{cravings, log_craving, run, setup_test_db, stored_rows};

#[test]
fn test_blank_craving_is_rejected() {
    let db = setup_test_db();

    cravings()
        .args(["--db", &db.path, "crave", "   "])
        .assert()
        .success()
        .stdout(contains("Please enter a craving first"));

    let status = run(&db, &["status"]);
    assert!(status.contains("Ready to log a craving"));
    assert_eq!(stored_rows(&db), 0);
}

#[test]
fn test_crave_shows_salty_alternatives() {
    let db = setup_test_db();

    cravings()
        .args(["--db", &db.path, "crave", "chips"])
        .assert()
        .success()
        .stdout(contains("What will you do about chips?"))
        .stdout(contains("🥜 Roasted almonds"))
        .stdout(contains("Other (specify)"));

    // rendering again does not write anything
    run(&db, &["status"]);
    run(&db, &["suggest"]);
    assert_eq!(stored_rows(&db), 0);
}

#[test]
fn test_choose_by_pick_saves_one_event() {
    let db = setup_test_db();

    log_craving(&db, "chips", &["--pick", "1"]);
    assert_eq!(stored_rows(&db), 1);

    cravings()
        .args(["--db", &db.path, "history"])
        .assert()
        .success()
        .stdout(contains("chips"))
        .stdout(contains("Roasted almonds"))
        .stdout(contains("resisted"));

    // a repeated confirm without a new craving is refused
    cravings()
        .args(["--db", &db.path, "choose", "--pick", "1"])
        .assert()
        .success()
        .stdout(contains("Cannot choose an action"));
    assert_eq!(stored_rows(&db), 1);
}

#[test]
fn test_choose_free_text_and_ate() {
    let db = setup_test_db();

    log_craving(&db, "chocolate cake", &["--ate", "had", "a", "slice"]);

    let conn = rusqlite::Connection::open(&db.path).unwrap();
    let (item, action, ate, success): (String, String, i32, i32) = conn
        .query_row(
            "SELECT craving_item, action_taken, did_eat_craved, success FROM cravings",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
        )
        .unwrap();

    assert_eq!(item, "chocolate cake");
    assert_eq!(action, "had a slice");
    assert_eq!((ate, success), (1, 0));
}

#[test]
fn test_pick_other_requires_text() {
    let db = setup_test_db();
    run(&db, &["crave", "pizza"]);

    cravings()
        .args(["--db", &db.path, "choose", "--pick", "5"])
        .assert()
        .success()
        .stdout(contains("Please specify what you did instead"));
    assert_eq!(stored_rows(&db), 0);

    run(&db, &["choose", "--pick", "5", "carrot", "sticks"]);
    let out = run(&db, &["history"]);
    assert!(out.contains("carrot sticks"));
}

#[test]
fn test_cancel_discards_without_writing() {
    let db = setup_test_db();

    run(&db, &["crave", "ice", "cream"]);
    cravings()
        .args(["--db", &db.path, "cancel"])
        .assert()
        .success()
        .stdout(contains("Craving discarded"));

    assert_eq!(stored_rows(&db), 0);
    assert!(run(&db, &["status"]).contains("Ready to log a craving"));
}

#[test]
fn test_draft_clear_and_submit() {
    let db = setup_test_db();

    run(&db, &["draft", "salted", "pretzels"]);
    assert!(run(&db, &["status"]).contains("Draft: salted pretzels"));

    run(&db, &["clear"]);
    cravings()
        .args(["--db", &db.path, "status"])
        .assert()
        .success()
        .stdout(contains("Draft:").not());

    run(&db, &["draft", "candy"]);
    cravings()
        .args(["--db", &db.path, "crave"])
        .assert()
        .success()
        .stdout(contains("Fresh berries"));
}

#[test]
fn test_clear_keeps_craving_in_flight() {
    let db = setup_test_db();

    run(&db, &["crave", "cheese"]);
    run(&db, &["draft", "something", "else"]);
    run(&db, &["clear"]);

    let status = run(&db, &["status"]);
    assert!(status.contains("What will you do about"));
    assert!(status.contains("cheese"));
    assert!(!status.contains("Draft:"));
}

#[test]
fn test_second_craving_is_refused_while_awaiting() {
    let db = setup_test_db();

    run(&db, &["crave", "chips"]);
    cravings()
        .args(["--db", &db.path, "crave", "cookies"])
        .assert()
        .success()
        .stdout(contains("Cannot log a new craving"));

    assert!(run(&db, &["status"]).contains("chips"));
}
