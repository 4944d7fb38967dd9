use predicates::str::contains;
use std::fs;

mod common;
use common::{cravings, log_craving, run, setup_test_db};

#[test]
fn test_export_csv() {
    let db = setup_test_db();
    log_craving(&db, "chips", &["--pick", "1"]);

    let out = db.file("cravings.csv");
    cravings()
        .args(["--db", &db.path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,created_at,craving_item,action_taken,did_eat_craved,success"));
    assert!(content.contains("chips,Roasted almonds,false,true"));
}

#[test]
fn test_export_json_force_overwrite() {
    let db = setup_test_db();
    log_craving(&db, "candy", &["--pick", "2"]);

    let out = db.file("cravings.json");
    fs::write(&out, "old").unwrap();

    run(&db, &["export", "--format", "json", "--file", &out, "--force"]);

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).expect("valid json");
    assert_eq!(value[0]["craving_item"], "candy");
    assert_eq!(value[0]["action_taken"], "Apple with peanut butter");
}

#[test]
fn test_log_and_db_info() {
    let db = setup_test_db();
    log_craving(&db, "pizza", &["--pick", "3"]);

    cravings()
        .args(["--db", &db.path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("save"));

    cravings()
        .args(["--db", &db.path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total cravings:"))
        .stdout(contains("Integrity check passed"));
}
