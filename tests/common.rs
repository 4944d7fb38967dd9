#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use tempfile::TempDir;

pub fn cravings() -> Command {
    cargo_bin_cmd!("cravings")
}

/// A fresh database inside its own temp dir; the dir lives as long as the value.
pub struct TestDb {
    _dir: TempDir,
    pub path: String,
}

impl TestDb {
    pub fn file(&self, name: &str) -> String {
        self._dir.path().join(name).to_string_lossy().to_string()
    }
}

/// Create a test database and run `init` on it (test mode: no config file).
pub fn setup_test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir
        .path()
        .join("cravings.sqlite")
        .to_string_lossy()
        .to_string();

    cravings()
        .args(["--db", &path, "--test", "init"])
        .assert()
        .success();

    TestDb { _dir: dir, path }
}

/// Run one command against `db` and return its stdout.
pub fn run(db: &TestDb, args: &[&str]) -> String {
    let out = cravings()
        .arg("--db")
        .arg(&db.path)
        .args(args)
        .output()
        .expect("run cravings");
    assert!(
        out.status.success(),
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).to_string()
}

/// Log a craving and confirm an action in one go.
pub fn log_craving(db: &TestDb, craving: &str, choose: &[&str]) {
    run(db, &["crave", craving]);
    let mut args = vec!["choose"];
    args.extend_from_slice(choose);
    run(db, &args);
}

/// Number of rows in the cravings table, read straight from SQLite.
pub fn stored_rows(db: &TestDb) -> i64 {
    let conn = rusqlite::Connection::open(&db.path).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM cravings", [], |r| r.get(0))
        .expect("count rows")
}
