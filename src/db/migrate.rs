use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Schema steps, applied in order. Each one is recorded in `log` as
/// `migration_applied` with its version as target, so it runs only once.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250301_0001_create_users",
        "Created users table",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            email         TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at    TEXT NOT NULL
        );
        "#,
    ),
    (
        "20250301_0002_create_cravings",
        "Created cravings table",
        r#"
        CREATE TABLE IF NOT EXISTS cravings (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id        INTEGER REFERENCES users(id),
            craving_item   TEXT NOT NULL CHECK(length(trim(craving_item)) > 0),
            created_at     TEXT NOT NULL,
            action_taken   TEXT NOT NULL DEFAULT '',
            did_eat_craved INTEGER NOT NULL DEFAULT 0 CHECK(did_eat_craved IN (0,1)),
            success        INTEGER NOT NULL DEFAULT 1 CHECK(success IN (0,1))
        );
        "#,
    ),
    (
        "20250315_0003_index_cravings_user_created",
        "Indexed cravings by owner and timestamp",
        r#"
        CREATE INDEX IF NOT EXISTS idx_cravings_created ON cravings(created_at);
        CREATE INDEX IF NOT EXISTS idx_cravings_user_created ON cravings(user_id, created_at);
        "#,
    ),
];

/// Ensure that the `log` table exists; migration markers live in it.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare_cached(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, version: &str, description: &str, sql: &str) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, description],
    )?;
    tx.commit()
}

/// Versions not yet recorded as applied.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;
    let mut out = Vec::new();
    for (version, _, _) in MIGRATIONS {
        if !is_applied(conn, version)? {
            out.push(*version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db(). Quiet when the schema is already current.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, description, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }
        apply(conn, version, description, sql)?;
        success(format!("Migration applied: {version} → {description}"));
        applied += 1;
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_run_once() {
        let conn = Connection::open_in_memory().unwrap();

        assert_eq!(pending_migrations(&conn).unwrap().len(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&conn).unwrap(), MIGRATIONS.len());
        assert_eq!(run_pending_migrations(&conn).unwrap(), 0);
        assert!(pending_migrations(&conn).unwrap().is_empty());
    }
}
