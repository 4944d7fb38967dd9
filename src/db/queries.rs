use crate::errors::AppError;
use crate::models::{CravingEvent, Identity, NewCravingEvent};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Timestamps are stored as RFC 3339 in UTC so that text order equals time order.
pub fn to_db_timestamp(ts: &DateTime<Local>) -> String {
    ts.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn from_db_timestamp(raw: &str) -> Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::Validation(format!("Invalid timestamp: {raw}"))),
            )
        })
}

pub fn map_row(row: &Row) -> Result<CravingEvent> {
    let created_raw: String = row.get("created_at")?;

    Ok(CravingEvent {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        craving_item: row.get("craving_item")?,
        created_at: from_db_timestamp(&created_raw)?,
        action_taken: row.get("action_taken")?,
        did_eat_craved: row.get::<_, i32>("did_eat_craved")? == 1,
        success: row.get::<_, i32>("success")? == 1,
    })
}

/// Insert a prepared event; `created_at` must already be set.
pub fn insert_event(conn: &Connection, ev: &NewCravingEvent) -> Result<i64> {
    let created_at = ev.created_at.unwrap_or_else(Local::now);

    conn.execute(
        "INSERT INTO cravings (user_id, craving_item, created_at, action_taken, did_eat_craved, success)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            ev.user_id,
            ev.craving_item,
            to_db_timestamp(&created_at),
            ev.action_taken,
            if ev.did_eat_craved { 1 } else { 0 },
            if ev.success() { 1 } else { 0 },
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_event(conn: &Connection, id: i64) -> Result<CravingEvent> {
    conn.query_row("SELECT * FROM cravings WHERE id = ?1", [id], map_row)
}

/// Rows owned by `user_id`, or the anonymous rows when `None`. Newest first.
pub fn load_events(conn: &Connection, user_id: Option<i64>) -> Result<Vec<CravingEvent>> {
    let mut out = Vec::new();

    match user_id {
        Some(uid) => {
            let mut stmt = conn.prepare_cached(
                "SELECT * FROM cravings
                 WHERE user_id = ?1
                 ORDER BY created_at DESC, id DESC",
            )?;
            for r in stmt.query_map([uid], map_row)? {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare_cached(
                "SELECT * FROM cravings
                 WHERE user_id IS NULL
                 ORDER BY created_at DESC, id DESC",
            )?;
            for r in stmt.query_map([], map_row)? {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn insert_user(conn: &Connection, email: &str, password_hash: &str) -> Result<Identity> {
    conn.execute(
        "INSERT INTO users (email, password_hash, created_at) VALUES (?1, ?2, ?3)",
        params![email, password_hash, to_db_timestamp(&Local::now())],
    )?;
    Ok(Identity::new(conn.last_insert_rowid(), email))
}

pub fn find_user_by_email(conn: &Connection, email: &str) -> Result<Option<(Identity, String)>> {
    conn.query_row(
        "SELECT id, email, password_hash FROM users WHERE email = ?1",
        [email],
        |row| {
            Ok((
                Identity::new(row.get(0)?, row.get::<_, String>(1)?),
                row.get::<_, String>(2)?,
            ))
        },
    )
    .optional()
}
