//! SQLite implementation of the gateway `Repository`.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::{log, queries};
use crate::errors::{AppError, AppResult};
use crate::gateway::Repository;
use crate::models::{CravingEvent, Identity, NewCravingEvent};

pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    /// Open the database and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

impl Repository for SqliteRepository {
    fn insert_event(&mut self, event: &NewCravingEvent) -> AppResult<CravingEvent> {
        let id = queries::insert_event(&self.pool.conn, event)?;
        Ok(queries::load_event(&self.pool.conn, id)?)
    }

    fn list_events(&mut self, user_id: Option<i64>) -> AppResult<Vec<CravingEvent>> {
        Ok(queries::load_events(&self.pool.conn, user_id)?)
    }

    fn create_user(&mut self, email: &str, password_hash: &str) -> AppResult<Identity> {
        queries::insert_user(&self.pool.conn, email, password_hash).map_err(|e| match e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                AppError::Auth(format!("an account for {email} already exists"))
            }
            other => AppError::Db(other),
        })
    }

    fn find_user(&mut self, email: &str) -> AppResult<Option<(Identity, String)>> {
        Ok(queries::find_user_by_email(&self.pool.conn, email)?)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        log::audit(&self.pool.conn, operation, target, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn repo() -> SqliteRepository {
        SqliteRepository::open(":memory:").unwrap()
    }

    #[test]
    fn insert_and_list_newest_first() {
        let mut repo = repo();
        let early = Local.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
        let late = Local.with_ymd_and_hms(2025, 1, 10, 21, 30, 0).unwrap();

        repo.insert_event(&NewCravingEvent::new(None, "chips", "Roasted almonds", false).at(early))
            .unwrap();
        repo.insert_event(&NewCravingEvent::new(None, "cake", "Fresh berries", true).at(late))
            .unwrap();

        let events = repo.list_events(None).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].craving_item, "cake");
        assert_eq!(events[0].created_at, late);
        assert!(!events[0].success);
        assert_eq!(events[1].craving_item, "chips");
        assert!(events[1].success);
    }

    #[test]
    fn list_by_owner() {
        let mut repo = repo();
        let me = repo.create_user("me@example.com", "hash").unwrap();
        let other = repo.create_user("other@example.com", "hash").unwrap();

        repo.insert_event(&NewCravingEvent::new(Some(me.id), "pizza", "Chickpea salad", false))
            .unwrap();
        repo.insert_event(&NewCravingEvent::new(Some(other.id), "candy", "Fresh berries", false))
            .unwrap();

        repo.insert_event(&NewCravingEvent::new(None, "chips", "Water", false))
            .unwrap();

        let mine = repo.list_events(Some(me.id)).unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].user_id, Some(me.id));

        let anonymous = repo.list_events(None).unwrap();
        assert_eq!(anonymous.len(), 1);
        assert_eq!(anonymous[0].craving_item, "chips");
        assert!(anonymous[0].user_id.is_none());
    }

    #[test]
    fn duplicate_email_is_an_auth_error() {
        let mut repo = repo();
        repo.create_user("me@example.com", "hash").unwrap();
        assert!(matches!(
            repo.create_user("me@example.com", "hash"),
            Err(AppError::Auth(_))
        ));
    }

    #[test]
    fn find_user_returns_hash() {
        let mut repo = repo();
        let me = repo.create_user("me@example.com", "the-hash").unwrap();

        let (found, hash) = repo.find_user("me@example.com").unwrap().unwrap();
        assert_eq!(found, me);
        assert_eq!(hash, "the-hash");
        assert!(repo.find_user("nobody@example.com").unwrap().is_none());
    }

    #[test]
    fn audit_lines_are_stored() {
        let mut repo = repo();
        repo.audit("save", "chips", "Logged").unwrap();

        let rows = log::load_log(&repo.pool().conn).unwrap();
        let last = rows.last().unwrap();
        assert_eq!(last.2, "save");
        assert_eq!(last.3, "chips");
    }
}
