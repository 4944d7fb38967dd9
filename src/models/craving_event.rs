use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

/// One persisted craving record. Rows are written once and never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CravingEvent {
    pub id: i64,                    // ⇔ cravings.id
    pub user_id: Option<i64>,       // ⇔ cravings.user_id (NULL = anonymous)
    pub craving_item: String,       // ⇔ cravings.craving_item
    pub created_at: DateTime<Local>, // ⇔ cravings.created_at (TEXT, RFC 3339 UTC)
    pub action_taken: String,       // ⇔ cravings.action_taken
    pub did_eat_craved: bool,       // ⇔ cravings.did_eat_craved (0/1)
    pub success: bool,              // ⇔ cravings.success, always !did_eat_craved
}

impl CravingEvent {
    pub fn hour(&self) -> u32 {
        self.created_at.hour()
    }

    pub fn date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn when(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// A craving event that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCravingEvent {
    pub user_id: Option<i64>,
    pub craving_item: String,
    pub created_at: Option<DateTime<Local>>,
    pub action_taken: String,
    pub did_eat_craved: bool,
}

impl NewCravingEvent {
    pub fn new(
        user_id: Option<i64>,
        craving_item: impl Into<String>,
        action_taken: impl Into<String>,
        did_eat_craved: bool,
    ) -> Self {
        Self {
            user_id,
            craving_item: craving_item.into(),
            created_at: None,
            action_taken: action_taken.into(),
            did_eat_craved,
        }
    }

    /// Pin the timestamp instead of letting the gateway stamp it.
    pub fn at(mut self, created_at: DateTime<Local>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn success(&self) -> bool {
        !self.did_eat_craved
    }

    /// Trim the text fields, reject an empty craving and stamp `created_at` if missing.
    pub fn prepared(mut self, now: DateTime<Local>) -> AppResult<Self> {
        self.craving_item = self.craving_item.trim().to_string();
        self.action_taken = self.action_taken.trim().to_string();

        if self.craving_item.is_empty() {
            return Err(AppError::Validation(
                "Craving item must not be empty".to_string(),
            ));
        }

        self.created_at.get_or_insert(now);
        Ok(self)
    }

    /// Build the stored row once the store has assigned an id.
    pub fn into_event(self, id: i64) -> CravingEvent {
        let success = self.success();
        CravingEvent {
            id,
            user_id: self.user_id,
            craving_item: self.craving_item,
            created_at: self.created_at.unwrap_or_else(Local::now),
            action_taken: self.action_taken,
            did_eat_craved: self.did_eat_craved,
            success,
        }
    }
}
