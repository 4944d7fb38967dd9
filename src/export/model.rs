use crate::models::CravingEvent;
use serde::Serialize;

/// Flat row written by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CravingExport {
    pub id: i64,
    pub created_at: String,
    pub craving_item: String,
    pub action_taken: String,
    pub did_eat_craved: bool,
    pub success: bool,
}

impl From<&CravingEvent> for CravingExport {
    fn from(ev: &CravingEvent) -> Self {
        Self {
            id: ev.id,
            created_at: ev.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            craving_item: ev.craving_item.clone(),
            action_taken: ev.action_taken.clone(),
            did_eat_craved: ev.did_eat_craved,
            success: ev.success,
        }
    }
}
