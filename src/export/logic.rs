use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::CravingExport;
use crate::models::CravingEvent;
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `events` (already filtered to the session owner) to `file`.
    pub fn export(
        events: &[CravingEvent],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        if events.is_empty() {
            warning("No cravings to export; writing an empty file.");
        }

        let rows: Vec<CravingExport> = events.iter().map(CravingExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path),
            ExportFormat::Json => export_json(&rows, path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewCravingEvent;
    use chrono::{Local, TimeZone};

    fn sample() -> Vec<CravingEvent> {
        let at = Local.with_ymd_and_hms(2025, 4, 2, 16, 45, 0).unwrap();
        vec![
            NewCravingEvent::new(None, "chips", "Roasted almonds", false)
                .at(at)
                .into_event(1),
        ]
    }

    #[test]
    fn csv_has_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.csv");

        ExportLogic::export(&sample(), ExportFormat::Csv, &out.to_string_lossy(), false)
            .unwrap();

        let text = fs::read_to_string(&out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("id,created_at,craving_item,action_taken,did_eat_craved,success")
        );
        assert_eq!(
            lines.next(),
            Some("1,2025-04-02 16:45:00,chips,Roasted almonds,false,true")
        );
    }

    #[test]
    fn json_is_an_array_of_rows() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("out.json");

        ExportLogic::export(&sample(), ExportFormat::Json, &out.to_string_lossy(), true)
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value[0]["craving_item"], "chips");
        assert_eq!(value[0]["success"], true);
    }
}
