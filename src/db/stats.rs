use crate::db::pool::DbPool;
use crate::db::queries::from_db_timestamp;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTALS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM cravings", [], |row| row.get(0))?;
    let users: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    println!(
        "{}• Total cravings:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );
    println!("{}• Accounts:{} {}", CYAN, RESET, users);

    //
    // 3) DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM cravings ORDER BY created_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT created_at FROM cravings ORDER BY created_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let first = first.map(|raw| from_db_timestamp(&raw)).transpose()?;
    let last = last.map(|raw| from_db_timestamp(&raw)).transpose()?;

    let fmt = |ts: &Option<chrono::DateTime<chrono::Local>>| {
        ts.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(&first));
    println!("    to:   {}", fmt(&last));

    //
    // 4) AVERAGE CRAVINGS/DAY
    //
    if let (Some(f), Some(l)) = (first, last) {
        let days = (l.date_naive() - f.date_naive()).num_days().max(1);
        let avg = count as f64 / days as f64;
        println!("{}• Average cravings/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
