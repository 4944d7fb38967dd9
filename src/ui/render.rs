//! Terminal projections of the workflow. Nothing here writes to the store.

use crate::config::Config;
use crate::core::insights::{Insights, count_on, format_rate};
use crate::core::workflow::{View, WorkflowState};
use crate::models::CravingEvent;
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, RESET, color_for_rate, colorize_optional};
use crate::utils::formatting::{bar, bold, hour_label, pad_right};
use crate::utils::table::Table;
use chrono::Local;
use unicode_width::UnicodeWidthStr;

pub fn status(view: &View<'_>) {
    header("Cravings Coach");

    match view.identity {
        Some(id) => println!("👤 Signed in as {}", bold(&id.email)),
        None => println!("👤 Anonymous session"),
    }

    if !view.draft.is_empty() {
        println!("📝 Draft: {}", view.draft);
    }

    match view.state {
        WorkflowState::Idle => {
            println!("🟢 Ready to log a craving");
        }
        WorkflowState::AwaitingAction { craving } => {
            println!("🍽️  What will you do about {}?", bold(craving));
            if let Some(s) = &view.suggestions {
                suggestions_menu(&s.options(), s.category.label());
            }
        }
    }

    println!(
        "📋 Total entries: {} | Success rate: {}",
        view.insights.total,
        colorize_optional(&format_rate(view.insights.success_rate))
    );
}

pub fn suggestions_menu(options: &[String], category: &str) {
    println!("{CYAN}Suggested alternatives ({category}):{RESET}");
    for (i, option) in options.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, option);
    }
}

pub fn history(events: &[CravingEvent], limit: Option<usize>, cfg: &Config) {
    if events.is_empty() {
        info("No cravings logged yet. Start by logging one!");
        return;
    }

    let shown = limit.unwrap_or(events.len()).min(events.len());

    let mut table = Table::new(&["When", "Craving", "Action", "Result"]);
    for ev in &events[..shown] {
        table.add_row(vec![
            ev.when(),
            ev.craving_item.clone(),
            ev.action_taken.clone(),
            if ev.success {
                "✅ resisted".to_string()
            } else {
                "🍩 gave in".to_string()
            },
        ]);
    }

    println!("🗂️  Recent cravings ({shown} of {}):\n", events.len());
    print!("{}", table.render(&cfg.separator_char));
}

pub fn insights(insights: &Insights, history: &[CravingEvent], cfg: &Config) {
    header("Insights");

    if insights.total == 0 {
        info("No cravings logged yet. Start by logging one!");
        println!("Success rate: {}", colorize_optional("N/A"));
        return;
    }

    let today = count_on(history, Local::now().date_naive());
    let rate = format_rate(insights.success_rate);
    let rate = match insights.success_rate {
        Some(r) => format!("{}{rate}{RESET}", color_for_rate(r)),
        None => colorize_optional(&rate),
    };

    println!("Total cravings: {}", insights.total);
    println!(
        "Most common:    {}",
        insights.most_common.as_deref().unwrap_or("None")
    );
    println!("Success rate:   {rate}");
    println!("Today:          {today} cravings");

    if !insights.actions.is_empty() {
        println!("\n{CYAN}Actions taken{RESET}");
        let max = insights.actions.iter().map(|(_, n)| *n).max().unwrap_or(0);
        let label_w = insights
            .actions
            .iter()
            .map(|(a, _)| UnicodeWidthStr::width(a.as_str()))
            .max()
            .unwrap_or(0);
        for (action, n) in &insights.actions {
            println!(
                "  {} {} {n}",
                pad_right(action, label_w),
                bar(*n, max, cfg.chart_width)
            );
        }
    }

    println!("\n{CYAN}Cravings by hour{RESET}");
    let max = insights.hours.iter().map(|b| b.count).max().unwrap_or(0);
    for b in &insights.hours {
        let r = b.success_rate();
        println!(
            "  {} {} {} ({}{}{RESET} resisted)",
            hour_label(b.hour),
            pad_right(&bar(b.count, max, cfg.chart_width), cfg.chart_width),
            b.count,
            color_for_rate(r),
            format_rate(Some(r)),
        );
    }

    if let Some(peak) = insights.peak_hour {
        println!(
            "\nPeak hour: {} ({} cravings)",
            hour_label(peak.hour),
            peak.count
        );
    }
    if let Some(best) = insights.best_hour {
        println!(
            "Best hour: {} ({} resisted)",
            hour_label(best.hour),
            format_rate(Some(best.success_rate()))
        );
    }
}
