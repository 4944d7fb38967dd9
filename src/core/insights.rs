//! Read-only aggregates over the cached history. Recomputed on every
//! display pass, never stored.

use crate::models::CravingEvent;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourBucket {
    pub hour: u32,
    pub count: usize,
    pub successes: usize,
}

impl HourBucket {
    pub fn success_rate(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.successes as f64 / self.count as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub total: usize,
    pub most_common: Option<String>,
    /// `None` when there is no history.
    pub success_rate: Option<f64>,
    /// (action, count), most used first; equal counts keep first-seen order.
    pub actions: Vec<(String, usize)>,
    /// Non-empty hours, ascending.
    pub hours: Vec<HourBucket>,
    pub peak_hour: Option<HourBucket>,
    pub best_hour: Option<HourBucket>,
}

impl Insights {
    pub fn from_history(history: &[CravingEvent]) -> Self {
        let total = history.len();
        let successes = history.iter().filter(|ev| !ev.did_eat_craved).count();
        let hours = hour_buckets(history);

        Self {
            total,
            most_common: most_common(history),
            success_rate: (total > 0).then(|| successes as f64 / total as f64),
            actions: action_breakdown(history),
            peak_hour: first_max_by(&hours, |b| b.count as f64),
            best_hour: first_max_by(&hours, HourBucket::success_rate),
            hours,
        }
    }
}

/// Counts in first-seen order.
fn tally<'a>(items: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(k, _)| k == item) {
            Some((_, n)) => *n += 1,
            None => counts.push((item.to_string(), 1)),
        }
    }
    counts
}

fn most_common(history: &[CravingEvent]) -> Option<String> {
    let counts = tally(history.iter().map(|ev| ev.craving_item.as_str()));
    let mut best: Option<(String, usize)> = None;
    for (item, n) in counts {
        if best.as_ref().is_none_or(|(_, top)| n > *top) {
            best = Some((item, n));
        }
    }
    best.map(|(item, _)| item)
}

fn action_breakdown(history: &[CravingEvent]) -> Vec<(String, usize)> {
    let mut counts = tally(
        history
            .iter()
            .map(|ev| ev.action_taken.as_str())
            .filter(|a| !a.is_empty()),
    );
    // stable: ties keep first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

pub fn hour_buckets(history: &[CravingEvent]) -> Vec<HourBucket> {
    let mut buckets: Vec<HourBucket> = (0..24)
        .map(|hour| HourBucket {
            hour,
            count: 0,
            successes: 0,
        })
        .collect();

    for ev in history {
        let b = &mut buckets[ev.hour() as usize];
        b.count += 1;
        if !ev.did_eat_craved {
            b.successes += 1;
        }
    }

    buckets.retain(|b| b.count > 0);
    buckets
}

// Strictly greater wins, so ties go to the earliest hour.
fn first_max_by(buckets: &[HourBucket], key: impl Fn(&HourBucket) -> f64) -> Option<HourBucket> {
    let mut best: Option<HourBucket> = None;
    for b in buckets {
        if best.as_ref().is_none_or(|top| key(b) > key(top)) {
            best = Some(*b);
        }
    }
    best
}

pub fn count_on(history: &[CravingEvent], day: NaiveDate) -> usize {
    history.iter().filter(|ev| ev.date() == day).count()
}

/// "N/A" when undefined, otherwise a whole-ish percentage.
pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{:.0}%", r * 100.0),
        None => "N/A".to_string(),
    }
}
