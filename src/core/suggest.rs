//! Alternative suggestions for a craving.
//!
//! Classification is a case-insensitive substring match against an ordered
//! keyword table; the first category with a matching keyword wins and
//! anything unmatched falls through to `General`.

use crate::errors::{AppError, AppResult};
use std::fmt;

/// Label of the free-text escape hatch appended after every suggestion list.
pub const OTHER: &str = "✏️ Other (specify)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Salty,
    Sweet,
    Cold,
    Savory,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub icon: &'static str,
    pub label: &'static str,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.label)
    }
}

const fn s(icon: &'static str, label: &'static str) -> Suggestion {
    Suggestion { icon, label }
}

const KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Salty, &["chip", "fry", "fries", "crisp", "pretzel"]),
    (Category::Sweet, &["chocolate", "candy", "sweet", "cake", "cookie"]),
    (Category::Cold, &["ice cream", "cold", "frozen"]),
    (Category::Savory, &["pizza", "cheese", "burger"]),
];

const SALTY: &[Suggestion] = &[
    s("🥜", "Roasted almonds"),
    s("🍿", "Air-popped popcorn"),
    s("🫘", "Roasted chana"),
    s("🥒", "Cucumber with sea salt"),
];

const SWEET: &[Suggestion] = &[
    s("🍓", "Fresh berries"),
    s("🍎", "Apple with peanut butter"),
    s("🍯", "Greek yogurt with honey"),
    s("🍫", "One square of dark chocolate"),
];

const COLD: &[Suggestion] = &[
    s("🍌", "Frozen banana"),
    s("🍇", "Frozen grapes"),
    s("🥤", "Fruit smoothie"),
    s("🧊", "Iced herbal tea"),
];

const SAVORY: &[Suggestion] = &[
    s("🥙", "Whole-wheat wrap"),
    s("🍅", "Cherry tomatoes with mozzarella"),
    s("🥗", "Chickpea salad"),
    s("🥚", "Boiled eggs"),
];

const GENERAL: &[Suggestion] = &[
    s("💪", "Pushups"),
    s("💧", "Water"),
    s("🥜", "Healthy snack"),
    s("🚶", "Short walk"),
];

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Salty => "salty snack",
            Category::Sweet => "sweet",
            Category::Cold => "cold treat",
            Category::Savory => "savory",
            Category::General => "general",
        }
    }

    pub fn suggestions(self) -> &'static [Suggestion] {
        match self {
            Category::Salty => SALTY,
            Category::Sweet => SWEET,
            Category::Cold => COLD,
            Category::Savory => SAVORY,
            Category::General => GENERAL,
        }
    }
}

pub fn classify(craving: &str) -> Category {
    let text = craving.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| text.contains(w)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}

/// Suggestions offered for one craving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestions {
    pub category: Category,
    pub items: &'static [Suggestion],
}

pub fn suggest(craving: &str) -> Suggestions {
    let category = classify(craving);
    Suggestions {
        category,
        items: category.suggestions(),
    }
}

impl Suggestions {
    /// Display lines in menu order, ending with the "Other" entry.
    pub fn options(&self) -> Vec<String> {
        self.items
            .iter()
            .map(ToString::to_string)
            .chain(std::iter::once(OTHER.to_string()))
            .collect()
    }

    /// Resolve a 1-based menu pick into the action to store. The last entry
    /// ("Other") needs the free text the user typed.
    pub fn pick(&self, index: usize, other: Option<&str>) -> AppResult<String> {
        let other_index = self.items.len() + 1;

        match index {
            i if (1..other_index).contains(&i) => Ok(self.items[i - 1].label.to_string()),
            i if i == other_index => match other.map(str::trim) {
                Some(text) if !text.is_empty() => Ok(text.to_string()),
                _ => Err(AppError::Validation(
                    "Please specify what you did instead".to_string(),
                )),
            },
            _ => Err(AppError::Validation(format!(
                "Choose an option between 1 and {other_index}"
            ))),
        }
    }
}

/// Short nudge shown after saving, when the action has one.
pub fn tip_for(action: &str) -> Option<&'static str> {
    match action.to_lowercase().as_str() {
        "pushups" => Some("Try 10 pushups now 💪"),
        "water" => Some("Drink a full glass of water 💧"),
        "healthy snack" => Some("Try roasted chana or fruits 🥜"),
        "short walk" => Some("Ten minutes outside will do 🚶"),
        _ => None,
    }
}
