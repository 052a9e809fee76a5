//! Prompt classification into a closed set of component categories.
//!
//! [`classify`] is total: every input, including the empty string, maps to a
//! [`Category`]. No I/O, no state.

use std::fmt;
use std::str::FromStr;

/// Component category derived from a prompt by substring matching.
///
/// `Default` is the fallback when no keyword matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Button,
    Card,
    Modal,
    Form,
    #[default]
    Default,
}

impl Category {
    /// All categories, in classification priority order.
    pub const ALL: [Category; 5] = [
        Category::Button,
        Category::Card,
        Category::Modal,
        Category::Form,
        Category::Default,
    ];

    /// Lowercase name, matching the CLI and config spelling.
    pub fn name(self) -> &'static str {
        match self {
            Category::Button => "button",
            Category::Card => "card",
            Category::Modal => "modal",
            Category::Form => "form",
            Category::Default => "default",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "button" => Ok(Category::Button),
            "card" => Ok(Category::Card),
            "modal" => Ok(Category::Modal),
            "form" => Ok(Category::Form),
            "default" => Ok(Category::Default),
            _ => Err(format!(
                "unknown category: {} (use button, card, modal, form, or default)",
                s
            )),
        }
    }
}

/// Classifies a prompt by case-insensitive substring matching.
///
/// Keywords are tested in a fixed priority order, first match wins:
/// `button`, `card`, `modal` or `dialog`, `form`. Anything else is
/// [`Category::Default`]. The order is part of the observable contract:
/// a prompt mentioning both a card and a button classifies as `Button`.
pub fn classify(prompt: &str) -> Category {
    let lower = prompt.to_lowercase();

    if lower.contains("button") {
        Category::Button
    } else if lower.contains("card") {
        Category::Card
    } else if lower.contains("modal") || lower.contains("dialog") {
        Category::Modal
    } else if lower.contains("form") {
        Category::Form
    } else {
        Category::Default
    }
}
