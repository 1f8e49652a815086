//! Event categories and their default display colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Neutral fallback color for unknown categories.
///
/// Stored documents can carry categories that predate the current set, so
/// color derivation must stay total over arbitrary strings.
pub const FALLBACK_COLOR: &str = "#607D8B";

/// The fixed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Exercise,
    Eating,
    Work,
    Relax,
    Family,
    Social,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Exercise,
        Category::Eating,
        Category::Work,
        Category::Relax,
        Category::Family,
        Category::Social,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Exercise => "exercise",
            Category::Eating => "eating",
            Category::Work => "work",
            Category::Relax => "relax",
            Category::Family => "family",
            Category::Social => "social",
        }
    }

    /// Default display color for this category.
    pub fn default_color(&self) -> &'static str {
        match self {
            Category::Exercise => "#4CAF50", // green
            Category::Eating => "#FF9800",   // orange
            Category::Work => "#2196F3",     // blue
            Category::Relax => "#9C27B0",    // purple
            Category::Family => "#E91E63",   // pink
            Category::Social => "#FF5722",   // deep orange
        }
    }
}

impl FromStr for Category {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exercise" => Ok(Category::Exercise),
            "eating" => Ok(Category::Eating),
            "work" => Ok(Category::Work),
            "relax" => Ok(Category::Relax),
            "family" => Ok(Category::Family),
            "social" => Ok(Category::Social),
            other => Err(PlannerError::Validation(format!(
                "Invalid category '{}'. Expected one of: exercise, eating, work, relax, family, social",
                other
            ))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default color for a raw category string.
///
/// Unknown categories map to [`FALLBACK_COLOR`] rather than failing.
pub fn default_color_for_category(category: &str) -> &'static str {
    category
        .parse::<Category>()
        .map(|c| c.default_color())
        .unwrap_or(FALLBACK_COLOR)
}
