//! Goal entity: a named, colored grouping of tasks.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PlannerError, PlannerResult};

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#([0-9A-F]{3}){1,2}$").unwrap());

/// Validate a hex color code like `#00CED1` or `#FFF`.
pub fn validate_hex_color(color: &str) -> PlannerResult<()> {
    if HEX_COLOR.is_match(color) {
        Ok(())
    } else {
        Err(PlannerError::Validation(format!(
            "Color must be a valid hex color code (e.g., #00CED1), got '{}'",
            color
        )))
    }
}

/// Parse a hex color into RGB components.
///
/// Accepts both the 3-digit shorthand (`#FA0` -> `#FFAA00`) and the
/// 6-digit form. Returns `None` for anything else.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let digits = color.strip_prefix('#')?;
    match digits.len() {
        3 => {
            let mut rgb = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                let v = c.to_digit(16)? as u8;
                rgb[i] = v * 16 + v;
            }
            Some((rgb[0], rgb[1], rgb[2]))
        }
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// A goal: owns zero or more tasks by reference, and is the source of
/// truth for their color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Input for creating a goal.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalDraft {
    pub name: String,
    pub color: String,
}

/// Partial update for a goal. Missing fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoalPatch {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl Goal {
    /// Build a goal from user input, validating name and color.
    pub fn from_draft(draft: GoalDraft) -> PlannerResult<Goal> {
        let name = draft.name.trim().to_string();
        if name.is_empty() {
            return Err(PlannerError::Validation("Goal name is required".to_string()));
        }
        validate_hex_color(&draft.color)?;

        Ok(Goal {
            id: Uuid::new_v4().to_string(),
            name,
            color: draft.color,
        })
    }

    /// Apply a partial update in place.
    pub fn apply(&mut self, patch: GoalPatch) -> PlannerResult<()> {
        if let Some(name) = patch.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(PlannerError::Validation("Goal name is required".to_string()));
            }
            self.name = name;
        }
        if let Some(color) = patch.color {
            validate_hex_color(&color)?;
            self.color = color;
        }
        Ok(())
    }
}
