//! Numeric range input

use crate::error::{EditorError, Result};
use serde::{Deserialize, Serialize};

/// A slider constrained to `min..=max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeControl {
    pub min: i32,
    pub max: i32,
}

impl RangeControl {
    /// The skill proficiency slider
    pub const SKILL_LEVEL: RangeControl = RangeControl { min: 0, max: 100 };

    /// Parse raw input the way a range element reports it and pin it to the range.
    ///
    /// Leading digits are taken (`"42px"` reads as 42); fractional input is
    /// truncated. Input without any leading number is rejected.
    pub fn accept(&self, raw: &str) -> Result<i32> {
        let value = leading_integer(raw.trim()).ok_or_else(|| EditorError::NotANumber(raw.to_string()))?;
        Ok(value.clamp(i64::from(self.min), i64::from(self.max)) as i32)
    }

    /// Pin an already numeric value to the range
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

fn leading_integer(text: &str) -> Option<i64> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate absurdly long inputs instead of failing
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}
