use serde::{Deserialize, Serialize};
use std::fmt;

use thiserror::Error;

/// A study day number inside a learning path. Always >= 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DayNumber(u32);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DayError {
    #[error("day number must be >= 1")]
    Zero,
}

impl DayNumber {
    /// Creates a new `DayNumber`
    ///
    /// # Errors
    ///
    /// Returns `DayError::Zero` for day 0.
    pub fn new(day: u32) -> Result<Self, DayError> {
        if day == 0 {
            return Err(DayError::Zero);
        }
        Ok(Self(day))
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Identifier of a quiz question, unique within one day.
///
/// The generation service sends ids either as numbers or strings; both are
/// kept in their decimal text form so `1` and `"1"` name the same question.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuestionId(String);

impl QuestionId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for QuestionId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Debug for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayNumber({})", self.0)
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_zero_is_rejected() {
        assert_eq!(DayNumber::new(0), Err(DayError::Zero));
        assert_eq!(DayNumber::new(3).unwrap().value(), 3);
    }

    #[test]
    fn numeric_and_text_ids_match() {
        assert_eq!(QuestionId::from(1), QuestionId::from("1"));
        assert_eq!(QuestionId::new("q-1").to_string(), "q-1");
    }
}
