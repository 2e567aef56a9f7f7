use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Self-assessed starting level sent with a generation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    #[default]
    Beginner,
    Medium,
    Advance,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown level: {0}")]
pub struct LevelParseError(pub String);

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Medium, Level::Advance];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Medium => "Medium",
            Level::Advance => "Advance",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| LevelParseError(s.to_string()))
    }
}

//
// ─── REQUEST ───────────────────────────────────────────────────────────────────
//

/// Body of a roadmap generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub goal: String,
    pub level: Level,
    pub description: String,
    pub estimated_hours: u32,
}

/// Raw form values, as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequestDraft {
    pub goal: String,
    pub level: String,
    pub description: String,
    pub estimated_hours: String,
}

impl Default for GenerationRequestDraft {
    fn default() -> Self {
        Self {
            goal: "I want to learn Computer Vision".to_string(),
            level: Level::Beginner.as_str().to_string(),
            description: "This is a course to learn Computer Vision step by step".to_string(),
            estimated_hours: "40".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Goal,
    Level,
    EstimatedHours,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldError {
    #[error("Please enter goal")]
    MissingGoal,
    #[error("Please select level")]
    MissingLevel,
    #[error("Please enter hours")]
    MissingHours,
    #[error("Estimated hours must be a whole number of at least 1")]
    InvalidHours,
}

impl FieldError {
    #[must_use]
    pub fn field(&self) -> FormField {
        match self {
            FieldError::MissingGoal => FormField::Goal,
            FieldError::MissingLevel => FormField::Level,
            FieldError::MissingHours | FieldError::InvalidHours => FormField::EstimatedHours,
        }
    }
}

/// Every field error found in one validation pass.
#[derive(Debug, Error, Clone, Default, PartialEq, Eq)]
#[error("request form has {} invalid field(s)", .errors.len())]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    #[must_use]
    pub fn for_field(&self, field: FormField) -> Option<&FieldError> {
        self.errors.iter().find(|err| err.field() == field)
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl GenerationRequestDraft {
    /// Checks required fields before any network call.
    ///
    /// # Errors
    ///
    /// Returns `FormErrors` listing each invalid field.
    pub fn validate(&self) -> Result<GenerationRequest, FormErrors> {
        let mut errors = Vec::new();

        let goal = self.goal.trim();
        if goal.is_empty() {
            errors.push(FieldError::MissingGoal);
        }

        let level = match self.level.trim() {
            "" => {
                errors.push(FieldError::MissingLevel);
                None
            }
            raw => match raw.parse::<Level>() {
                Ok(level) => Some(level),
                Err(_) => {
                    errors.push(FieldError::MissingLevel);
                    None
                }
            },
        };

        let hours = match self.estimated_hours.trim() {
            "" => {
                errors.push(FieldError::MissingHours);
                None
            }
            raw => match raw.parse::<u32>() {
                Ok(hours) if hours >= 1 => Some(hours),
                _ => {
                    errors.push(FieldError::InvalidHours);
                    None
                }
            },
        };

        match (level, hours) {
            (Some(level), Some(estimated_hours)) if errors.is_empty() => Ok(GenerationRequest {
                goal: goal.to_string(),
                level,
                description: self.description.trim().to_string(),
                estimated_hours,
            }),
            _ => Err(FormErrors { errors }),
        }
    }
}
