use chrono::{DateTime, Utc};

use crate::model::path::LearningPath;
use crate::model::taxonomy::SkillsTaxonomy;

/// The two parts of a generation result, after normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadmapPayload {
    pub skills: SkillsTaxonomy,
    pub path: LearningPath,
}

/// A loaded roadmap and the request goal it was generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roadmap {
    pub goal: String,
    pub skills: SkillsTaxonomy,
    pub path: LearningPath,
    pub generated_at: DateTime<Utc>,
}

impl Roadmap {
    #[must_use]
    pub fn from_payload(
        goal: impl Into<String>,
        payload: RoadmapPayload,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            goal: goal.into(),
            skills: payload.skills,
            path: payload.path,
            generated_at,
        }
    }
}
