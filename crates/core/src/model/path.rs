use serde::{Deserialize, Serialize};
use url::Url;

use crate::model::ids::DayNumber;
use crate::model::quiz::QuizQuestion;

/// One study day of a learning path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPathEntry {
    pub day: DayNumber,
    pub skill: String,
    pub subskill: String,
    /// Free text, empty when the service sent none.
    pub theory: String,
    pub youtube_link: Option<String>,
    pub question_review: Vec<QuizQuestion>,
}

impl LearningPathEntry {
    #[must_use]
    pub fn new(day: DayNumber, skill: impl Into<String>, subskill: impl Into<String>) -> Self {
        Self {
            day,
            skill: skill.into(),
            subskill: subskill.into(),
            theory: String::new(),
            youtube_link: None,
            question_review: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_theory(mut self, theory: impl Into<String>) -> Self {
        self.theory = theory.into();
        self
    }

    #[must_use]
    pub fn with_youtube_link(mut self, link: impl Into<String>) -> Self {
        self.youtube_link = Some(link.into());
        self
    }

    #[must_use]
    pub fn with_questions(mut self, questions: Vec<QuizQuestion>) -> Self {
        self.question_review = questions;
        self
    }

    /// The video link, only when it is an absolute http(s) URL.
    #[must_use]
    pub fn video_url(&self) -> Option<Url> {
        let raw = self.youtube_link.as_deref()?.trim();
        let url = Url::parse(raw).ok()?;
        matches!(url.scheme(), "http" | "https").then_some(url)
    }
}

/// Study days sorted ascending by `day`, at most one entry per day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPath {
    entries: Vec<LearningPathEntry>,
}

impl LearningPath {
    /// Builds a path from entries in source order.
    ///
    /// Entries are sorted by day. When several entries share a day the one
    /// seen last wins.
    #[must_use]
    pub fn from_entries(entries: Vec<LearningPathEntry>) -> Self {
        let mut entries = entries;
        // Stable sort keeps source order inside a day group.
        entries.sort_by_key(|entry| entry.day);
        let mut deduped: Vec<LearningPathEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            match deduped.last_mut() {
                Some(last) if last.day == entry.day => *last = entry,
                _ => deduped.push(entry),
            }
        }
        Self { entries: deduped }
    }

    #[must_use]
    pub fn entries(&self) -> &[LearningPathEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
