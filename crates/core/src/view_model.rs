use chrono::{DateTime, Utc};

use crate::model::{
    AnswerRecord, DayNumber, LearningPath, LearningPathEntry, QuestionId, Roadmap,
    SkillsTaxonomy,
};

//
// ─── DERIVATIONS ───────────────────────────────────────────────────────────────
//

/// Distinct days present in `entries`, ascending.
#[must_use]
pub fn available_days(entries: &[LearningPathEntry]) -> Vec<DayNumber> {
    let mut days: Vec<DayNumber> = entries.iter().map(|entry| entry.day).collect();
    days.sort_unstable();
    days.dedup();
    days
}

/// Keeps `current` when it is still available, otherwise falls back to the
/// lowest day. `None` when there are no days at all.
#[must_use]
pub fn select_day(current: Option<DayNumber>, available: &[DayNumber]) -> Option<DayNumber> {
    match current {
        Some(day) if available.contains(&day) => Some(day),
        _ => available.iter().min().copied(),
    }
}

#[must_use]
pub fn current_entry(
    entries: &[LearningPathEntry],
    selected: Option<DayNumber>,
) -> Option<&LearningPathEntry> {
    let selected = selected?;
    entries.iter().find(|entry| entry.day == selected)
}

#[must_use]
pub fn record_answer(
    answers: &AnswerRecord,
    question_id: QuestionId,
    letter: impl Into<String>,
) -> AnswerRecord {
    answers.with_answer(question_id, letter)
}

/// Percentage of the entry's questions answered correctly, rounded half up.
///
/// Unanswered questions count as wrong. An entry without questions scores 0.
#[must_use]
pub fn score(entry: &LearningPathEntry, answers: &AnswerRecord) -> u8 {
    let total = entry.question_review.len();
    if total == 0 {
        return 0;
    }
    let correct = entry
        .question_review
        .iter()
        .filter(|question| question.is_answered_correctly(answers))
        .count();
    let percent = (200 * correct + total) / (2 * total);
    u8::try_from(percent).unwrap_or(100)
}

//
// ─── STATE HOLDER ──────────────────────────────────────────────────────────────
//

/// Loaded roadmap plus the user's position in it.
///
/// The only transition that touches the roadmap itself is
/// [`RoadmapViewModel::replace_roadmap`]; day picks and answers only move the
/// user's position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoadmapViewModel {
    goal: String,
    skills: SkillsTaxonomy,
    path: LearningPath,
    answers: AnswerRecord,
    selected_day: Option<DayNumber>,
    generated_at: Option<DateTime<Utc>>,
}

impl RoadmapViewModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swaps in a freshly generated roadmap.
    ///
    /// Skills and path are replaced together, answers are cleared even when
    /// question ids repeat, and the selected day is re-derived.
    pub fn replace_roadmap(&mut self, roadmap: Roadmap) {
        self.goal = roadmap.goal;
        self.skills = roadmap.skills;
        self.path = roadmap.path;
        self.generated_at = Some(roadmap.generated_at);
        self.answers = AnswerRecord::new();
        self.selected_day = select_day(self.selected_day, &self.available_days());
    }

    /// Selects `day` if the path has it. Returns whether the selection changed.
    pub fn pick_day(&mut self, day: DayNumber) -> bool {
        if self.selected_day == Some(day) || !self.available_days().contains(&day) {
            return false;
        }
        self.selected_day = Some(day);
        true
    }

    pub fn answer(&mut self, question_id: QuestionId, letter: impl Into<String>) {
        self.answers = record_answer(&self.answers, question_id, letter);
    }

    #[must_use]
    pub fn available_days(&self) -> Vec<DayNumber> {
        available_days(self.path.entries())
    }

    #[must_use]
    pub fn selected_day(&self) -> Option<DayNumber> {
        self.selected_day
    }

    #[must_use]
    pub fn current_entry(&self) -> Option<&LearningPathEntry> {
        current_entry(self.path.entries(), self.selected_day)
    }

    /// Score of the selected day, 0 when no day is selected.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.current_entry()
            .map_or(0, |entry| score(entry, &self.answers))
    }

    #[must_use]
    pub fn answer_for(&self, question_id: &QuestionId) -> Option<&str> {
        self.answers.get(question_id)
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    #[must_use]
    pub fn skills(&self) -> &SkillsTaxonomy {
        &self.skills
    }

    #[must_use]
    pub fn path(&self) -> &LearningPath {
        &self.path
    }

    #[must_use]
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
    }

    /// True until a roadmap has been loaded (or after an empty one was).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.path.is_empty()
    }
}
