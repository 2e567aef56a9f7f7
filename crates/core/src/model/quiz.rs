use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::ids::QuestionId;

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// One selectable option of a quiz question.
///
/// Raw options look like `"A. something"`; the first character is the value
/// the user selects and `label` keeps the full text for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    letter: String,
    label: String,
}

impl QuizOption {
    /// Builds an option from its raw `"<Letter>. <text>"` form.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let letter = raw.chars().next().map(String::from).unwrap_or_default();
        Self {
            letter,
            label: raw.to_string(),
        }
    }

    #[must_use]
    pub fn letter(&self) -> &str {
        &self.letter
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A multiple-choice question with a single correct lettered option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: QuestionId,
    pub question_text: String,
    pub options: Vec<QuizOption>,
    pub correct_answer: String,
}

/// Outcome of comparing a recorded answer with the expected letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerVerdict {
    Correct,
    Incorrect { expected: String },
}

impl QuizQuestion {
    #[must_use]
    pub fn new(
        id: QuestionId,
        question_text: impl Into<String>,
        options: &[&str],
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            id,
            question_text: question_text.into(),
            options: options.iter().map(|raw| QuizOption::parse(raw)).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    /// True when `answers` holds exactly the expected letter (case-sensitive).
    #[must_use]
    pub fn is_answered_correctly(&self, answers: &AnswerRecord) -> bool {
        !self.correct_answer.is_empty()
            && answers.get(&self.id) == Some(self.correct_answer.as_str())
    }

    /// `None` while the question has no recorded answer.
    #[must_use]
    pub fn verdict(&self, answers: &AnswerRecord) -> Option<AnswerVerdict> {
        answers.get(&self.id)?;
        if self.is_answered_correctly(answers) {
            Some(AnswerVerdict::Correct)
        } else {
            Some(AnswerVerdict::Incorrect {
                expected: self.correct_answer.clone(),
            })
        }
    }
}

//
// ─── ANSWERS ───────────────────────────────────────────────────────────────────
//

/// Letters selected by the user, keyed by question id.
///
/// Survives day switches; replaced by an empty record whenever a new roadmap
/// is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerRecord {
    answers: BTreeMap<QuestionId, String>,
}

impl AnswerRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&str> {
        self.answers.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Returns a copy with `id` mapped to `letter`. The letter is not checked
    /// against the question's options.
    #[must_use]
    pub fn with_answer(&self, id: QuestionId, letter: impl Into<String>) -> Self {
        let mut answers = self.answers.clone();
        answers.insert(id, letter.into());
        Self { answers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> QuizQuestion {
        QuizQuestion::new(QuestionId::from(1), "Q1?", &["A. yes", "B. no"], "A")
    }

    #[test]
    fn option_letter_is_first_character() {
        let option = QuizOption::parse("B. no");
        assert_eq!(option.letter(), "B");
        assert_eq!(option.label(), "B. no");
        assert_eq!(QuizOption::parse("").letter(), "");
    }

    #[test]
    fn verdict_reports_expected_letter() {
        let q = question();
        let answers = AnswerRecord::new();
        assert_eq!(q.verdict(&answers), None);

        let answers = answers.with_answer(QuestionId::from(1), "B");
        assert_eq!(
            q.verdict(&answers),
            Some(AnswerVerdict::Incorrect {
                expected: "A".to_string()
            })
        );

        let answers = answers.with_answer(QuestionId::from(1), "A");
        assert_eq!(q.verdict(&answers), Some(AnswerVerdict::Correct));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let q = question();
        let answers = AnswerRecord::new().with_answer(QuestionId::from(1), "a");
        assert!(!q.is_answered_correctly(&answers));
    }

    #[test]
    fn missing_correct_answer_never_matches() {
        let q = QuizQuestion::new(QuestionId::from(2), "Q2?", &["A. x"], "");
        let answers = AnswerRecord::new().with_answer(QuestionId::from(2), "");
        assert!(!q.is_answered_correctly(&answers));
    }

    #[test]
    fn with_answer_leaves_original_untouched() {
        let before = AnswerRecord::new();
        let after = before.with_answer(QuestionId::from(7), "C");
        assert!(before.is_empty());
        assert_eq!(after.get(&QuestionId::from(7)), Some("C"));
    }
}
