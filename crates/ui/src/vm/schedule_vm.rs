use roadmap_core::model::{AnswerRecord, AnswerVerdict, DayNumber, LearningPathEntry, QuestionId};
use roadmap_core::{IngestDiagnostics, PayloadShape, RoadmapViewModel, score};

use crate::vm::markdown_vm::markdown_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayButtonVm {
    pub day: DayNumber,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoLinkVm {
    pub href: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayCardVm {
    pub title: String,
    /// `None` when the day has no theory text.
    pub theory_html: Option<String>,
    pub video: Option<VideoLinkVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub letter: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerdictVm {
    Correct,
    Incorrect { expected: String },
}

impl VerdictVm {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            VerdictVm::Correct => "Correct".to_string(),
            VerdictVm::Incorrect { expected } => format!("Wrong - correct answer: {expected}"),
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self {
            VerdictVm::Correct => "tag tag--green",
            VerdictVm::Incorrect { .. } => "tag tag--red",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<QuizOptionVm>,
    pub verdict: Option<VerdictVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub score_label: String,
    pub questions: Vec<QuizQuestionVm>,
}

#[must_use]
pub fn map_day_buttons(vm: &RoadmapViewModel) -> Vec<DayButtonVm> {
    let selected = vm.selected_day();
    vm.available_days()
        .into_iter()
        .map(|day| DayButtonVm {
            day,
            label: day.to_string(),
            selected: selected == Some(day),
        })
        .collect()
}

#[must_use]
pub fn map_day_card(entry: &LearningPathEntry) -> DayCardVm {
    let theory_html = if entry.theory.trim().is_empty() {
        None
    } else {
        Some(markdown_to_html(&entry.theory))
    };
    let video = entry.video_url().map(|url| VideoLinkVm {
        href: url.to_string(),
        text: entry.youtube_link.clone().unwrap_or_else(|| url.to_string()),
    });

    DayCardVm {
        title: format!("Day {}: {} - {}", entry.day, entry.skill, entry.subskill),
        theory_html,
        video,
    }
}

/// `None` when the day has no quiz.
#[must_use]
pub fn map_quiz(entry: &LearningPathEntry, answers: &AnswerRecord) -> Option<QuizVm> {
    if entry.question_review.is_empty() {
        return None;
    }

    let questions = entry
        .question_review
        .iter()
        .map(|question| {
            let chosen = answers.get(&question.id);
            QuizQuestionVm {
                id: question.id.clone(),
                text: question.question_text.clone(),
                options: question
                    .options
                    .iter()
                    .map(|option| QuizOptionVm {
                        letter: option.letter().to_string(),
                        label: option.label().to_string(),
                        selected: chosen == Some(option.letter()),
                    })
                    .collect(),
                verdict: question.verdict(answers).map(|verdict| match verdict {
                    AnswerVerdict::Correct => VerdictVm::Correct,
                    AnswerVerdict::Incorrect { expected } => VerdictVm::Incorrect { expected },
                }),
            }
        })
        .collect();

    Some(QuizVm {
        score_label: format!("Score: {}%", score(entry, answers)),
        questions,
    })
}

/// Empty-state text for the schedule, telling a missing path from an
/// unreadable one.
#[must_use]
pub fn empty_path_hint(diagnostics: Option<&IngestDiagnostics>) -> &'static str {
    match diagnostics.map(|d| d.path) {
        None => "No learning path yet. Generate a roadmap to get started.",
        Some(PayloadShape::Absent) => "The service did not return a learning path.",
        Some(PayloadShape::Malformed) => "The service returned a learning path that could not be read.",
        Some(PayloadShape::Sequence | PayloadShape::Mapping) => {
            "The learning path has no usable days."
        }
    }
}
