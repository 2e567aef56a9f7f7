//! Schema-tolerant boundary between the generation service and the model.
//!
//! The service output is not guaranteed to be well shaped: `learning_path` may
//! be a list or a keyed object, fields may be missing or of the wrong type, and
//! the whole body may or may not sit inside a `data` envelope. Everything here
//! degrades to empty values instead of failing, and reports what it had to
//! drop through [`IngestDiagnostics`].

use serde_json::{Map, Number, Value};

use crate::model::{
    DayNumber, LearningPath, LearningPathEntry, QuestionId, QuizOption, QuizQuestion,
    RoadmapPayload, SkillsTaxonomy,
};

/// How a part of the payload was shaped when it arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    Sequence,
    Mapping,
    /// Field missing or `null`.
    Absent,
    /// Present, but neither a sequence nor a mapping.
    Malformed,
}

impl PayloadShape {
    fn of(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => PayloadShape::Absent,
            Some(Value::Array(_)) => PayloadShape::Sequence,
            Some(Value::Object(_)) => PayloadShape::Mapping,
            Some(_) => PayloadShape::Malformed,
        }
    }
}

/// What the tolerant parsing papered over while ingesting one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestDiagnostics {
    pub enveloped: bool,
    pub skills: PayloadShape,
    pub path: PayloadShape,
    pub discarded_entries: usize,
    pub discarded_questions: usize,
    pub discarded_subskills: usize,
}

impl Default for IngestDiagnostics {
    fn default() -> Self {
        Self {
            enveloped: false,
            skills: PayloadShape::Absent,
            path: PayloadShape::Absent,
            discarded_entries: 0,
            discarded_questions: 0,
            discarded_subskills: 0,
        }
    }
}

impl IngestDiagnostics {
    /// True when nothing was missing, malformed or dropped.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skills == PayloadShape::Mapping
            && matches!(self.path, PayloadShape::Sequence | PayloadShape::Mapping)
            && self.discarded_entries == 0
            && self.discarded_questions == 0
            && self.discarded_subskills == 0
    }
}

#[derive(Default)]
struct Discards {
    entries: usize,
    questions: usize,
    subskills: usize,
}

//
// ─── PUBLIC API ────────────────────────────────────────────────────────────────
//

/// Normalizes a raw `learning_path` value.
///
/// `None` stands for a missing field. Lists are taken as-is, keyed objects
/// contribute their values in enumeration order, anything else is empty.
/// Entries without a positive integer `day` are dropped; for repeated days the
/// entry seen last wins. Never fails.
#[must_use]
pub fn normalize_path(raw: Option<&Value>) -> LearningPath {
    normalize_path_counting(raw, &mut Discards::default())
}

/// Unwraps the optional `data` envelope and extracts `skills` and
/// `learning_path`.
#[must_use]
pub fn ingest_generation_result(raw: &Value) -> RoadmapPayload {
    ingest_with_diagnostics(raw).0
}

/// Same as [`ingest_generation_result`], and reports what had to be defaulted.
#[must_use]
pub fn ingest_with_diagnostics(raw: &Value) -> (RoadmapPayload, IngestDiagnostics) {
    let (body, enveloped) = match raw.get("data") {
        Some(data) if !data.is_null() => (data, true),
        _ => (raw, false),
    };

    let mut discards = Discards::default();
    let skills_raw = body.get("skills");
    let path_raw = body.get("learning_path");

    let skills = match skills_raw {
        Some(Value::Object(map)) => normalize_skills(map, &mut discards),
        _ => SkillsTaxonomy::new(),
    };
    let path = normalize_path_counting(path_raw, &mut discards);

    let diagnostics = IngestDiagnostics {
        enveloped,
        skills: PayloadShape::of(skills_raw),
        path: PayloadShape::of(path_raw),
        discarded_entries: discards.entries,
        discarded_questions: discards.questions,
        discarded_subskills: discards.subskills,
    };
    (RoadmapPayload { skills, path }, diagnostics)
}

//
// ─── HELPERS ───────────────────────────────────────────────────────────────────
//

fn normalize_path_counting(raw: Option<&Value>, discards: &mut Discards) -> LearningPath {
    let items: Vec<&Value> = match raw {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(Value::Object(map)) => map.values().collect(),
        _ => Vec::new(),
    };

    let entries = items
        .into_iter()
        .filter_map(|item| {
            let entry = parse_entry(item, discards);
            if entry.is_none() {
                discards.entries += 1;
            }
            entry
        })
        .collect();
    LearningPath::from_entries(entries)
}

fn normalize_skills(map: &Map<String, Value>, discards: &mut Discards) -> SkillsTaxonomy {
    let mut taxonomy = SkillsTaxonomy::new();
    for (name, subs) in map {
        let subskills = match subs {
            Value::Array(items) => items
                .iter()
                .filter_map(|item| {
                    let sub = item.as_str().map(str::to_string);
                    if sub.is_none() {
                        discards.subskills += 1;
                    }
                    sub
                })
                .collect(),
            Value::Null => Vec::new(),
            _ => {
                discards.subskills += 1;
                Vec::new()
            }
        };
        taxonomy.insert(name.clone(), subskills);
    }
    taxonomy
}

fn parse_entry(value: &Value, discards: &mut Discards) -> Option<LearningPathEntry> {
    let obj = value.as_object()?;
    let day = obj.get("day").and_then(day_from_value)?;

    let questions = first_present(obj, &["question_review", "questionReview"])
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let question = parse_question(item);
                    if question.is_none() {
                        discards.questions += 1;
                    }
                    question
                })
                .collect()
        })
        .unwrap_or_default();

    Some(LearningPathEntry {
        day,
        skill: text_field(obj, &["skill"]),
        subskill: text_field(obj, &["subskill"]),
        theory: text_field(obj, &["theory"]),
        youtube_link: first_present(obj, &["youtube_links", "youtube_link", "youtubeLink"])
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|link| !link.is_empty())
            .map(str::to_string),
        question_review: questions,
    })
}

fn parse_question(value: &Value) -> Option<QuizQuestion> {
    let obj = value.as_object()?;
    let id = obj.get("id").and_then(question_id_from_value)?;
    let options = obj
        .get("options")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(QuizOption::parse)
                .collect()
        })
        .unwrap_or_default();

    Some(QuizQuestion {
        id,
        question_text: text_field(obj, &["question_text", "questionText"]),
        options,
        correct_answer: text_field(obj, &["correct_answer", "correctAnswer"]),
    })
}

fn day_from_value(value: &Value) -> Option<DayNumber> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(day) = number.as_u64() {
        return DayNumber::new(u32::try_from(day).ok()?).ok();
    }

    // Whole-valued floats such as `2.0` still name a day.
    let float = number.as_f64()?;
    if float.fract() != 0.0 || !(1.0..=f64::from(u32::MAX)).contains(&float) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = float as u32;
    DayNumber::new(day).ok()
}

fn question_id_from_value(value: &Value) -> Option<QuestionId> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(QuestionId::new(s.trim())),
        Value::Number(n) => Some(QuestionId::new(integer_text(n))),
        _ => None,
    }
}

/// Decimal text of a number, with whole floats written like integers so
/// `1.0` and `1` give the same id.
fn integer_text(number: &Number) -> String {
    if let Some(value) = number.as_u64() {
        return value.to_string();
    }
    if let Some(value) = number.as_i64() {
        return value.to_string();
    }
    match number.as_f64() {
        Some(float) if float.fract() == 0.0 && float.abs() < 9_007_199_254_740_992.0 => {
            format!("{float:.0}")
        }
        _ => number.to_string(),
    }
}

fn first_present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| !value.is_null())
}

fn text_field(obj: &Map<String, Value>, keys: &[&str]) -> String {
    first_present(obj, keys)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn days(path: &LearningPath) -> Vec<u32> {
        path.entries().iter().map(|e| e.day.value()).collect()
    }

    #[test]
    fn absent_and_null_give_empty_path() {
        assert!(normalize_path(None).is_empty());
        assert!(normalize_path(Some(&Value::Null)).is_empty());
    }

    #[test]
    fn sequence_is_sorted_by_day() {
        let raw = json!([{ "day": 2, "skill": "A" }, { "day": 1, "skill": "A" }]);
        assert_eq!(days(&normalize_path(Some(&raw))), vec![1, 2]);
    }

    #[test]
    fn mapping_values_are_taken() {
        let raw = json!({ "a": { "day": 5 }, "b": { "day": 3 } });
        assert_eq!(days(&normalize_path(Some(&raw))), vec![3, 5]);
    }

    #[test]
    fn scalars_give_empty_path() {
        assert!(normalize_path(Some(&json!("nope"))).is_empty());
        assert!(normalize_path(Some(&json!(42))).is_empty());
        assert!(normalize_path(Some(&json!(true))).is_empty());
    }

    #[test]
    fn entries_without_numeric_day_are_dropped() {
        let raw = json!([
            { "day": "1" },
            { "skill": "no day" },
            { "day": 0 },
            { "day": -2 },
            { "day": 1.5 },
            { "day": 4.0 },
            "not an object",
            { "day": 2 }
        ]);
        assert_eq!(days(&normalize_path(Some(&raw))), vec![2, 4]);
    }

    #[test]
    fn duplicate_days_keep_last_seen() {
        let raw = json!([
            { "day": 1, "subskill": "first" },
            { "day": 1, "subskill": "second" }
        ]);
        let path = normalize_path(Some(&raw));
        assert_eq!(path.len(), 1);
        assert_eq!(path.entries()[0].subskill, "second");
    }

    #[test]
    fn optional_fields_are_defaulted_once() {
        let raw = json!([{ "day": 1, "theory": null, "youtube_links": "  " }]);
        let path = normalize_path(Some(&raw));
        let entry = &path.entries()[0];
        assert_eq!(entry.theory, "");
        assert_eq!(entry.skill, "");
        assert_eq!(entry.youtube_link, None);
        assert!(entry.question_review.is_empty());
    }

    #[test]
    fn camel_case_keys_are_accepted() {
        let raw = json!([{
            "day": 1,
            "youtubeLink": "https://youtu.be/x",
            "questionReview": [{
                "id": "q1",
                "questionText": "Why?",
                "options": ["A. because", 7, "B. no"],
                "correctAnswer": "A"
            }]
        }]);
        let path = normalize_path(Some(&raw));
        let entry = &path.entries()[0];
        assert_eq!(entry.youtube_link.as_deref(), Some("https://youtu.be/x"));
        let question = &entry.question_review[0];
        assert_eq!(question.id, QuestionId::from("q1"));
        assert_eq!(question.question_text, "Why?");
        assert_eq!(question.options.len(), 2);
        assert_eq!(question.options[1].letter(), "B");
        assert_eq!(question.correct_answer, "A");
    }

    #[test]
    fn whole_float_ids_match_integer_ids() {
        let raw = json!([{
            "day": 1,
            "question_review": [
                { "id": 1.0, "question_text": "a", "correct_answer": "A" },
                { "id": 2.5, "question_text": "b" }
            ]
        }]);
        let path = normalize_path(Some(&raw));
        let questions = &path.entries()[0].question_review;
        assert_eq!(questions[0].id, QuestionId::from(1));
        assert_eq!(questions[1].id, QuestionId::from("2.5"));
    }

    #[test]
    fn questions_without_id_are_dropped() {
        let raw = json!({
            "learning_path": [{
                "day": 1,
                "question_review": [
                    { "question_text": "no id" },
                    { "id": 2, "question_text": "ok" }
                ]
            }]
        });
        let (payload, diagnostics) = ingest_with_diagnostics(&raw);
        let questions = &payload.path.entries()[0].question_review;
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].id, QuestionId::from(2));
        assert_eq!(diagnostics.discarded_questions, 1);
    }

    #[test]
    fn envelope_is_unwrapped() {
        let raw = json!({
            "data": {
                "skills": { "A": ["x", "y"] },
                "learning_path": [{ "day": 1 }]
            }
        });
        let (payload, diagnostics) = ingest_with_diagnostics(&raw);
        assert!(diagnostics.enveloped);
        assert!(diagnostics.is_clean());
        assert_eq!(payload.skills.get("A").map(<[String]>::len), Some(2));
        assert_eq!(payload.path.len(), 1);
    }

    #[test]
    fn bare_body_is_accepted() {
        let raw = json!({ "skills": {}, "learning_path": {} });
        let (payload, diagnostics) = ingest_with_diagnostics(&raw);
        assert!(!diagnostics.enveloped);
        assert_eq!(diagnostics.path, PayloadShape::Mapping);
        assert!(payload.skills.is_empty());
        assert!(payload.path.is_empty());
    }

    #[test]
    fn null_envelope_falls_back_to_body() {
        let raw = json!({ "data": null, "learning_path": [{ "day": 3 }] });
        let payload = ingest_generation_result(&raw);
        assert_eq!(days(&payload.path), vec![3]);
    }

    #[test]
    fn missing_and_malformed_path_are_told_apart() {
        let (_, missing) = ingest_with_diagnostics(&json!({ "skills": {} }));
        assert_eq!(missing.path, PayloadShape::Absent);
        assert!(!missing.is_clean());

        let (payload, malformed) =
            ingest_with_diagnostics(&json!({ "skills": "oops", "learning_path": "oops" }));
        assert_eq!(malformed.path, PayloadShape::Malformed);
        assert_eq!(malformed.skills, PayloadShape::Malformed);
        assert!(payload.skills.is_empty());
        assert!(payload.path.is_empty());
    }

    #[test]
    fn skills_keep_order_and_drop_non_strings() {
        let raw = json!({
            "skills": { "Zeta": ["z", 1, null], "Alpha": "bad", "Beta": null }
        });
        let (payload, diagnostics) = ingest_with_diagnostics(&raw);
        let names: Vec<&str> = payload
            .skills
            .categories()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Beta"]);
        assert_eq!(payload.skills.get("Zeta"), Some(&["z".to_string()][..]));
        assert_eq!(payload.skills.get("Alpha"), Some(&[][..]));
        assert_eq!(diagnostics.discarded_subskills, 3);
    }

    #[test]
    fn non_object_response_is_empty() {
        let payload = ingest_generation_result(&json!("server exploded"));
        assert!(payload.skills.is_empty());
        assert!(payload.path.is_empty());
    }
}
