use dioxus::prelude::*;
use roadmap_core::model::{DayNumber, QuestionId};

use crate::context::RoadmapStore;
use crate::vm::{
    DayButtonVm, DayCardVm, QuizQuestionVm, QuizVm, empty_path_hint, map_day_buttons,
    map_day_card, map_quiz,
};

#[derive(Clone, Debug, PartialEq)]
struct ScheduleData {
    buttons: Vec<DayButtonVm>,
    card: Option<DayCardVm>,
    quiz: Option<QuizVm>,
}

#[component]
pub fn ScheduleView() -> Element {
    let store = use_context::<RoadmapStore>();
    let mut vm_signal = store.vm;

    let data = {
        let vm = store.vm.read();
        if vm.path().is_empty() {
            None
        } else {
            let entry = vm.current_entry();
            Some(ScheduleData {
                buttons: map_day_buttons(&vm),
                card: entry.map(map_day_card),
                quiz: entry.and_then(|entry| map_quiz(entry, vm.answers())),
            })
        }
    };
    let hint = empty_path_hint(store.diagnostics.read().as_ref());

    let on_pick_day = use_callback(move |day: DayNumber| {
        vm_signal.write().pick_day(day);
    });
    let on_answer = use_callback(move |(id, letter): (QuestionId, String)| {
        vm_signal.write().answer(id, letter);
    });

    rsx! {
        div { class: "page",
            section { class: "card",
                h2 { class: "card-title card-title--green", "Learning Path" }
                match data {
                    None => rsx! {
                        p { class: "empty", "{hint}" }
                    },
                    Some(data) => rsx! {
                        div { class: "day-selector",
                            for button in data.buttons {
                                DayButton { key: "{button.label}", button, on_pick: on_pick_day }
                            }
                        }
                        match data.card {
                            Some(card) => rsx! { DayCard { card } },
                            None => rsx! { p { class: "muted", "Pick a day." } },
                        }
                        if let Some(quiz) = data.quiz {
                            QuizCard { quiz, on_answer }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn DayButton(button: DayButtonVm, on_pick: Callback<DayNumber>) -> Element {
    let day = button.day;
    rsx! {
        button {
            class: if button.selected { "day-button day-button--selected" } else { "day-button" },
            r#type: "button",
            onclick: move |_| on_pick.call(day),
            "{button.label}"
        }
    }
}

#[component]
fn DayCard(card: DayCardVm) -> Element {
    rsx! {
        article { class: "inner-card",
            h3 { class: "inner-card-title", "{card.title}" }
            strong { "Theory:" }
            match card.theory_html {
                Some(html) => rsx! { div { class: "theory", dangerous_inner_html: "{html}" } },
                None => rsx! { p { "—" } },
            }
            strong { "Video:" }
            div {
                match card.video {
                    Some(video) => rsx! {
                        a {
                            href: "{video.href}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{video.text}"
                        }
                    },
                    None => rsx! { "—" },
                }
            }
        }
    }
}

#[component]
fn QuizCard(quiz: QuizVm, on_answer: Callback<(QuestionId, String)>) -> Element {
    rsx! {
        article { class: "inner-card",
            h3 { class: "inner-card-title",
                "Review questions"
                span { class: "tag tag--blue", "{quiz.score_label}" }
            }
            ul { class: "quiz",
                for question in quiz.questions {
                    QuizItem { key: "{question.id}", question, on_answer }
                }
            }
        }
    }
}

#[component]
fn QuizItem(question: QuizQuestionVm, on_answer: Callback<(QuestionId, String)>) -> Element {
    let group = format!("question-{}", question.id);
    rsx! {
        li { class: "quiz-item",
            strong { "{question.text}" }
            div { class: "quiz-options",
                for option in question.options.clone() {
                    label { class: "quiz-option", key: "{option.label}",
                        input {
                            r#type: "radio",
                            name: "{group}",
                            value: "{option.letter}",
                            checked: option.selected,
                            onchange: {
                                let id = question.id.clone();
                                let letter = option.letter.clone();
                                move |_| on_answer.call((id.clone(), letter.clone()))
                            },
                        }
                        " {option.label}"
                    }
                }
            }
            if let Some(verdict) = question.verdict.clone() {
                div { class: "quiz-verdict",
                    span { class: verdict.class(), "{verdict.label()}" }
                }
            }
        }
    }
}
