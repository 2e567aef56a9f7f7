use dioxus::prelude::*;
use roadmap_core::model::{GenerationRequest, GenerationRequestDraft, Level};

use crate::views::SubmitState;
use crate::vm::{FormErrorsVm, validate_draft};

/// Request form for a new roadmap, shown as a modal over the current page.
///
/// Submission is blocked while `submit_state` is `Submitting`; the owner
/// decides when to close the modal.
#[component]
pub fn GenerateModal(
    submit_state: SubmitState,
    on_close: Callback<()>,
    on_submit: Callback<GenerationRequest>,
) -> Element {
    let mut draft = use_signal(GenerationRequestDraft::default);
    let mut errors = use_signal(FormErrorsVm::default);
    let submitting = submit_state.is_submitting();

    let submit = move |_| {
        if submitting {
            return;
        }
        match validate_draft(&draft.read()) {
            Ok(request) => {
                errors.set(FormErrorsVm::default());
                on_submit.call(request);
            }
            Err(form_errors) => errors.set(form_errors),
        }
    };

    let form_errors = errors();
    let current = draft();

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| {
                if !submitting {
                    on_close.call(());
                }
            },
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "modal-title", "Generate roadmap" }
                div { class: "form",
                    label { class: "form-field",
                        span { class: "form-label", "Goal" }
                        input {
                            r#type: "text",
                            value: "{current.goal}",
                            oninput: move |evt| draft.write().goal = evt.value(),
                        }
                        if let Some(message) = form_errors.goal.clone() {
                            span { class: "form-error", "{message}" }
                        }
                    }
                    label { class: "form-field",
                        span { class: "form-label", "Level" }
                        select {
                            value: "{current.level}",
                            onchange: move |evt| draft.write().level = evt.value(),
                            for level in Level::ALL {
                                option {
                                    value: level.as_str(),
                                    selected: current.level == level.as_str(),
                                    "{level}"
                                }
                            }
                        }
                        if let Some(message) = form_errors.level.clone() {
                            span { class: "form-error", "{message}" }
                        }
                    }
                    label { class: "form-field",
                        span { class: "form-label", "Description" }
                        textarea {
                            rows: 4,
                            value: "{current.description}",
                            oninput: move |evt| draft.write().description = evt.value(),
                        }
                    }
                    label { class: "form-field",
                        span { class: "form-label", "Estimated hours" }
                        input {
                            r#type: "number",
                            min: "1",
                            value: "{current.estimated_hours}",
                            oninput: move |evt| draft.write().estimated_hours = evt.value(),
                        }
                        if let Some(message) = form_errors.estimated_hours.clone() {
                            span { class: "form-error", "{message}" }
                        }
                    }
                }
                div { class: "modal-actions",
                    button {
                        class: "btn btn--secondary",
                        r#type: "button",
                        disabled: submitting,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn--primary",
                        r#type: "button",
                        disabled: submitting,
                        onclick: submit,
                        if submitting { "Generating..." } else { "Generate" }
                    }
                }
            }
        }
    }
}
