use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use roadmap_core::RoadmapViewModel;
use roadmap_core::model::GenerationRequest;

use crate::context::{AppContext, use_roadmap_store_provider};
use crate::views::{
    GenerateModal, ModalState, NoticeKind, NoticeSlot, RoadmapView, ScheduleView, SidebarState,
    SubmitState,
};
use crate::vm::generate_roadmap;

const NOTICE_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", RoadmapView)] Roadmap {},
        #[route("/schedule", ScheduleView)] Schedule {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let api_base_url = ctx.api_base_url().to_string();
    let store = use_roadmap_store_provider(RoadmapViewModel::new(), None);
    let mut sidebar = use_signal(SidebarState::default);
    let mut modal = use_signal(ModalState::default);
    let submit_state = use_signal(SubmitState::default);
    let notice = use_signal(NoticeSlot::default);

    let on_submit = use_callback(move |request: GenerationRequest| {
        if submit_state().is_submitting() {
            return;
        }
        let generator = ctx.roadmaps();
        let mut store = store;
        let mut modal = modal;
        let mut submit_state = submit_state;
        let mut notice = notice;
        submit_state.set(SubmitState::Submitting);
        spawn(async move {
            let result = generate_roadmap(generator.as_ref(), &request).await;
            let next = store.apply_result(result);
            if next.kind == NoticeKind::Success {
                modal.set(ModalState::Closed);
            }
            submit_state.set(SubmitState::Idle);
            let ticket = notice.write().show(next);
            tokio::time::sleep(NOTICE_TIMEOUT).await;
            notice.write().dismiss(ticket);
        });
    });
    let on_close = use_callback(move |()| modal.set(ModalState::Closed));

    rsx! {
        div { class: "app",
            nav { class: sidebar().class(),
                h1 { class: "sidebar-brand", "Roadmap" }
                ul {
                    li { Link { to: Route::Roadmap {}, "Roadmap" } }
                    li { Link { to: Route::Schedule {}, "Schedule" } }
                }
                p { class: "sidebar-footer", title: "Generation service", "{api_base_url}" }
            }
            div { class: "main",
                header { class: "header",
                    button {
                        class: "header-toggle",
                        r#type: "button",
                        aria_label: "Toggle sidebar",
                        onclick: move |_| sidebar.set(sidebar().toggled()),
                        "☰"
                    }
                    button {
                        class: "btn btn--primary",
                        r#type: "button",
                        onclick: move |_| modal.set(ModalState::Open),
                        "Generate roadmap"
                    }
                }
                if let Some(current) = notice.read().current().cloned() {
                    div { class: current.class(), role: "status", "{current.text}" }
                }
                main { class: "content",
                    Outlet::<Route> {}
                }
            }
            if modal() == ModalState::Open {
                GenerateModal { submit_state: submit_state(), on_close, on_submit }
            }
        }
    }
}
