use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use roadmap_core::model::{
    DayNumber, GenerationRequest, LearningPath, LearningPathEntry, QuestionId, QuizQuestion,
    Roadmap, RoadmapPayload,
};
use roadmap_core::time::fixed_now;
use roadmap_core::{IngestDiagnostics, RoadmapViewModel};
use services::{GeneratedRoadmap, RoadmapGenerator, RoadmapServiceError};

use crate::context::{UiApp, build_app_context, use_roadmap_store_provider};
use crate::routes::Route;
use crate::views::{GenerateModal, RoadmapView, ScheduleView, SubmitState};

struct StaticGenerator;

#[async_trait::async_trait]
impl RoadmapGenerator for StaticGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedRoadmap, RoadmapServiceError> {
        Ok(GeneratedRoadmap {
            roadmap: Roadmap::from_payload(request.goal.clone(), sample_payload(), fixed_now()),
            diagnostics: IngestDiagnostics::default(),
        })
    }
}

struct TestApp {
    roadmaps: Arc<dyn RoadmapGenerator>,
}

impl UiApp for TestApp {
    fn roadmaps(&self) -> Arc<dyn RoadmapGenerator> {
        Arc::clone(&self.roadmaps)
    }

    fn api_base_url(&self) -> String {
        "http://127.0.0.1:8000/".to_string()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Roadmap,
    Schedule,
    Modal(SubmitState),
    /// The full routed layout, starting on the roadmap page.
    Shell,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    vm: RoadmapViewModel,
    diagnostics: Option<IngestDiagnostics>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_roadmap_store_provider(props.vm.clone(), props.diagnostics.clone());

    if props.view == ViewKind::Shell {
        rsx! { Router::<Route> {} }
    } else {
        rsx! { Router::<TestRoute> {} }
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let on_close = use_callback(|()| {});
    let on_submit = use_callback(|_request: GenerationRequest| {});
    match view {
        ViewKind::Roadmap => rsx! { RoadmapView {} },
        ViewKind::Schedule => rsx! { ScheduleView {} },
        ViewKind::Modal(submit_state) => rsx! {
            GenerateModal { submit_state, on_close, on_submit }
        },
        ViewKind::Shell => rsx! {},
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(
    view: ViewKind,
    vm: RoadmapViewModel,
    diagnostics: Option<IngestDiagnostics>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        roadmaps: Arc::new(StaticGenerator),
    });
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            vm,
            diagnostics,
        },
    );
    ViewHarness { dom }
}

pub fn day(n: u32) -> DayNumber {
    DayNumber::new(n).expect("positive day")
}

/// Two days of Computer Vision; day 1 carries a two-question quiz.
pub fn sample_payload() -> RoadmapPayload {
    RoadmapPayload {
        skills: [
            ("Image Processing", vec!["Filters", "Edges"]),
            ("Deep Learning", vec!["CNNs"]),
        ]
        .into_iter()
        .collect(),
        path: LearningPath::from_entries(vec![
            LearningPathEntry::new(day(1), "Image Processing", "Filters")
                .with_theory("Apply **kernels** to images.")
                .with_youtube_link("https://youtu.be/filters")
                .with_questions(vec![
                    QuizQuestion::new(
                        QuestionId::from(1),
                        "What slides over an image?",
                        &["A. A kernel", "B. A label"],
                        "A",
                    ),
                    QuizQuestion::new(
                        QuestionId::from(2),
                        "Which layer pools?",
                        &["A. Dense", "B. MaxPool"],
                        "B",
                    ),
                ]),
            LearningPathEntry::new(day(2), "Image Processing", "Edges"),
        ]),
    }
}

pub fn loaded_vm() -> RoadmapViewModel {
    let mut vm = RoadmapViewModel::new();
    vm.replace_roadmap(Roadmap::from_payload(
        "Computer Vision",
        sample_payload(),
        fixed_now(),
    ));
    vm
}
