use roadmap_core::model::QuestionId;
use roadmap_core::{IngestDiagnostics, PayloadShape, RoadmapViewModel};

use super::state::SubmitState;
use super::test_harness::{ViewKind, day, loaded_vm, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Roadmap, RoadmapViewModel::new(), None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Skills Roadmap"), "missing title in {html}");
    assert!(html.contains("No skills yet"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn roadmap_view_smoke_renders_skill_tree() {
    let mut harness = setup_view_harness(ViewKind::Roadmap, loaded_vm(), None);
    harness.rebuild();
    let html = harness.render();
    for title in ["Computer Vision", "Image Processing", "Filters", "Edges", "CNNs"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert!(
        html.contains("Generated 2023-11-14 22:13 UTC"),
        "missing timestamp in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn schedule_view_smoke_renders_first_day() {
    let mut harness = setup_view_harness(ViewKind::Schedule, loaded_vm(), None);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Day 1: Image Processing - Filters"),
        "missing day title in {html}"
    );
    assert!(html.contains("<strong>kernels</strong>"), "missing theory in {html}");
    assert!(html.contains("https://youtu.be/filters"), "missing video in {html}");
    assert!(html.contains("Score: 0%"), "missing score in {html}");
    assert!(html.contains("What slides over an image?"), "missing question in {html}");
    assert!(!html.contains("Correct"), "unexpected verdict in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn schedule_view_smoke_renders_verdicts_and_score() {
    let mut vm = loaded_vm();
    vm.answer(QuestionId::from(1), "A");
    vm.answer(QuestionId::from(2), "A");
    let mut harness = setup_view_harness(ViewKind::Schedule, vm, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Score: 50%"), "missing score in {html}");
    assert!(html.contains("Correct"), "missing correct tag in {html}");
    assert!(
        html.contains("Wrong - correct answer: B"),
        "missing wrong tag in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn schedule_view_smoke_renders_day_without_quiz() {
    let mut vm = loaded_vm();
    assert!(vm.pick_day(day(2)));
    let mut harness = setup_view_harness(ViewKind::Schedule, vm, None);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("Day 2: Image Processing - Edges"),
        "missing day title in {html}"
    );
    assert!(html.contains("—"), "missing placeholder in {html}");
    assert!(!html.contains("Review questions"), "unexpected quiz in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn schedule_view_smoke_explains_missing_path() {
    let diagnostics = IngestDiagnostics {
        skills: PayloadShape::Mapping,
        path: PayloadShape::Absent,
        ..IngestDiagnostics::default()
    };
    let mut harness =
        setup_view_harness(ViewKind::Schedule, RoadmapViewModel::new(), Some(diagnostics));
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("The service did not return a learning path."),
        "missing hint in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn generate_modal_smoke_renders_defaults() {
    let mut harness =
        setup_view_harness(ViewKind::Modal(SubmitState::Idle), RoadmapViewModel::new(), None);
    harness.rebuild();
    let html = harness.render();
    assert!(
        html.contains("I want to learn Computer Vision"),
        "missing goal default in {html}"
    );
    assert!(html.contains("Advance"), "missing level option in {html}");
    assert!(html.contains("40"), "missing hours default in {html}");
    assert!(html.contains(">Generate<"), "missing confirm in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn generate_modal_smoke_blocks_while_submitting() {
    let mut harness = setup_view_harness(
        ViewKind::Modal(SubmitState::Submitting),
        RoadmapViewModel::new(),
        None,
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Generating..."), "missing busy label in {html}");
    assert!(html.contains("disabled"), "confirm not disabled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn shell_smoke_renders_navigation_and_roadmap_page() {
    let mut harness = setup_view_harness(ViewKind::Shell, RoadmapViewModel::new(), None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Generate roadmap"), "missing header button in {html}");
    assert!(html.contains("Schedule"), "missing sidebar link in {html}");
    assert!(html.contains("Skills Roadmap"), "missing routed page in {html}");
    assert!(html.contains("http://127.0.0.1:8000/"), "missing service address in {html}");
    assert!(!html.contains("modal-overlay"), "modal open by default in {html}");
}
