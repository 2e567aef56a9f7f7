use std::sync::Arc;

use dioxus::prelude::*;
use roadmap_core::{IngestDiagnostics, RoadmapViewModel};
use services::{GeneratedRoadmap, RoadmapGenerator};

use crate::views::{Notice, ViewError};
use crate::vm::apply_generation;

pub trait UiApp: Send + Sync {
    fn roadmaps(&self) -> Arc<dyn RoadmapGenerator>;
    fn api_base_url(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    roadmaps: Arc<dyn RoadmapGenerator>,
    api_base_url: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            roadmaps: app.roadmaps(),
            api_base_url: app.api_base_url(),
        }
    }

    #[must_use]
    pub fn roadmaps(&self) -> Arc<dyn RoadmapGenerator> {
        Arc::clone(&self.roadmaps)
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The loaded roadmap, shared by every page of the layout.
///
/// Written only by the layout's generation flow and by the schedule page's
/// day and answer picks.
#[derive(Clone, Copy)]
pub struct RoadmapStore {
    pub vm: Signal<RoadmapViewModel>,
    pub diagnostics: Signal<Option<IngestDiagnostics>>,
}

impl RoadmapStore {
    pub fn apply_result(&mut self, result: Result<GeneratedRoadmap, ViewError>) -> Notice {
        let mut vm = self.vm.write();
        let mut diagnostics = self.diagnostics.write();
        apply_generation(&mut vm, &mut diagnostics, result)
    }
}

/// Creates the store for this component subtree and provides it as context.
pub fn use_roadmap_store_provider(
    initial: RoadmapViewModel,
    diagnostics: Option<IngestDiagnostics>,
) -> RoadmapStore {
    let vm = use_signal(move || initial);
    let diagnostics = use_signal(move || diagnostics);
    use_context_provider(|| RoadmapStore { vm, diagnostics })
}
