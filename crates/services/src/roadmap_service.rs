use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use roadmap_core::model::{GenerationRequest, Roadmap};
use roadmap_core::{Clock, IngestDiagnostics, ingest_with_diagnostics};

use crate::error::RoadmapServiceError;
use crate::http::ApiClient;

/// Endpoint of the generation service, relative to the API base URL.
pub const GEN_SCHEDULE_PATH: &str = "gen_schedule";

/// A roadmap fresh from the service, with what ingestion had to default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRoadmap {
    pub roadmap: Roadmap,
    pub diagnostics: IngestDiagnostics,
}

/// Produces roadmaps for generation requests.
#[async_trait]
pub trait RoadmapGenerator: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedRoadmap, RoadmapServiceError>;
}

/// `RoadmapGenerator` backed by the remote generation service.
///
/// Makes exactly one POST per call; there is no retry.
#[derive(Clone, Debug)]
pub struct RoadmapService {
    api: ApiClient,
    clock: Clock,
}

impl RoadmapService {
    #[must_use]
    pub fn new(api: ApiClient, clock: Clock) -> Self {
        Self { api, clock }
    }
}

#[async_trait]
impl RoadmapGenerator for RoadmapService {
    #[instrument(
        level = "info",
        skip_all,
        fields(level = %request.level, estimated_hours = request.estimated_hours)
    )]
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedRoadmap, RoadmapServiceError> {
        let raw = self
            .api
            .post(GEN_SCHEDULE_PATH, request)
            .await
            .inspect_err(|err| error!(error = %err, "roadmap generation failed"))?;

        let (payload, diagnostics) = ingest_with_diagnostics(&raw);
        if !diagnostics.is_clean() {
            warn!(
                skills = ?diagnostics.skills,
                path = ?diagnostics.path,
                discarded_entries = diagnostics.discarded_entries,
                discarded_questions = diagnostics.discarded_questions,
                discarded_subskills = diagnostics.discarded_subskills,
                "generation payload needed defaulting"
            );
        }

        let roadmap = Roadmap::from_payload(request.goal.clone(), payload, self.clock.now());
        info!(
            categories = roadmap.skills.len(),
            days = roadmap.path.len(),
            "roadmap generated"
        );
        Ok(GeneratedRoadmap {
            roadmap,
            diagnostics,
        })
    }
}
