use roadmap_core::model::{FormErrors, FormField, GenerationRequest, GenerationRequestDraft};
use roadmap_core::{IngestDiagnostics, RoadmapViewModel};
use services::{GeneratedRoadmap, RoadmapGenerator};

use crate::views::{Notice, ViewError};

pub const GENERATED_NOTICE: &str = "Roadmap generated";

/// Inline messages for the request form, one slot per validated field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrorsVm {
    pub goal: Option<String>,
    pub level: Option<String>,
    pub estimated_hours: Option<String>,
}

impl FormErrorsVm {
    #[must_use]
    pub fn from_errors(errors: &FormErrors) -> Self {
        let message = |field| errors.for_field(field).map(ToString::to_string);
        Self {
            goal: message(FormField::Goal),
            level: message(FormField::Level),
            estimated_hours: message(FormField::EstimatedHours),
        }
    }
}

/// Validates the form before anything leaves the client.
///
/// # Errors
///
/// Returns the per-field messages when a required field is invalid.
pub fn validate_draft(draft: &GenerationRequestDraft) -> Result<GenerationRequest, FormErrorsVm> {
    draft
        .validate()
        .map_err(|errors| FormErrorsVm::from_errors(&errors))
}

/// # Errors
///
/// Returns `ViewError::Unknown` for any service failure; the details are
/// logged by the service.
pub async fn generate_roadmap(
    generator: &dyn RoadmapGenerator,
    request: &GenerationRequest,
) -> Result<GeneratedRoadmap, ViewError> {
    generator
        .generate(request)
        .await
        .map_err(|_| ViewError::Unknown)
}

/// Folds a finished generation into the loaded state and returns the notice
/// to show. A failure leaves roadmap, answers and selected day as they were.
pub fn apply_generation(
    vm: &mut RoadmapViewModel,
    diagnostics: &mut Option<IngestDiagnostics>,
    result: Result<GeneratedRoadmap, ViewError>,
) -> Notice {
    match result {
        Ok(generated) => {
            vm.replace_roadmap(generated.roadmap);
            *diagnostics = Some(generated.diagnostics);
            Notice::success(GENERATED_NOTICE)
        }
        Err(_) => Notice::error(ViewError::message()),
    }
}
