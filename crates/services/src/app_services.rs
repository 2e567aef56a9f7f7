use std::sync::Arc;

use roadmap_core::Clock;

use crate::config::ApiConfig;
use crate::error::AppServicesError;
use crate::http::ApiClient;
use crate::roadmap_service::{RoadmapGenerator, RoadmapService};

/// Assembles app-facing services from configuration.
#[derive(Clone)]
pub struct AppServices {
    config: ApiConfig,
    roadmaps: Arc<dyn RoadmapGenerator>,
}

impl AppServices {
    /// Build services talking to the configured generation service.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the HTTP client cannot be built.
    pub fn new(config: ApiConfig, clock: Clock) -> Result<Self, AppServicesError> {
        let api = ApiClient::new(&config)?;
        let roadmaps: Arc<dyn RoadmapGenerator> = Arc::new(RoadmapService::new(api, clock));
        Ok(Self { config, roadmaps })
    }

    /// Build services around an existing generator.
    #[must_use]
    pub fn with_generator(config: ApiConfig, roadmaps: Arc<dyn RoadmapGenerator>) -> Self {
        Self { config, roadmaps }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub fn roadmaps(&self) -> Arc<dyn RoadmapGenerator> {
        Arc::clone(&self.roadmaps)
    }
}
