#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod http;
pub mod roadmap_service;

pub use reqwest::StatusCode;
pub use roadmap_core::Clock;

pub use app_services::AppServices;
pub use config::{ApiConfig, parse_timeout_secs};
pub use error::{AppServicesError, ConfigError, RoadmapServiceError, TransportError};
pub use http::ApiClient;
pub use roadmap_service::{GEN_SCHEDULE_PATH, GeneratedRoadmap, RoadmapGenerator, RoadmapService};
