#![forbid(unsafe_code)]

pub mod model;
pub mod normalize;
pub mod time;
pub mod view_model;

pub use normalize::{
    IngestDiagnostics, PayloadShape, ingest_generation_result, ingest_with_diagnostics,
    normalize_path,
};
pub use time::Clock;
pub use view_model::{
    RoadmapViewModel, available_days, current_entry, record_answer, score, select_day,
};
