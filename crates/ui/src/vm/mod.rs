mod generate_vm;
mod markdown_vm;
mod roadmap_vm;
mod schedule_vm;

pub use generate_vm::{
    FormErrorsVm, GENERATED_NOTICE, apply_generation, generate_roadmap, validate_draft,
};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use roadmap_vm::{RoadmapPageVm, format_generated_at, map_roadmap_page};
pub use schedule_vm::{
    DayButtonVm, DayCardVm, QuizOptionVm, QuizQuestionVm, QuizVm, VerdictVm, VideoLinkVm,
    empty_path_hint, map_day_buttons, map_day_card, map_quiz,
};
