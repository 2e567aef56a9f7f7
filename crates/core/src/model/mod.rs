mod ids;
mod path;
mod quiz;
mod request;
mod roadmap;
mod taxonomy;
mod tree;

pub use ids::{DayError, DayNumber, QuestionId};
pub use path::{LearningPath, LearningPathEntry};
pub use quiz::{AnswerRecord, AnswerVerdict, QuizOption, QuizQuestion};
pub use request::{
    FieldError, FormErrors, FormField, GenerationRequest, GenerationRequestDraft, Level,
    LevelParseError,
};
pub use roadmap::{Roadmap, RoadmapPayload};
pub use taxonomy::{SkillCategory, SkillsTaxonomy};
pub use tree::{SkillTreeNode, build_skill_tree};
