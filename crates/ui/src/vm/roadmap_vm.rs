use chrono::{DateTime, Utc};
use roadmap_core::RoadmapViewModel;
use roadmap_core::model::{SkillTreeNode, build_skill_tree};

const FALLBACK_ROOT_TITLE: &str = "Skills";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoadmapPageVm {
    /// `None` until a roadmap with skills is loaded.
    pub tree: Option<SkillTreeNode>,
    pub generated_label: Option<String>,
}

#[must_use]
pub fn format_generated_at(value: DateTime<Utc>) -> String {
    format!("Generated {}", value.format("%Y-%m-%d %H:%M UTC"))
}

#[must_use]
pub fn map_roadmap_page(vm: &RoadmapViewModel) -> RoadmapPageVm {
    let root_title = if vm.goal().trim().is_empty() {
        FALLBACK_ROOT_TITLE
    } else {
        vm.goal()
    };
    RoadmapPageVm {
        tree: (!vm.skills().is_empty()).then(|| build_skill_tree(root_title, vm.skills())),
        generated_label: vm.generated_at().map(format_generated_at),
    }
}
