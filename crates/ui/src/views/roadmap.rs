use dioxus::prelude::*;
use roadmap_core::model::SkillTreeNode;

use crate::context::RoadmapStore;
use crate::vm::{RoadmapPageVm, map_roadmap_page};

#[component]
pub fn RoadmapView() -> Element {
    let store = use_context::<RoadmapStore>();
    let RoadmapPageVm {
        tree,
        generated_label,
    } = map_roadmap_page(&store.vm.read());

    rsx! {
        div { class: "page",
            section { class: "card",
                h2 { class: "card-title card-title--blue", "Skills Roadmap" }
                if let Some(label) = generated_label {
                    p { class: "muted", "{label}" }
                }
                match tree {
                    Some(root) => rsx! {
                        ul { class: "tree",
                            SkillTreeItem { node: root }
                        }
                    },
                    None => rsx! {
                        p { class: "empty", "No skills yet. Generate a roadmap to get started." }
                    },
                }
                div { class: "guide",
                    h4 { "How to use" }
                    p {
                        "The roadmap lists the main skill areas of your goal and the skills inside each. "
                        "Expand or collapse a branch to see its details."
                    }
                }
            }
        }
    }
}

#[component]
fn SkillTreeItem(node: SkillTreeNode) -> Element {
    let mut expanded = use_signal(|| true);
    let is_leaf = node.is_leaf();

    rsx! {
        li { class: "tree-node",
            div { class: "tree-row",
                if is_leaf {
                    span { class: "tree-bullet" }
                } else {
                    button {
                        class: "tree-switch",
                        r#type: "button",
                        aria_label: if expanded() { "Collapse" } else { "Expand" },
                        onclick: move |_| expanded.set(!expanded()),
                        if expanded() { "▾" } else { "▸" }
                    }
                }
                span { class: "tree-title", "{node.title}" }
            }
            if !is_leaf && expanded() {
                ul { class: "tree-children",
                    for child in node.children.clone() {
                        SkillTreeItem { key: "{child.key}", node: child }
                    }
                }
            }
        }
    }
}
