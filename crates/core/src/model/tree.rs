use crate::model::taxonomy::SkillsTaxonomy;

/// A node of the browsable skill tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTreeNode {
    pub key: String,
    pub title: String,
    pub children: Vec<SkillTreeNode>,
}

impl SkillTreeNode {
    fn leaf(key: String, title: String) -> Self {
        Self {
            key,
            title,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Builds `root → category → subskill`, keyed `cat-{i}` and `cat-{i}-skill-{j}`.
#[must_use]
pub fn build_skill_tree(root_title: &str, skills: &SkillsTaxonomy) -> SkillTreeNode {
    let children = skills
        .categories()
        .iter()
        .enumerate()
        .map(|(i, category)| SkillTreeNode {
            key: format!("cat-{i}"),
            title: category.name.clone(),
            children: category
                .subskills
                .iter()
                .enumerate()
                .map(|(j, sub)| SkillTreeNode::leaf(format!("cat-{i}-skill-{j}"), sub.clone()))
                .collect(),
        })
        .collect();

    SkillTreeNode {
        key: "root".to_string(),
        title: root_title.to_string(),
        children,
    }
}
