use serde::{Deserialize, Serialize};

/// One category of the skills taxonomy and its subskills, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub subskills: Vec<String>,
}

/// Category name → ordered subskills. Iteration follows the payload order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsTaxonomy {
    categories: Vec<SkillCategory>,
}

impl SkillsTaxonomy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category, replacing the subskills of an existing one in place.
    pub fn insert(&mut self, name: impl Into<String>, subskills: Vec<String>) {
        let name = name.into();
        if let Some(existing) = self.categories.iter_mut().find(|c| c.name == name) {
            existing.subskills = subskills;
        } else {
            self.categories.push(SkillCategory { name, subskills });
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.subskills.as_slice())
    }

    #[must_use]
    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }
}

impl<N, S> FromIterator<(N, Vec<S>)> for SkillsTaxonomy
where
    N: Into<String>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, Vec<S>)>>(iter: I) -> Self {
        let mut taxonomy = Self::new();
        for (name, subskills) in iter {
            taxonomy.insert(name, subskills.into_iter().map(Into::into).collect());
        }
        taxonomy
    }
}
