use std::{
    collections::HashSet,
    fmt,
    str::FromStr,
    sync::{Arc, LazyLock},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::{load, ContentError};

pub static PROJECTS: LazyLock<ProjectCatalog> = LazyLock::new(|| {
    ProjectCatalog::embedded().expect("Should be able to load projects.json into a catalog")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ai,
    Platform,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Ai, Category::Platform];

    pub fn slug(self) -> &'static str {
        match self {
            Category::Ai => "ai",
            Category::Platform => "platform",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Ai => "AI",
            Category::Platform => "Platform",
        }
    }
}

/// Selection of the projects page filter. `All` is the "no filter" sentinel
/// and never appears on a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Filter buttons in display order.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(Self::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => project.category == c,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(c) => f.write_str(c.slug()),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CategoryFilter::All),
            other => Category::ALL
                .into_iter()
                .find(|c| c.slug() == other)
                .map(CategoryFilter::Only)
                .ok_or_else(|| CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub accent: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate project id {0}")]
    DuplicateId(u32),
    #[error("unknown project category: {0}")]
    UnknownCategory(String),
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Immutable, ordered list of projects. Cloning shares the underlying list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCatalog {
    projects: Arc<[Project]>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        if let Some(dup) = projects.iter().find(|p| !seen.insert(p.id)) {
            return Err(CatalogError::DuplicateId(dup.id));
        }
        Ok(Self {
            projects: projects.into(),
        })
    }

    pub fn embedded() -> Result<Self, CatalogError> {
        Self::new(load("projects.json")?)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Projects matching `filter`, in catalog order.
    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }
}

/// Selected category plus the catalog it filters.
#[derive(Debug, Clone)]
pub struct ProjectFilter {
    catalog: ProjectCatalog,
    selected: CategoryFilter,
}

impl ProjectFilter {
    pub fn new(catalog: ProjectCatalog) -> Self {
        Self {
            catalog,
            selected: CategoryFilter::All,
        }
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.selected = filter;
    }

    pub fn selected(&self) -> CategoryFilter {
        self.selected
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    /// May be empty; the page shows a "no projects" message in that case.
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.catalog.filtered(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, category: Category) -> Project {
        Project {
            id,
            title: format!("project {id}"),
            category,
            description: String::new(),
            tech: vec!["Rust".to_string()],
            accent: String::new(),
            icon: String::new(),
        }
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_returns_full_catalog_in_order() {
        let filter = ProjectFilter::new(PROJECTS.clone());
        assert_eq!(filter.selected(), CategoryFilter::All);
        assert_eq!(ids(&filter.visible_projects()), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_ai_filter_preserves_order() {
        let mut filter = ProjectFilter::new(PROJECTS.clone());
        filter.select_category(CategoryFilter::Only(Category::Ai));
        assert_eq!(ids(&filter.visible_projects()), vec![1, 2, 3, 5]);

        filter.select_category(CategoryFilter::Only(Category::Platform));
        assert_eq!(ids(&filter.visible_projects()), vec![4, 6]);

        filter.select_category(CategoryFilter::All);
        assert_eq!(filter.visible_projects().len(), 6);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let catalog =
            ProjectCatalog::new(vec![project(1, Category::Ai), project(2, Category::Ai)]).unwrap();
        let mut filter = ProjectFilter::new(catalog);
        filter.select_category(CategoryFilter::Only(Category::Platform));
        assert!(filter.visible_projects().is_empty());
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let mut filter = ProjectFilter::new(PROJECTS.clone());
        filter.select_category(CategoryFilter::Only(Category::Ai));
        let first = ids(&filter.visible_projects());
        filter.select_category(CategoryFilter::Only(Category::Ai));
        assert_eq!(first, ids(&filter.visible_projects()));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let res = ProjectCatalog::new(vec![
            project(1, Category::Ai),
            project(2, Category::Platform),
            project(1, Category::Platform),
        ]);
        assert!(matches!(res, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_empty_catalog() {
        let filter = ProjectFilter::new(ProjectCatalog::new(Vec::new()).unwrap());
        assert!(filter.catalog().is_empty());
        assert!(filter.visible_projects().is_empty());
    }

    #[test]
    fn test_filter_slugs() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "platform".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Platform)
        );
        assert!(matches!(
            "robotics".parse::<CategoryFilter>(),
            Err(CatalogError::UnknownCategory(s)) if s == "robotics"
        ));
        for option in CategoryFilter::options() {
            assert_eq!(option.to_string().parse::<CategoryFilter>().unwrap(), option);
        }
        let labels = CategoryFilter::options()
            .map(CategoryFilter::label)
            .collect::<Vec<_>>();
        assert_eq!(labels, vec!["All", "AI", "Platform"]);
    }

    #[test]
    fn test_unknown_category_in_data_fails_to_parse() {
        let raw = r#"[{"id": 1, "title": "x", "category": "robotics", "description": "", "tech": []}]"#;
        assert!(serde_json::from_str::<Vec<Project>>(raw).is_err());
    }
}
