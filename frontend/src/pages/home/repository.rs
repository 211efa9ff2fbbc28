use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::rc::Rc;

const EMBEDDED_CATALOG: &str = include_str!("projects.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("project catalog is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("project id {0} appears more than once")]
    DuplicateId(u32),
    #[error("project {id} link is not an absolute URL: {link}")]
    RelativeLink { id: u32, link: String },
}

fn is_absolute_url(link: &str) -> bool {
    match link.split_once("://") {
        Some((scheme, rest)) => {
            !rest.is_empty()
                && scheme
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

pub fn parse_catalog(raw: &str) -> Result<Vec<Project>, CatalogError> {
    let projects: Vec<Project> = serde_json::from_str(raw)?;
    let mut seen = HashSet::new();
    for project in &projects {
        if !seen.insert(project.id) {
            return Err(CatalogError::DuplicateId(project.id));
        }
        if let Some(link) = &project.link {
            if !is_absolute_url(link) {
                return Err(CatalogError::RelativeLink {
                    id: project.id,
                    link: link.clone(),
                });
            }
        }
    }
    Ok(projects)
}

#[derive(Clone)]
pub struct ProjectRepository {
    projects: Rc<Vec<Project>>,
}

impl ProjectRepository {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects: Rc::new(projects),
        }
    }

    /// The catalog compiled into the site. A broken catalog renders an empty
    /// grid.
    pub fn embedded() -> Self {
        match parse_catalog(EMBEDDED_CATALOG) {
            Ok(projects) => Self::new(projects),
            Err(err) => {
                log::error!("Failed to load project catalog: {}", err);
                Self::new(Vec::new())
            }
        }
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn find(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }
}
