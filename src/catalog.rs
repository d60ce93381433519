//! Project Catalog
//!
//! Immutable configuration table of filters and projects, embedded at compile
//! time and validated once at startup.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Filter, Project, Settings};

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("filter key {0:?} is declared more than once")]
    DuplicateFilter(String),
    #[error("project #{0} has an empty name")]
    EmptyName(usize),
    #[error("projects {first} and {second} share the route {path:?}")]
    DuplicateRoute {
        path: String,
        first: usize,
        second: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Catalog {
    /// The catalog shipped with the site
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(source)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut keys = HashSet::new();
        for filter in &self.filters {
            if !keys.insert(filter.key.as_str()) {
                return Err(CatalogError::DuplicateFilter(filter.key.clone()));
            }
        }

        let mut routes: Vec<(&str, usize)> = Vec::new();
        for (index, project) in self.projects.iter().enumerate() {
            if project.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(index));
            }
            for tag in &project.tags {
                if !keys.contains(tag.as_str()) {
                    log::warn!("[Catalog] project {:?} has tag {:?} with no filter chip", project.name, tag);
                }
            }

            if project.relative_path.is_empty() {
                continue;
            }
            if let Some((_, first)) = routes.iter().find(|(path, _)| *path == project.relative_path) {
                return Err(CatalogError::DuplicateRoute {
                    path: project.relative_path.clone(),
                    first: *first,
                    second: index,
                });
            }
            routes.push((project.relative_path.as_str(), index));
        }
        Ok(())
    }

    pub fn find_by_path(&self, relative_path: &str) -> Option<(usize, &Project)> {
        if relative_path.is_empty() {
            return None;
        }
        self.projects
            .iter()
            .enumerate()
            .find(|(_, project)| project.relative_path == relative_path)
    }

    pub fn filter_label(&self, key: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|filter| filter.key == key)
            .map(|filter| filter.display.as_str())
    }
}
