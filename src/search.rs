//! Search / Filter
//!
//! Narrows the catalog to the projects matching the query text and the
//! selected filter chip.

use crate::models::Project;

/// Listing query: free text plus at most one selected filter key
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryState {
    pub text: String,
    pub filter: Option<String>,
}

impl QueryState {
    pub fn new(text: impl Into<String>, filter: Option<&str>) -> Self {
        Self {
            text: text.into(),
            filter: filter.map(str::to_string),
        }
    }

    pub fn toggle_filter(&mut self, key: &str) {
        self.filter = toggle_filter(self.filter.take(), key);
    }

    pub fn matches(&self, project: &Project) -> bool {
        matches_text(project, &self.text) && matches_filter(project, self.filter.as_deref())
    }
}

/// Selecting the active filter again clears it
pub fn toggle_filter(current: Option<String>, key: &str) -> Option<String> {
    match current {
        Some(active) if active == key => None,
        _ => Some(key.to_string()),
    }
}

/// Name or any tag contains the query, ignoring case. Empty query matches all.
pub fn matches_text(project: &Project, query: &str) -> bool {
    let query = query.to_lowercase();
    project.name.to_lowercase().contains(&query)
        || project.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
}

pub fn matches_filter(project: &Project, filter: Option<&str>) -> bool {
    filter.map_or(true, |key| project.has_tag(key))
}

/// Catalog positions of the projects currently displayed, ascending
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleSet(Vec<usize>);

impl VisibleSet {
    /// Every one of `count` projects
    pub fn all(count: usize) -> Self {
        Self((0..count).collect())
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn projects<'a>(&'a self, projects: &'a [Project]) -> impl Iterator<Item = &'a Project> + 'a {
        self.0.iter().filter_map(move |&index| projects.get(index))
    }
}

/// Projects matching both predicates, in catalog order
pub fn compute_visible(projects: &[Project], query: &QueryState) -> VisibleSet {
    VisibleSet(
        projects
            .iter()
            .enumerate()
            .filter(|(_, project)| query.matches(project))
            .map(|(index, _)| index)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn make_project(name: &str, tags: &[&str]) -> Project {
        Project {
            name: name.to_string(),
            explanation: format!("About {}", name),
            relative_path: String::new(),
            image: None,
            hover_image: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn names(projects: &[Project], visible: &VisibleSet) -> Vec<String> {
        visible.projects(projects).map(|p| p.name.clone()).collect()
    }

    fn scenario() -> Vec<Project> {
        vec![
            make_project("3D Cube", &["css"]),
            make_project("Second", &["javascript", "three"]),
        ]
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let projects = Catalog::builtin().unwrap().projects;
        let visible = compute_visible(&projects, &QueryState::default());
        assert_eq!(visible, VisibleSet::all(projects.len()));
    }

    #[test]
    fn test_query_matches_name() {
        let projects = scenario();
        let visible = compute_visible(&projects, &QueryState::new("cube", None));
        assert_eq!(names(&projects, &visible), vec!["3D Cube"]);
    }

    #[test]
    fn test_query_matches_tag_substring() {
        let projects = scenario();
        let visible = compute_visible(&projects, &QueryState::new("scr", None));
        assert_eq!(names(&projects, &visible), vec!["Second"]);
    }

    #[test]
    fn test_description_is_not_searched() {
        let projects = scenario();
        let visible = compute_visible(&projects, &QueryState::new("about", None));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_filter_only() {
        let projects = Catalog::builtin().unwrap().projects;
        let visible = compute_visible(&projects, &QueryState::new("", Some("three")));
        assert_eq!(names(&projects, &visible), vec!["Second", "Third", "Broken"]);

        let projects = scenario();
        let visible = compute_visible(&projects, &QueryState::new("", Some("three")));
        assert_eq!(names(&projects, &visible), vec!["Second"]);
    }

    #[test]
    fn test_filter_requires_exact_tag() {
        let projects = scenario();
        let visible = compute_visible(&projects, &QueryState::new("", Some("thr")));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_query_and_filter_combine() {
        let projects = Catalog::builtin().unwrap().projects;
        let visible = compute_visible(&projects, &QueryState::new("css", Some("javascript")));
        assert_eq!(names(&projects, &visible), vec!["Broken"]);
    }

    #[test]
    fn test_case_insensitive() {
        let projects = Catalog::builtin().unwrap().projects;
        let upper = compute_visible(&projects, &QueryState::new("CSS", None));
        let lower = compute_visible(&projects, &QueryState::new("css", None));
        assert_eq!(upper, lower);
        assert_eq!(names(&projects, &upper), vec!["3D Cube", "Broken"]);
    }

    #[test]
    fn test_idempotent() {
        let projects = Catalog::builtin().unwrap().projects;
        let query = QueryState::new("t", Some("three"));
        assert_eq!(compute_visible(&projects, &query), compute_visible(&projects, &query));
    }

    #[test]
    fn test_visible_is_subset_in_order() {
        let projects = Catalog::builtin().unwrap().projects;
        for text in ["", "o", "th", "zzz"] {
            let visible = compute_visible(&projects, &QueryState::new(text, None));
            assert!(visible.indices().windows(2).all(|w| w[0] < w[1]));
            assert!(visible.indices().iter().all(|&i| i < projects.len()));
        }
    }

    #[test]
    fn test_toggle_filter() {
        let mut query = QueryState::default();
        query.toggle_filter("css");
        assert_eq!(query.filter.as_deref(), Some("css"));
        query.toggle_filter("css");
        assert_eq!(query.filter, None);
    }

    #[test]
    fn test_toggle_switches_filter() {
        assert_eq!(toggle_filter(Some("css".to_string()), "three"), Some("three".to_string()));
        assert_eq!(toggle_filter(None, "three"), Some("three".to_string()));
    }

    #[test]
    fn test_visible_contains() {
        let visible = VisibleSet(vec![0, 2, 4]);
        assert!(visible.contains(2));
        assert!(!visible.contains(3));
        assert_eq!(visible.len(), 3);
    }
}
