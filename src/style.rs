//! Style States
//!
//! Render-time style of cards and filter chips, resolved to fixed class tokens.

use crate::models::Project;
use crate::search::{QueryState, VisibleSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleState {
    Default,
    Hidden,
    Selected,
    Transitioning,
}

impl StyleState {
    pub fn card_class(self) -> &'static str {
        match self {
            StyleState::Default | StyleState::Selected => "project-card",
            StyleState::Hidden => "project-card hidden",
            StyleState::Transitioning => "project-card shrinking",
        }
    }

    pub fn chip_class(self) -> &'static str {
        match self {
            StyleState::Selected => "filter-chip selected",
            _ => "filter-chip",
        }
    }
}

/// Displayed membership disagrees with what the current query says
pub fn is_transitioning(was_visible: bool, matches_now: bool) -> bool {
    was_visible != matches_now
}

/// Style of every card for one render pass.
///
/// `visible` is the last computed set; `query` is the live input, which may be
/// ahead of it while the debounce window is open. Once a card is transitioning,
/// every card after it shrinks too, since the grid reflows behind it.
pub fn classify_cards(projects: &[Project], visible: &VisibleSet, query: &QueryState) -> Vec<StyleState> {
    let mut moving = false;
    projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let was_visible = visible.contains(index);
            if is_transitioning(was_visible, query.matches(project)) {
                moving = true;
            }
            if !was_visible {
                StyleState::Hidden
            } else if moving {
                StyleState::Transitioning
            } else {
                StyleState::Default
            }
        })
        .collect()
}

pub fn chip_style(key: &str, active: Option<&str>) -> StyleState {
    if active == Some(key) {
        StyleState::Selected
    } else {
        StyleState::Default
    }
}
