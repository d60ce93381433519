//! Frontend Models
//!
//! Records of the project catalog.

use serde::{Deserialize, Serialize};

/// A project shown as a card on the listing page.
/// Identity is its position in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub explanation: String,
    /// Path under `/projects/`; empty means the card links to the listing
    #[serde(default)]
    pub relative_path: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub hover_image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.iter().any(|tag| tag == key)
    }

    pub fn href(&self) -> String {
        format!("/projects/{}", self.relative_path)
    }
}

/// Category chip: tag key plus display label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub key: String,
    pub display: String,
}

/// Page-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub page_name: String,
    pub tagline: String,
    /// Idle window before the visible set is recomputed
    pub debounce_ms: u32,
    pub placeholder_image: String,
    pub placeholder_hover_image: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_name: "Projects".to_string(),
            tagline: "Check out some of my projects below!".to_string(),
            debounce_ms: 150,
            placeholder_image: "/assets/placeholder.png".to_string(),
            placeholder_hover_image: "/assets/placeholder.png".to_string(),
        }
    }
}
