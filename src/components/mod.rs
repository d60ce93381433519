//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod search_bar;
mod filter_chips;
mod project_card;
mod project_detail;
mod projects_page;

pub use header::Header;
pub use search_bar::SearchBar;
pub use filter_chips::FilterChips;
pub use project_card::ProjectCard;
pub use project_detail::ProjectDetail;
pub use projects_page::ProjectsPage;
