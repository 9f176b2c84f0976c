//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod nav;
pub mod recommendations;
pub mod stat_card;

pub use chart::ChartCard;
pub use loading::Loading;
pub use nav::Sidebar;
pub use recommendations::RecommendationsPanel;
pub use stat_card::StatCard;
