//! Dashboard Render Model
//!
//! Pure projections from a load state to what the dashboard shows. Browser
//! and terminal renderers draw the same model.
//!
//! - [`cards`]: the four statistic cards
//! - [`charts`]: chart panels with their geometry
//! - [`insights`]: the recommendations panel
//! - [`screen`]: loading / error / ready selection
//! - [`text`]: terminal rendering

pub mod cards;
pub mod charts;
pub mod format;
pub mod insights;
pub mod screen;
pub mod text;

pub use cards::{stat_cards, StatCard, Tone};
pub use charts::{
    chart_panels, nice_max, Axis, Bar, BarChart, Chart, ChartPanel, LineChart, LineSeries,
    Orientation, PieChart, PieSlice,
};
pub use insights::{recommendations, Recommendations};
pub use screen::{DashboardView, Screen, LOADING_MESSAGE};
pub use text::render_screen;
