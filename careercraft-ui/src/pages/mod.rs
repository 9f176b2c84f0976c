//! Pages
//!
//! Components mounted in the main region.

pub mod dashboard;
pub mod placeholder;

pub use dashboard::Dashboard;
pub use placeholder::Placeholder;
