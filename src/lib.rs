//! # CareerCraft BI
//!
//! Instagram conversation analytics dashboard. This crate holds everything
//! that does not depend on where the dashboard is drawn: the snapshot model,
//! the load state machine, the navigation table, and the render model. The
//! browser UI (`careercraft-ui`) and the command-line tool share it.
//!
//! ## Modules
//!
//! - [`snapshot`]: Snapshot data model, boundary validation, rate cross-check
//! - [`load`]: One-shot load operation and its state machine
//! - [`source`]: Where snapshot documents are read from
//! - [`routes`]: The navigation table
//! - [`view`]: Cards, charts, and recommendations derived from a load state
//! - `config`: Configuration file and environment overrides (`native` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use careercraft_bi::{DashboardLoader, FileSource, Screen, ViewLifetime};
//!
//! #[tokio::main]
//! async fn main() {
//!     let source = FileSource::new("./data/dashboard_data.json");
//!     let lifetime = ViewLifetime::new();
//!
//!     if let Some(state) = DashboardLoader::new().load(&source, &lifetime).await {
//!         let screen = Screen::from_state(&state);
//!         print!("{}", careercraft_bi::view::render_screen(&screen));
//!     }
//! }
//! ```

#[cfg(feature = "native")]
pub mod config;
pub mod load;
pub mod routes;
pub mod snapshot;
pub mod source;
pub mod view;

pub use load::{DashboardLoader, FetchFailure, LoadState, Loaded, ViewLifetime};

pub use routes::{resolve, Icon, Route, RouteView, ROUTES};

pub use snapshot::{
    cross_check, validate, DashboardSnapshot, RateMismatch, SnapshotError, Stats,
};

pub use source::{RawResponse, SnapshotSource, SNAPSHOT_PATH};

#[cfg(feature = "native")]
pub use source::{source_for, FileSource, HttpSource};

pub use view::{DashboardView, Screen};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, ConfigOrigin, DataConfig, LoggingConfig};
