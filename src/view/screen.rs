//! Screen
//!
//! What the dashboard region shows, as a pure function of the load state.
//! Cards and charts exist only on a ready screen, so a partial set can never
//! be rendered.

use serde::Serialize;

use super::cards::{stat_cards, StatCard};
use super::charts::{chart_panels, ChartPanel};
use super::insights::{recommendations, Recommendations};
use crate::load::LoadState;
use crate::snapshot::DashboardSnapshot;

pub const LOADING_MESSAGE: &str = "Carregando dados do dashboard...";
pub const HEADING: &str = "Dashboard";
pub const INTRO: &str =
    "Visão geral das métricas de conversação e desempenho da CareerCraft Europe no Instagram.";

/// Everything rendered once the snapshot is ready
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub heading: &'static str,
    pub intro: &'static str,
    pub cards: Vec<StatCard>,
    pub charts: Vec<ChartPanel>,
    pub recommendations: Recommendations,
}

impl DashboardView {
    pub fn project(snapshot: &DashboardSnapshot) -> Self {
        Self {
            heading: HEADING,
            intro: INTRO,
            cards: stat_cards(&snapshot.stats),
            charts: chart_panels(snapshot),
            recommendations: recommendations(snapshot),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Screen {
    Loading { message: String },
    Error { message: String },
    Ready(Box<DashboardView>),
}

impl Screen {
    pub fn from_state(state: &LoadState) -> Self {
        match state {
            LoadState::Loading => Screen::Loading { message: LOADING_MESSAGE.to_string() },
            LoadState::Error(failure) => Screen::Error {
                message: format!("Erro ao carregar dados: {}", failure),
            },
            LoadState::Ready(loaded) => {
                Screen::Ready(Box::new(DashboardView::project(&loaded.snapshot)))
            }
        }
    }

    pub fn stat_cards(&self) -> &[StatCard] {
        match self {
            Screen::Ready(view) => &view.cards,
            _ => &[],
        }
    }

    pub fn charts(&self) -> &[ChartPanel] {
        match self {
            Screen::Ready(view) => &view.charts,
            _ => &[],
        }
    }

    /// Message shown instead of the dashboard, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Screen::Loading { message } | Screen::Error { message } => Some(message),
            Screen::Ready(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::{FetchFailure, Loaded};
    use crate::snapshot::fixtures::sample_snapshot;

    fn ready_state() -> LoadState {
        LoadState::Loading.settle(Ok(Loaded { snapshot: sample_snapshot(), warnings: Vec::new() }))
    }

    #[test]
    fn test_loading_renders_nothing_else() {
        let screen = Screen::from_state(&LoadState::Loading);
        assert_eq!(screen.message(), Some(LOADING_MESSAGE));
        assert!(screen.stat_cards().is_empty());
        assert!(screen.charts().is_empty());
    }

    #[test]
    fn test_server_error_renders_only_message() {
        let state = LoadState::Loading.settle(Err(FetchFailure::Status(500)));
        let screen = Screen::from_state(&state);

        assert_eq!(screen.message(), Some("Erro ao carregar dados: HTTP error! Status: 500"));
        assert!(screen.stat_cards().is_empty());
        assert!(screen.charts().is_empty());
    }

    #[test]
    fn test_ready_renders_full_set() {
        let screen = Screen::from_state(&ready_state());
        assert!(screen.message().is_none());
        assert_eq!(screen.stat_cards().len(), 4);
        assert_eq!(screen.charts().len(), 4);
    }

    #[test]
    fn test_literal_snapshot_round_trip() {
        let screen = Screen::from_state(&ready_state());
        let Screen::Ready(view) = &screen else {
            panic!("expected ready screen");
        };

        assert_eq!(view.cards[0].value, "120");
        assert_eq!(view.cards[1].value, "25%");
        assert_eq!(view.cards[1].subtext, "30 conversões");
        assert_eq!(view.cards[2].value, "18.4h");
        assert!(view.recommendations.improvements[2].contains("(42%)"));
    }

    #[test]
    fn test_screen_serializes_with_state_tag() {
        let json = serde_json::to_value(Screen::from_state(&LoadState::Loading)).unwrap();
        assert_eq!(json["state"], "loading");
        assert_eq!(json["message"], LOADING_MESSAGE);
    }
}
