//! Navigation Table
//!
//! One declarative list of sidebar entries. The sidebar renders it and the
//! router resolves paths against it.

use serde::Serialize;

/// Sidebar brand
pub const BRAND: &str = "CareerCraft BI";

/// Header title shown above every page
pub const HEADER_TITLE: &str = "Análise de Mensagens do Instagram";

/// Icon shown next to a sidebar label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Home,
    MessageSquare,
    Rocket,
    FileText,
    TrendingUp,
    PieChart,
    BarChart,
    Zap,
}

impl Icon {
    /// Glyph used by text and browser renderers
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Home => "🏠",
            Icon::MessageSquare => "💬",
            Icon::Rocket => "🚀",
            Icon::FileText => "📄",
            Icon::TrendingUp => "📈",
            Icon::PieChart => "🥧",
            Icon::BarChart => "📊",
            Icon::Zap => "⚡",
        }
    }
}

/// What the main region mounts for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteView {
    Dashboard,
    /// Inert page showing only the route label
    Placeholder,
}

/// One navigation destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub view: RouteView,
}

impl Route {
    /// Whether mounting this route reads the snapshot
    pub fn fetches_snapshot(&self) -> bool {
        self.view == RouteView::Dashboard
    }

    /// Text a placeholder page displays
    pub fn placeholder_text(&self) -> Option<&'static str> {
        match self.view {
            RouteView::Placeholder => Some(self.label),
            RouteView::Dashboard => None,
        }
    }
}

/// All destinations, in sidebar order
pub const ROUTES: &[Route] = &[
    Route { path: "/", label: "Dashboard", icon: Icon::Home, view: RouteView::Dashboard },
    Route {
        path: "/conversations",
        label: "Análise de Conversas",
        icon: Icon::MessageSquare,
        view: RouteView::Placeholder,
    },
    Route {
        path: "/campaigns",
        label: "Análise de Campanhas",
        icon: Icon::Rocket,
        view: RouteView::Placeholder,
    },
    Route {
        path: "/attachments",
        label: "Análise de Anexos",
        icon: Icon::FileText,
        view: RouteView::Placeholder,
    },
    Route {
        path: "/lead-journey",
        label: "Jornada do Lead",
        icon: Icon::TrendingUp,
        view: RouteView::Placeholder,
    },
    Route {
        path: "/pain-points",
        label: "Análise de Dores",
        icon: Icon::PieChart,
        view: RouteView::Placeholder,
    },
    Route {
        path: "/message-effectiveness",
        label: "Eficácia de Mensagens",
        icon: Icon::BarChart,
        view: RouteView::Placeholder,
    },
    Route {
        path: "/automation",
        label: "Sugestões de Automação",
        icon: Icon::Zap,
        view: RouteView::Placeholder,
    },
];

/// Resolve a path by exact match
pub fn resolve(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|route| route.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_shape() {
        assert_eq!(ROUTES.len(), 8);
        let dashboards: Vec<_> = ROUTES.iter().filter(|r| r.fetches_snapshot()).collect();
        assert_eq!(dashboards.len(), 1);
        assert_eq!(dashboards[0].path, "/");

        let paths: HashSet<_> = ROUTES.iter().map(|r| r.path).collect();
        assert_eq!(paths.len(), ROUTES.len());
    }

    #[test]
    fn test_campaigns_is_placeholder() {
        let route = resolve("/campaigns").unwrap();
        assert_eq!(route.placeholder_text(), Some("Análise de Campanhas"));
        assert!(!route.fetches_snapshot());
    }

    #[test]
    fn test_exact_match_only() {
        assert!(resolve("/campaigns/").is_none());
        assert!(resolve("/campaigns?tab=1").is_none());
        assert!(resolve("").is_none());
        assert_eq!(resolve("/").map(|r| r.view), Some(RouteView::Dashboard));
    }

    #[test]
    fn test_icon_serializes_kebab_case() {
        let json = serde_json::to_string(&Icon::MessageSquare).unwrap();
        assert_eq!(json, "\"message-square\"");
    }
}
