//! Plain-text renderer
//!
//! Draws a [`Screen`] for the terminal. Charts become labelled bar rows
//! scaled against each chart's axis maximum.

use std::fmt::Write;

use super::charts::{Chart, ChartPanel};
use super::format;
use super::insights::{IMPROVEMENTS_TITLE, PANEL_TITLE, STRATEGIES_TITLE};
use super::screen::{DashboardView, Screen};

const BAR_WIDTH: usize = 30;

pub fn render_screen(screen: &Screen) -> String {
    match screen {
        Screen::Loading { message } | Screen::Error { message } => format!("{}\n", message),
        Screen::Ready(view) => render_dashboard(view),
    }
}

fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", view.heading);
    let _ = writeln!(out, "{}", view.intro);
    let _ = writeln!(out);

    for card in &view.cards {
        let _ = writeln!(out, "{:<28} {:>10}  {}", card.title, card.value, card.subtext);
    }

    for panel in &view.charts {
        let _ = writeln!(out);
        render_panel(&mut out, panel);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", PANEL_TITLE);
    let _ = writeln!(out, "  {}", IMPROVEMENTS_TITLE);
    for item in &view.recommendations.improvements {
        let _ = writeln!(out, "    - {}", item);
    }
    let _ = writeln!(out, "  {}", STRATEGIES_TITLE);
    for item in &view.recommendations.strategies {
        let _ = writeln!(out, "    - {}", item);
    }

    out
}

fn render_panel(out: &mut String, panel: &ChartPanel) {
    let _ = writeln!(out, "{}", panel.title);

    match &panel.chart {
        Chart::Line(line) => {
            for series in &line.series {
                let _ = writeln!(out, "  {}", series.label);
                for (category, value) in line.categories.iter().zip(&series.values) {
                    bar_row(out, category, *value, series.axis_max, &format::number(*value));
                }
            }
        }
        Chart::Pie(pie) => {
            for slice in &pie.slices {
                bar_row(out, &slice.name, slice.fraction, 1.0, &slice.label);
            }
        }
        Chart::Bar(bars) => {
            let _ = writeln!(out, "  {}", bars.series_label);
            for bar in &bars.bars {
                bar_row(out, &bar.name, bar.value, bars.axis_max, &format::number(bar.value));
            }
        }
    }
}

fn bar_row(out: &mut String, name: &str, value: f64, max: f64, caption: &str) {
    let filled = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize
    } else {
        0
    };
    let _ = writeln!(
        out,
        "  {:<16} {}{} {}",
        name,
        "█".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        caption
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::{FetchFailure, LoadState, Loaded};
    use crate::snapshot::fixtures::sample_snapshot;

    #[test]
    fn test_error_screen_is_message_only() {
        let state = LoadState::Loading.settle(Err(FetchFailure::Status(503)));
        let text = render_screen(&Screen::from_state(&state));
        assert_eq!(text, "Erro ao carregar dados: HTTP error! Status: 503\n");
    }

    #[test]
    fn test_ready_screen_contains_cards_and_panels() {
        let state = LoadState::Loading
            .settle(Ok(Loaded { snapshot: sample_snapshot(), warnings: Vec::new() }));
        let text = render_screen(&Screen::from_state(&state));

        assert!(text.contains("Total de Conversas"));
        assert!(text.contains("18.4h"));
        assert!(text.contains("30 conversões"));
        assert!(text.contains("Distribuição de Anexos"));
        assert!(text.contains("imagem: 75.0%"));
        assert!(text.contains("(42%)"));
    }
}
