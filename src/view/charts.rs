//! Chart Panels
//!
//! Renderer-independent chart descriptions. Each panel carries the series
//! exactly as received plus the derived geometry a renderer needs: axis
//! upper bounds and pie-slice angles.

use serde::Serialize;
use std::f64::consts::TAU;

use crate::snapshot::DashboardSnapshot;

/// Palette cycled across pie slices
pub const SLICE_COLORS: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8"];

/// Primary series colour
pub const PRIMARY_COLOR: &str = "#8884d8";

/// Secondary series colour
pub const SECONDARY_COLOR: &str = "#82ca9d";

/// Which vertical axis a line series is scaled against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Left,
    Right,
}

/// One line over the chart's categories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub label: &'static str,
    pub color: &'static str,
    pub axis: Axis,
    pub values: Vec<f64>,
    pub axis_max: f64,
}

/// Lines sharing an x axis of category names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub categories: Vec<String>,
    pub series: Vec<LineSeries>,
}

/// One pie slice; angles are radians measured from the start of the pie
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    pub fraction: f64,
    pub label: String,
    pub tooltip: String,
    pub color: &'static str,
    pub start_angle: f64,
    pub end_angle: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub total: f64,
    pub slices: Vec<PieSlice>,
}

/// Bar direction; `Horizontal` puts categories on the y axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub orientation: Orientation,
    pub series_label: &'static str,
    pub color: &'static str,
    pub bars: Vec<Bar>,
    pub axis_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Chart {
    Line(LineChart),
    Pie(PieChart),
    Bar(BarChart),
}

/// A titled chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPanel {
    pub title: &'static str,
    pub chart: Chart,
}

/// The four panels, in display order
pub fn chart_panels(snapshot: &DashboardSnapshot) -> Vec<ChartPanel> {
    vec![
        ChartPanel { title: "Conversões por Mês", chart: Chart::Line(conversion_chart(snapshot)) },
        ChartPanel { title: "Distribuição de Anexos", chart: Chart::Pie(attachment_chart(snapshot)) },
        ChartPanel {
            title: "Eficácia por Tipo de Anexo",
            chart: Chart::Bar(bar_chart(
                Orientation::Vertical,
                "Taxa de Conversão (%)",
                PRIMARY_COLOR,
                snapshot.effectiveness_data.iter().map(|e| (e.name.as_str(), e.rate)),
            )),
        },
        ChartPanel {
            title: "Principais Dores dos Clientes",
            chart: Chart::Bar(bar_chart(
                Orientation::Horizontal,
                "Frequência",
                SECONDARY_COLOR,
                snapshot.pain_points_data.iter().map(|p| (p.name.as_str(), p.count as f64)),
            )),
        },
    ]
}

fn conversion_chart(snapshot: &DashboardSnapshot) -> LineChart {
    let data = &snapshot.conversion_data;
    let interactions: Vec<f64> = data.iter().map(|p| p.interactions as f64).collect();
    let conversions: Vec<f64> = data.iter().map(|p| p.conversions as f64).collect();

    LineChart {
        categories: data.iter().map(|p| p.name.clone()).collect(),
        series: vec![
            LineSeries {
                label: "Interações",
                color: PRIMARY_COLOR,
                axis: Axis::Left,
                axis_max: nice_max(max_of(&interactions)),
                values: interactions,
            },
            LineSeries {
                label: "Conversões",
                color: SECONDARY_COLOR,
                axis: Axis::Right,
                axis_max: nice_max(max_of(&conversions)),
                values: conversions,
            },
        ],
    }
}

fn attachment_chart(snapshot: &DashboardSnapshot) -> PieChart {
    let total: f64 = snapshot.attachment_data.iter().map(|a| a.value as f64).sum();
    let mut angle = 0.0;

    let slices = snapshot
        .attachment_data
        .iter()
        .enumerate()
        .map(|(index, attachment)| {
            let value = attachment.value as f64;
            let fraction = if total > 0.0 { value / total } else { 0.0 };
            let start_angle = angle;
            angle += fraction * TAU;

            PieSlice {
                name: attachment.name.clone(),
                value,
                fraction,
                label: format!("{}: {:.1}%", attachment.name, fraction * 100.0),
                tooltip: format!("{} anexos", attachment.value),
                color: SLICE_COLORS[index % SLICE_COLORS.len()],
                start_angle,
                end_angle: angle,
            }
        })
        .collect();

    PieChart { total, slices }
}

fn bar_chart<'a>(
    orientation: Orientation,
    series_label: &'static str,
    color: &'static str,
    entries: impl Iterator<Item = (&'a str, f64)>,
) -> BarChart {
    let bars: Vec<Bar> = entries
        .map(|(name, value)| Bar { name: name.to_string(), value })
        .collect();
    let values: Vec<f64> = bars.iter().map(|b| b.value).collect();

    BarChart {
        orientation,
        series_label,
        color,
        axis_max: nice_max(max_of(&values)),
        bars,
    }
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

/// Round an axis maximum up to 1, 2 or 5 times a power of ten
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }

    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .find(|step| normalized <= *step)
        .unwrap_or(10.0);

    step * magnitude
}
