//! Chart Component
//!
//! Chart panels drawn on HTML5 Canvas from the shared chart geometry.

use leptos::*;
use std::f64::consts::FRAC_PI_2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use careercraft_bi::view::charts::{
    Axis, BarChart, Chart, ChartPanel, LineChart, Orientation, PieChart,
};
use careercraft_bi::view::format;

const GRID_LINES: usize = 5;
const GRID_COLOR: &str = "#e5e7eb"; // gray-200
const LABEL_COLOR: &str = "#6b7280"; // gray-500
const PIE_RADIUS: f64 = 80.0;

/// Titled chart panel
#[component]
pub fn ChartCard(panel: ChartPanel) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let legend = legend_entries(&panel.chart);
    let hover_text = hover_text(&panel.chart);
    let chart = panel.chart;

    // Draw once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &chart);
        }
    });

    view! {
        <div class="bg-white p-6 rounded-lg shadow">
            <h3 class="text-lg font-medium mb-4">{panel.title}</h3>
            <canvas
                node_ref=canvas_ref
                width="600"
                height="300"
                title=hover_text
                class="w-full h-[300px]"
            />
            <ChartLegend entries=legend />
        </div>
    }
}

/// Legend showing series colors
#[component]
fn ChartLegend(entries: Vec<(&'static str, &'static str)>) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {entries
                .into_iter()
                .map(|(label, color)| {
                    view! {
                        <div class="flex items-center space-x-2">
                            <div
                                class="w-3 h-3 rounded-full"
                                style=format!("background-color: {}", color)
                            />
                            <span class="text-sm text-gray-600">{label}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Series labels and colours; pies label their slices instead
fn legend_entries(chart: &Chart) -> Vec<(&'static str, &'static str)> {
    match chart {
        Chart::Line(line) => line.series.iter().map(|s| (s.label, s.color)).collect(),
        Chart::Bar(bar) => vec![(bar.series_label, bar.color)],
        Chart::Pie(_) => Vec::new(),
    }
}

fn hover_text(chart: &Chart) -> String {
    match chart {
        Chart::Pie(pie) => pie
            .slices
            .iter()
            .map(|s| format!("{}: {}", s.name, s.tooltip))
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}

/// Drawing area inside the canvas margins
#[derive(Debug, Clone, Copy, PartialEq)]
struct Plot {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Plot {
    fn new(canvas_width: f64, canvas_height: f64, margin_left: f64, margin_right: f64) -> Self {
        let top = 20.0;
        let bottom = 40.0;
        Self {
            left: margin_left,
            top,
            width: canvas_width - margin_left - margin_right,
            height: canvas_height - top - bottom,
        }
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Canvas y of `value` on an axis running from 0 to `max`
    fn y_for(&self, value: f64, max: f64) -> f64 {
        self.bottom() - (value / max) * self.height
    }

    /// Canvas x of the `index`-th of `count` evenly spaced points
    fn x_for_point(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            self.left + self.width / 2.0
        } else {
            self.left + (index as f64 / (count - 1) as f64) * self.width
        }
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, chart: &Chart) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#ffffff".into());
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_font("12px sans-serif");

    match chart {
        Chart::Line(line) => draw_line_chart(&ctx, width, height, line),
        Chart::Pie(pie) => draw_pie_chart(&ctx, width, height, pie),
        Chart::Bar(bar) => match bar.orientation {
            Orientation::Vertical => draw_vertical_bars(&ctx, width, height, bar),
            Orientation::Horizontal => draw_horizontal_bars(&ctx, width, height, bar),
        },
    }
}

fn draw_horizontal_grid(ctx: &CanvasRenderingContext2d, plot: &Plot) {
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);

    for i in 0..=GRID_LINES {
        let y = plot.top + (i as f64 / GRID_LINES as f64) * plot.height;
        ctx.begin_path();
        ctx.move_to(plot.left, y);
        ctx.line_to(plot.right(), y);
        ctx.stroke();
    }
}

/// Tick labels for an axis running from 0 to `max`, top to bottom
fn draw_value_labels(ctx: &CanvasRenderingContext2d, plot: &Plot, max: f64, x: f64) {
    ctx.set_fill_style(&LABEL_COLOR.into());
    for i in 0..=GRID_LINES {
        let value = max * (GRID_LINES - i) as f64 / GRID_LINES as f64;
        let y = plot.top + (i as f64 / GRID_LINES as f64) * plot.height;
        let _ = ctx.fill_text(&format::number(value), x, y + 4.0);
    }
}

fn draw_no_data(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("16px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text("Sem dados", width / 2.0, height / 2.0);
    ctx.set_text_align("start");
}

fn draw_line_chart(ctx: &CanvasRenderingContext2d, width: f64, height: f64, chart: &LineChart) {
    let plot = Plot::new(width, height, 50.0, 50.0);
    draw_horizontal_grid(ctx, &plot);

    let count = chart.categories.len();
    if count == 0 {
        draw_no_data(ctx, width, height);
        return;
    }

    for series in &chart.series {
        let label_x = match series.axis {
            Axis::Left => 5.0,
            Axis::Right => plot.right() + 8.0,
        };
        draw_value_labels(ctx, &plot, series.axis_max, label_x);

        ctx.set_stroke_style(&series.color.into());
        ctx.set_line_width(2.0);
        ctx.begin_path();
        for (i, value) in series.values.iter().enumerate() {
            let x = plot.x_for_point(i, count);
            let y = plot.y_for(*value, series.axis_max);
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();

        ctx.set_fill_style(&series.color.into());
        for (i, value) in series.values.iter().enumerate() {
            ctx.begin_path();
            let _ = ctx.arc(
                plot.x_for_point(i, count),
                plot.y_for(*value, series.axis_max),
                3.0,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }
    }

    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_text_align("center");
    for (i, name) in chart.categories.iter().enumerate() {
        let _ = ctx.fill_text(name, plot.x_for_point(i, count), height - 10.0);
    }
    ctx.set_text_align("start");
}

fn draw_pie_chart(ctx: &CanvasRenderingContext2d, width: f64, height: f64, chart: &PieChart) {
    if chart.total <= 0.0 {
        draw_no_data(ctx, width, height);
        return;
    }

    let (cx, cy) = (width / 2.0, height / 2.0);

    for slice in chart.slices.iter().filter(|s| s.fraction > 0.0) {
        // Start at twelve o'clock
        let start = slice.start_angle - FRAC_PI_2;
        let end = slice.end_angle - FRAC_PI_2;

        ctx.set_fill_style(&slice.color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, PIE_RADIUS, start, end);
        ctx.close_path();
        ctx.fill();

        let mid = (start + end) / 2.0;
        let label_x = cx + (PIE_RADIUS + 12.0) * mid.cos();
        let label_y = cy + (PIE_RADIUS + 12.0) * mid.sin();
        ctx.set_text_align(if mid.cos() >= 0.0 { "left" } else { "right" });
        let _ = ctx.fill_text(&slice.label, label_x, label_y + 4.0);
    }

    ctx.set_text_align("start");
}

fn draw_vertical_bars(ctx: &CanvasRenderingContext2d, width: f64, height: f64, chart: &BarChart) {
    let plot = Plot::new(width, height, 50.0, 30.0);
    draw_horizontal_grid(ctx, &plot);
    draw_value_labels(ctx, &plot, chart.axis_max, 5.0);

    if chart.bars.is_empty() {
        draw_no_data(ctx, width, height);
        return;
    }

    let band = plot.width / chart.bars.len() as f64;
    let bar_width = band * 0.6;

    for (i, bar) in chart.bars.iter().enumerate() {
        let x = plot.left + band * i as f64 + (band - bar_width) / 2.0;
        let y = plot.y_for(bar.value, chart.axis_max);

        ctx.set_fill_style(&chart.color.into());
        ctx.fill_rect(x, y, bar_width, plot.bottom() - y);

        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_text_align("center");
        let _ = ctx.fill_text(&bar.name, x + bar_width / 2.0, height - 10.0);
        ctx.set_text_align("start");
    }
}

/// Categories on the y axis, values along x
fn draw_horizontal_bars(ctx: &CanvasRenderingContext2d, width: f64, height: f64, chart: &BarChart) {
    let plot = Plot::new(width, height, 110.0, 30.0);

    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_text_align("center");
    for i in 0..=GRID_LINES {
        let x = plot.left + (i as f64 / GRID_LINES as f64) * plot.width;
        ctx.begin_path();
        ctx.move_to(x, plot.top);
        ctx.line_to(x, plot.bottom());
        ctx.stroke();

        let value = chart.axis_max * i as f64 / GRID_LINES as f64;
        ctx.set_fill_style(&LABEL_COLOR.into());
        let _ = ctx.fill_text(&format::number(value), x, plot.bottom() + 16.0);
    }
    ctx.set_text_align("start");

    if chart.bars.is_empty() {
        draw_no_data(ctx, width, height);
        return;
    }

    let band = plot.height / chart.bars.len() as f64;
    let bar_height = band * 0.6;

    for (i, bar) in chart.bars.iter().enumerate() {
        let y = plot.top + band * i as f64 + (band - bar_height) / 2.0;
        let length = (bar.value / chart.axis_max) * plot.width;

        ctx.set_fill_style(&chart.color.into());
        ctx.fill_rect(plot.left, y, length, bar_height);

        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_text_align("right");
        let _ = ctx.fill_text(&bar.name, plot.left - 8.0, y + bar_height / 2.0 + 4.0);
        ctx.set_text_align("start");
    }
}
