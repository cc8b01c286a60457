use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::chart::Chart;
use crate::color::series_color;

// ---------------------------------------------------------------------------
// Chart plot (central panel)
// ---------------------------------------------------------------------------

/// Render the chart's series in the central panel.
pub fn chart_plot(ui: &mut Ui, chart: &Chart) {
    let mut plot = Plot::new("prob_chart")
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .show_grid(chart.grid)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if chart.legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| {
        for series in &chart.series {
            let color: Color32 = series_color(series.kind).into();

            // Lines sharing a name share one legend entry, so a series broken
            // by gaps still shows up once.
            for segment in series.segments() {
                let points: PlotPoints = segment.iter().map(|&(x, y)| [x, y]).collect();
                plot_ui.line(
                    Line::new(points)
                        .name(series.kind.name())
                        .color(color)
                        .width(2.0),
                );
            }
        }
    });
}
