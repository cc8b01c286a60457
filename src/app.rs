use eframe::egui;

use crate::chart::figure::FigureSize;
use crate::chart::Chart;
use crate::error::RenderError;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ChartApp {
    pub chart: Chart,
}

impl ChartApp {
    pub fn new(chart: Chart) -> Self {
        Self { chart }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&self.chart.title);
            });
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_plot(ui, &self.chart);
        });
    }
}

/// Open a window showing `chart` and block until the user closes it.
pub fn show(chart: Chart) -> Result<(), RenderError> {
    let (width, height) = chart.size.pixels();
    let min = FigureSize {
        width: chart.size.width / 2.0,
        height: chart.size.height / 2.0,
    }
    .pixels();
    let title = chart.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_min_inner_size([min.0 as f32, min.1 as f32])
            .with_title(title.as_str()),
        ..Default::default()
    };

    log::info!("opening chart window ({width}x{height})");
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ChartApp::new(chart)))),
    )
    .map_err(|e| RenderError::Viewer(e.to_string()))
}
