use std::path::Path;

use image::{ImageFormat, RgbImage};
use plotters::prelude::*;

use super::figure::Chart;
use crate::color::series_color;
use crate::error::RenderError;

const FONT: &str = "sans-serif";

/// Rasterise `chart` and write it as a PNG file at `path`.
///
/// Drawing happens in memory; the file is only created once the image is
/// complete, and removed again if encoding fails.
pub fn save_png(chart: &Chart, path: &Path) -> Result<(), RenderError> {
    let (width, height) = chart.size.pixels();
    let pixels = rasterize(chart, fonts_available())?;

    let image = RgbImage::from_raw(width, height, pixels)
        .ok_or_else(|| RenderError::Draw("pixel buffer does not match figure size".into()))?;

    if let Err(source) = image.save_with_format(path, ImageFormat::Png) {
        let _ = std::fs::remove_file(path);
        return Err(RenderError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    log::info!("wrote {width}x{height} chart to {}", path.display());
    Ok(())
}

/// Whether text can be laid out. Headless machines often have no system
/// fonts; the chart is then drawn without title, labels and legend.
fn fonts_available() -> bool {
    match (FONT, 16.0).into_font().box_size("Prob") {
        Ok(_) => true,
        Err(e) => {
            log::warn!("no usable '{FONT}' font ({e:?}); drawing chart without text");
            false
        }
    }
}

fn draw_err(err: impl std::fmt::Display) -> RenderError {
    RenderError::Draw(err.to_string())
}

/// Draw the chart into a packed RGB buffer.
fn rasterize(chart: &Chart, with_text: bool) -> Result<Vec<u8>, RenderError> {
    let (width, height) = chart.size.pixels();
    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    let (x_range, y_range) = chart.bounds();
    let show_legend = with_text && chart.legend;

    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(20);
        if with_text {
            builder
                .caption(&chart.title, (FONT, 22))
                .x_label_area_size(45)
                .y_label_area_size(60);
        }
        let mut ctx = builder
            .build_cartesian_2d(x_range, y_range)
            .map_err(draw_err)?;

        {
            let mut mesh = ctx.configure_mesh();
            if with_text {
                mesh.x_desc(chart.x_label.as_str())
                    .y_desc(chart.y_label.as_str());
            } else {
                mesh.x_labels(0).y_labels(0);
            }
            if !chart.grid {
                mesh.disable_mesh();
            }
            mesh.draw().map_err(draw_err)?;
        }

        for series in &chart.series {
            let color: RGBColor = series_color(series.kind).into();
            let style = color.stroke_width(2);

            // Zero-length carrier so every series gets a legend entry, even
            // when it has no finite points.
            let carrier = ctx
                .draw_series(LineSeries::new(std::iter::empty::<(f64, f64)>(), style))
                .map_err(draw_err)?;
            if show_legend {
                carrier
                    .label(series.kind.name())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
            }

            for segment in series.segments() {
                ctx.draw_series(LineSeries::new(segment.iter().copied(), style))
                    .map_err(draw_err)?;
            }
        }

        if show_legend {
            ctx.configure_series_labels()
                .position(SeriesLabelPosition::UpperRight)
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(draw_err)?;
        }

        root.present().map_err(draw_err)?;
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::figure::ProbRecord;

    fn record(prob: f64) -> ProbRecord {
        ProbRecord {
            prob,
            cor: 1.0 - prob,
            miss: prob / 2.0,
            fail: prob / 2.0,
            ratio: 1.0 + prob,
        }
    }

    #[test]
    fn rasterize_fills_whole_figure() {
        let chart = Chart::from_records(&[record(0.1), record(0.5), record(0.9)]);
        let buffer = rasterize(&chart, false).unwrap();
        assert_eq!(buffer.len(), 1000 * 600 * 3);
        // Background is white and at least one line pixel is not.
        assert_eq!(&buffer[..3], &[255, 255, 255]);
        assert!(buffer.chunks_exact(3).any(|px| px != [255, 255, 255]));
    }

    #[test]
    fn empty_chart_still_rasterizes() {
        let chart = Chart::from_records(&[]);
        assert!(rasterize(&chart, false).is_ok());
    }
}
