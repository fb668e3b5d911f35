//! Draws a [`Figure`] with plotters.

use std::fs;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::config::FigureConfig;
use crate::error::{Error, Result};
use crate::figure::{Figure, Panel};

/// Whether the text backend can resolve and measure `font`.
pub fn font_available(font: &str) -> bool {
    (font, 12.0).into_font().box_size("0").is_ok()
}

/// Draws `figure` onto `root`, one evenly sized column per panel, and presents
/// the drawing area.
pub fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    config: &FigureConfig,
) -> Result<()> {
    if !font_available(&config.font) {
        let msg = format!("font `{}` is not available", config.font);
        return Err(Error::Drawing(msg));
    }
    root.fill(&WHITE)?;

    let columns = (1, figure.panels.len().max(1));
    let areas = match &config.caption {
        Some(caption) => root
            .titled(caption, text_style(config, config.caption_font_size))?
            .split_evenly(columns),
        None => root.split_evenly(columns),
    };
    for (area, panel) in areas.iter().zip(&figure.panels) {
        draw_panel(area, panel, config)?;
    }

    root.present()?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &Panel,
    config: &FigureConfig,
) -> Result<()> {
    let mut chart = ChartBuilder::on(area)
        .margin(config.margin)
        .x_label_area_size(config.x_label_area)
        .y_label_area_size(config.y_label_area)
        .build_cartesian_2d(panel.x_range(), panel.y_bounds())?;

    chart
        .configure_mesh()
        .x_desc(panel.x_desc.as_str())
        .y_desc(panel.y_desc.as_str())
        .axis_desc_style(text_style(config, config.desc_font_size))
        .label_style(text_style(config, config.label_font_size))
        .light_line_style(&WHITE.mix(0.3))
        .draw()?;

    for (index, line) in panel.lines.iter().enumerate() {
        // 同一配置在两个子图中使用同一颜色
        let color = Palette99::pick(index);
        chart
            .draw_series(LineSeries::new(
                line.points.iter().copied(),
                color.stroke_width(2),
            ))?
            .label(line.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    if !panel.lines.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .label_font(text_style(config, config.legend_font_size))
            .draw()?;
    }

    Ok(())
}

fn text_style(config: &FigureConfig, size: u32) -> TextStyle<'_> {
    TextStyle::from((config.font.as_str(), f64::from(size)).into_font())
}

/// Writes `figure` to `path`. A `.svg` extension selects the SVG backend,
/// anything else is encoded as a bitmap (PNG for `.png`).
pub fn render_to_file(
    figure: &Figure,
    config: &FigureConfig,
    path: impl AsRef<Path>,
) -> Result<()> {
    config.validate()?;
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let size = (config.width, config.height);
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        let root = SVGBackend::new(path, size).into_drawing_area();
        draw_figure(&root, figure, config)?;
    } else {
        let root = BitMapBackend::new(path, size).into_drawing_area();
        draw_figure(&root, figure, config)?;
    }

    info!(path = %path.display(), panels = figure.panels.len(), "saved figure");
    Ok(())
}

/// Renders `figure` as an SVG document in memory.
pub fn render_svg_string(figure: &Figure, config: &FigureConfig) -> Result<String> {
    config.validate()?;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        draw_figure(&root, figure, config)?;
    }
    Ok(svg)
}
