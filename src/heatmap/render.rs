//! Draws a `HeatmapMatrix` into an in-memory PNG.
//!
//! Layout: title across the top, the single row of cells on the left with the
//! repository names rotated underneath, and a vertical colorbar on the right.
//! Nothing touches the filesystem.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{AppError, Result};
use crate::heatmap::colormap::{coolwarm, normalize};
use crate::heatmap::HeatmapMatrix;

/// 8×6 units at 100 pixels per unit.
pub const CANVAS_SIZE: (u32, u32) = (800, 600);

pub const TITLE: &str = "Commit History Heatmap";
pub const ROW_LABEL: &str = "Commits";
pub const COLORBAR_TITLE: &str = "Number of Commits";

const COLORBAR_WIDTH: i32 = 140;
const COLORBAR_TITLE_WIDTH: i32 = 30;
const COLORBAR_STEPS: u32 = 128;
const X_LABEL_AREA: i32 = 160;
const MARGIN: i32 = 10;

type DrawResult<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Render `matrix` and return the PNG file bytes.
pub fn render_png(matrix: &HeatmapMatrix) -> Result<Vec<u8>> {
    let (width, height) = CANVAS_SIZE;
    let mut pixels = vec![0u8; (width * height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, CANVAS_SIZE).into_drawing_area();
        draw(matrix, &root).map_err(|e| AppError::Render(e.to_string()))?;
        root.present().map_err(|e| AppError::Render(e.to_string()))?;
    }
    encode_png(&pixels, width, height)
}

fn draw(matrix: &HeatmapMatrix, root: &DrawingArea<BitMapBackend<'_>, Shift>) -> DrawResult<()> {
    root.fill(&WHITE)?;
    let body = root.titled(TITLE, ("sans-serif", 24))?;

    let (width, _) = body.dim_in_pixel();
    let (cells, colorbar) = body.split_horizontally(width as i32 - COLORBAR_WIDTH);

    draw_cells(matrix, &cells)?;
    draw_colorbar(matrix, &colorbar)?;
    Ok(())
}

fn draw_cells(matrix: &HeatmapMatrix, area: &DrawingArea<BitMapBackend<'_>, Shift>) -> DrawResult<()> {
    // Cells are centred on integer x positions. An empty matrix still gets a
    // one-cell wide axis so the frame renders.
    let span = matrix.columns().max(1);
    let labels = matrix.labels();

    let mut chart = ChartBuilder::on(area)
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(80)
        .build_cartesian_2d(-0.5f64..span as f64 - 0.5, -0.5f64..0.5f64)?;

    let x_label_formatter = |x: &f64| match cell_index(*x) {
        Some(idx) => labels.get(idx).cloned().unwrap_or_default(),
        None => String::new(),
    };
    let y_label_formatter = |y: &f64| {
        if cell_index(*y) == Some(0) {
            ROW_LABEL.to_string()
        } else {
            String::new()
        }
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(span)
        .y_labels(1)
        .x_label_formatter(&x_label_formatter)
        .y_label_formatter(&y_label_formatter)
        .label_style(("sans-serif", 14))
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .color(&BLACK)
                .transform(FontTransform::Rotate90)
                .pos(Pos::new(HPos::Right, VPos::Center)),
        )
        .draw()?;

    let (min, max) = matrix.value_range();

    chart.draw_series(matrix.counts().iter().enumerate().map(|(i, &count)| {
        let x = i as f64;
        Rectangle::new(
            [(x - 0.5, -0.5), (x + 0.5, 0.5)],
            coolwarm(normalize(count, min, max)).filled(),
        )
    }))?;

    let annotation = ("sans-serif", 16)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));

    chart.draw_series(
        matrix
            .annotations()
            .into_iter()
            .enumerate()
            .map(|(i, text)| Text::new(text, (i as f64, 0.0), annotation.clone())),
    )?;

    Ok(())
}

/// Column index for an axis tick sitting on a cell centre.
fn cell_index(value: f64) -> Option<usize> {
    let rounded = value.round();
    if rounded < 0.0 || (value - rounded).abs() > 1e-6 {
        return None;
    }
    Some(rounded as usize)
}

fn draw_colorbar(matrix: &HeatmapMatrix, area: &DrawingArea<BitMapBackend<'_>, Shift>) -> DrawResult<()> {
    let (low, high) = colorbar_range(matrix);

    let (width, height) = area.dim_in_pixel();
    let (bar, title) = area.split_horizontally(width as i32 - COLORBAR_TITLE_WIDTH);

    let mut chart = ChartBuilder::on(&bar)
        .margin_top(MARGIN)
        .margin_bottom(MARGIN + X_LABEL_AREA)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..1f64, low..high)?;

    let tick_formatter = |y: &f64| {
        if y.fract().abs() < 1e-9 {
            format!("{:.0}", y)
        } else {
            String::new()
        }
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .disable_x_axis()
        .y_labels(6)
        .y_label_formatter(&tick_formatter)
        .label_style(("sans-serif", 13))
        .draw()?;

    let step = (high - low) / COLORBAR_STEPS as f64;
    chart.draw_series((0..COLORBAR_STEPS).map(|s| {
        let from = low + step * s as f64;
        let t = (s as f64 + 0.5) / COLORBAR_STEPS as f64;
        Rectangle::new([(0.0, from), (1.0, from + step)], coolwarm(t).filled())
    }))?;

    // Title reads top to bottom along the right edge, level with the bar.
    let title_style = ("sans-serif", 14)
        .into_font()
        .color(&BLACK)
        .transform(FontTransform::Rotate90)
        .pos(Pos::new(HPos::Center, VPos::Center));
    title.draw(&Text::new(
        COLORBAR_TITLE,
        (COLORBAR_TITLE_WIDTH / 2, (height as i32 - X_LABEL_AREA) / 2),
        title_style,
    ))?;

    Ok(())
}

/// Value span of the colorbar. A flat matrix is centred so its cells and the
/// bar agree on the neutral midpoint colour.
fn colorbar_range(matrix: &HeatmapMatrix) -> (f64, f64) {
    let (min, max) = matrix.value_range();
    if max > min {
        (min as f64, max as f64)
    } else {
        (min as f64 - 0.5, min as f64 + 0.5)
    }
}

fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    PngEncoder::new_with_quality(&mut png, CompressionType::Best, FilterType::Adaptive)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| AppError::Render(e.to_string()))?;
    Ok(png)
}
