//! Overlaid histogram of the two samples.
//!
//! Charts are drawn with the [`plotters`] bitmap backend and saved as PNG files at a fixed
//! 10x6 inch, 300 DPI size. Each sample is binned over its own range and drawn as
//! semi-transparent bars so the overlap stays visible.

use crate::constants::{
    FIGURE_PIXELS, HISTOGRAM_ALPHA, HISTOGRAM_BINS, PLOT_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL,
};
use crate::sample::Sample;
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Matplotlib's default "orange"
const ORANGE: RGBColor = RGBColor(255, 165, 0);

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to {path}: {message}")]
    FileSave { path: String, message: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Space above the tallest bar, as a fraction of its height, kept free for the legend
const LEGEND_HEADROOM: f64 = 0.35;

/// Upper bound of the frequency axis for a chart whose tallest bar holds `max_count` values
fn frequency_axis_max(max_count: usize) -> f64 {
    (max_count as f64 * (1.0 + LEGEND_HEADROOM)).max(1.0)
}

/// Corners of the colour swatch drawn next to a legend entry anchored at `(x, y)`
fn legend_swatch(x: i32, y: i32) -> [(i32, i32); 2] {
    [(x, y - 15), (x + 30, y + 15)]
}

/// One bar of a histogram: the half-open interval [start, end) and its count.
/// The last bin of a histogram is closed on the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Bin values into `bins` equal-width intervals spanning their own [min, max].
///
/// A sample where every value is equal is binned over [v - 0.5, v + 0.5]. An empty
/// input yields no bins.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let Some(&first) = values.first() else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }

    let (mut lo, mut hi) = values
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count,
        })
        .collect()
}

/// Draws the histograms of both samples on one chart and saves it as a PNG file.
///
/// # Arguments
/// * `series` - `(label, sample)` pairs; the first is drawn in blue, the second in orange
/// * `output_path` - Path where the PNG file should be saved, overwritten if present
///
/// # Chart Properties
/// * Resolution: 3000x1800 pixels
/// * Bars: 15 bins per sample, 60% opacity
/// * Axes: "Value" and "Frequency", with light grid lines
/// * Legend: upper right, one entry per sample
pub fn create_comparison_histogram(
    first: (&str, &Sample),
    second: (&str, &Sample),
    output_path: &Path,
) -> Result<()> {
    let series = [(first.0, first.1, BLUE), (second.0, second.1, ORANGE)];

    let binned: Vec<(&str, Vec<HistogramBin>, RGBColor)> = series
        .iter()
        .map(|(label, sample, color)| (*label, histogram(sample.as_slice(), HISTOGRAM_BINS), *color))
        .collect();

    if binned.iter().any(|(_, bins, _)| bins.is_empty()) {
        return Err(PlotError::InvalidData("Samples cannot be empty".to_string()));
    }

    let x_min = binned
        .iter()
        .flat_map(|(_, bins, _)| bins.iter().map(|b| b.start))
        .fold(f64::INFINITY, f64::min);
    let x_max = binned
        .iter()
        .flat_map(|(_, bins, _)| bins.iter().map(|b| b.end))
        .fold(f64::NEG_INFINITY, f64::max);
    let max_count = binned
        .iter()
        .flat_map(|(_, bins, _)| bins.iter().map(|b| b.count))
        .max()
        .unwrap_or(0);

    let x_pad = (x_max - x_min) * 0.05;
    let y_max = frequency_axis_max(max_count);

    let root = BitMapBackend::new(output_path, FIGURE_PIXELS);
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(PLOT_TITLE, ("sans-serif", 90))
        .margin(50)
        .x_label_area_size(150)
        .y_label_area_size(180)
        .build_cartesian_2d((x_min - x_pad)..(x_max + x_pad), 0.0..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart_context
        .configure_mesh()
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .axis_desc_style(("sans-serif", 70))
        .label_style(("sans-serif", 55))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(WHITE.mix(0.0))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    for (label, bins, color) in &binned {
        let style = color.mix(HISTOGRAM_ALPHA).filled();
        chart_context
            .draw_series(bins.iter().map(|bin| {
                Rectangle::new([(bin.start, 0.0), (bin.end, bin.count as f64)], style)
            }))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(*label)
            .legend(move |(x, y)| Rectangle::new(legend_swatch(x, y), style));
    }

    chart_context
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", 55))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Ensure everything is properly rendered and saved
    drawing_area.present().map_err(|e| PlotError::FileSave {
        path: output_path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::info!(path = %output_path.display(), "histogram saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_cover_range_and_count_every_value() {
        let values: Vec<f64> = (1..=30).map(f64::from).collect();
        let bins = histogram(&values, HISTOGRAM_BINS);

        assert_eq!(bins.len(), HISTOGRAM_BINS);
        assert_eq!(bins[0].start, 1.0);
        assert_eq!(bins[HISTOGRAM_BINS - 1].end, 30.0);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), 30);
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let bins = histogram(&[0.0, 1.0, 2.0, 3.0], 3);
        let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 1, 2]);
    }

    #[test]
    fn constant_values_get_unit_range() {
        let bins = histogram(&[4.0, 4.0], 2);
        assert_eq!(bins[0].start, 3.5);
        assert_eq!(bins[1].end, 4.5);
        assert_eq!(bins[0].count + bins[1].count, 2);
    }

    #[test]
    fn empty_input_has_no_bins() {
        assert!(histogram(&[], HISTOGRAM_BINS).is_empty());
    }

    #[test]
    fn rejects_empty_sample() {
        let dir = tempfile::tempdir().unwrap();
        let empty = Sample::new(Vec::new());
        let full = Sample::new(vec![1.0, 2.0, 3.0]);
        let result = create_comparison_histogram(
            ("a", &empty),
            ("b", &full),
            &dir.path().join("out.png"),
        );
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
    }

    /// Width and height stored in the IHDR chunk of a PNG file
    fn png_dimensions(path: &Path) -> (u32, u32) {
        let bytes = std::fs::read(path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n", "not a PNG file");
        let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
        let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
        (width, height)
    }

    #[test]
    fn renders_png_at_figure_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(crate::constants::OUTPUT_FILE_NAME);
        let first = Sample::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let second = Sample::new(vec![10.0, 20.0, 30.0, 40.0, 50.0]);

        create_comparison_histogram(("Distribution 1", &first), ("Distribution 2", &second), &path)
            .unwrap();

        assert_eq!(png_dimensions(&path), (3000, 1800));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        std::fs::write(&path, b"stale contents").unwrap();

        let first = Sample::new(vec![0.5, 1.5, 1.7, 2.9]);
        let second = Sample::new(vec![1.0, 3.0, 4.5]);
        create_comparison_histogram(("a", &first), ("b", &second), &path).unwrap();
        assert_eq!(png_dimensions(&path), FIGURE_PIXELS);

        create_comparison_histogram(("a", &first), ("b", &second), &path).unwrap();
        assert_eq!(png_dimensions(&path), FIGURE_PIXELS);
    }

    #[test]
    fn frequency_axis_leaves_room_for_legend() {
        assert_eq!(frequency_axis_max(0), 1.0);
        assert!(frequency_axis_max(20) >= 20.0 * 1.3);
    }

    #[test]
    fn legend_swatch_is_compact() {
        let [(x0, y0), (x1, y1)] = legend_swatch(100, 200);
        assert_eq!((x0, x1), (100, 130));
        assert_eq!((y0, y1), (185, 215));
    }
}
