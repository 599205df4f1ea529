//! Fixed parameters shared by the report and the plot.

/// Number of histogram bins drawn per sample
pub const HISTOGRAM_BINS: usize = 15;

/// Opacity of each histogram so the overlap stays visible
pub const HISTOGRAM_ALPHA: f64 = 0.6;

/// File name of the rendered figure, written to the working directory
pub const OUTPUT_FILE_NAME: &str = "distribution_comparison.png";

/// Figure size in inches (width, height)
pub const FIGURE_SIZE_INCHES: (u32, u32) = (10, 6);

/// Rendering resolution in dots per inch
pub const FIGURE_DPI: u32 = 300;

/// Figure size in pixels (3000x1800)
pub const FIGURE_PIXELS: (u32, u32) = (
    FIGURE_SIZE_INCHES.0 * FIGURE_DPI,
    FIGURE_SIZE_INCHES.1 * FIGURE_DPI,
);

pub const FIRST_SAMPLE_LABEL: &str = "Distribution 1";
pub const SECOND_SAMPLE_LABEL: &str = "Distribution 2";

pub const PLOT_TITLE: &str = "Comparison of Two Distributions";
pub const X_AXIS_LABEL: &str = "Value";
pub const Y_AXIS_LABEL: &str = "Frequency";

/// Smallest sample accepted by the comparison (Shapiro-Wilk needs three points)
pub const MIN_SAMPLE_SIZE: usize = 3;

/// Largest sample for which the Shapiro-Wilk p-value approximation is calibrated
pub const SHAPIRO_WILK_MAX_N: usize = 5000;

/// Above this size the two-sample KS test falls back to the asymptotic distribution
pub const KS_EXACT_MAX_N: usize = 10_000;
