//! # dist-compare
//!
//! Compare two empirical samples of real numbers.
//!
//! Each sample is read from a text file with one value per line. The crate computes the
//! mean and sample standard deviation of both, tests each for normality, tests for a
//! difference in means, tests whether both come from the same distribution, and draws
//! their histograms on a single chart.
//!
//! ## Core Features
//!
//! - **Loading**: strict line-oriented parsing, blank lines skipped
//! - **Descriptive Statistics**: mean and Bessel-corrected standard deviation
//! - **Hypothesis Tests**: Shapiro-Wilk, Welch's t-test, two-sample Kolmogorov-Smirnov
//! - **Plotting**: overlaid histograms rendered to PNG
//!
//! ## Quick Start
//!
//! Load two samples with [`sample::load_sample`], pass them to [`comparison::compare`]
//! and print the result with [`report::render_report`]. Individual tests are available
//! through the [`testing::inference::SampleStatTests`] trait.
//!
//! ## Module Organization
//!
//! - **[`sample`]**: Reading samples from files
//! - **[`descriptive`]**: Mean and standard deviation
//! - **[`testing`]**: Hypothesis tests and their result type
//! - **[`comparison`]**: Running every statistic for a pair of samples
//! - **[`report`]**: Text report
//! - **[`plot`]**: Histogram chart

pub mod comparison;
pub mod constants;
pub mod descriptive;
pub mod plot;
pub mod report;
pub mod sample;
pub mod testing;
