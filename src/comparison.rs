//! Run every statistic for a pair of samples.
//!
//! All results are computed up front so that a degenerate sample is rejected before any
//! part of the report is written.

use crate::constants::{FIRST_SAMPLE_LABEL, MIN_SAMPLE_SIZE, SECOND_SAMPLE_LABEL};
use crate::descriptive::{DescriptiveSummary, describe};
use crate::sample::Sample;
use crate::testing::inference::SampleStatTests;
use crate::testing::{TTestType, TestResult};
use anyhow::Context;

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub first_summary: DescriptiveSummary,
    pub second_summary: DescriptiveSummary,
    pub first_normality: TestResult<f64>,
    pub second_normality: TestResult<f64>,
    /// Welch's t-test, first sample minus second
    pub mean_difference: TestResult<f64>,
    pub distribution_equality: TestResult<f64>,
}

/// Check that a sample can go through every test of the comparison.
pub fn validate_sample(sample: &Sample, label: &str) -> anyhow::Result<()> {
    if sample.len() < MIN_SAMPLE_SIZE {
        return Err(anyhow::anyhow!(
            "{} has {} value(s); at least {} are required",
            label,
            sample.len(),
            MIN_SAMPLE_SIZE
        ));
    }

    if let Some((lo, hi)) = sample.min_max() {
        if lo == hi {
            return Err(anyhow::anyhow!(
                "{} has zero variance (every value equals {})",
                label,
                lo
            ));
        }
    }

    Ok(())
}

/// Compute the descriptive summaries and all three hypothesis tests.
pub fn compare(first: &Sample, second: &Sample) -> anyhow::Result<Comparison> {
    validate_sample(first, FIRST_SAMPLE_LABEL)?;
    validate_sample(second, SECOND_SAMPLE_LABEL)?;

    Ok(Comparison {
        first_summary: describe(first).context(FIRST_SAMPLE_LABEL)?,
        second_summary: describe(second).context(SECOND_SAMPLE_LABEL)?,
        first_normality: first.shapiro_wilk().context(FIRST_SAMPLE_LABEL)?,
        second_normality: second.shapiro_wilk().context(SECOND_SAMPLE_LABEL)?,
        mean_difference: first.t_test(second, TTestType::Welch)?,
        distribution_equality: first.ks_test(second)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(values: &[f64]) -> Sample {
        Sample::from(values.to_vec())
    }

    #[test]
    fn rejects_short_sample_with_label() {
        let err = compare(&sample(&[1.0, 2.0]), &sample(&[1.0, 2.0, 3.0])).unwrap_err();
        assert!(err.to_string().contains(FIRST_SAMPLE_LABEL));
    }

    #[test]
    fn rejects_constant_sample_with_label() {
        let err = compare(&sample(&[1.0, 2.0, 3.0]), &sample(&[7.0, 7.0, 7.0])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(SECOND_SAMPLE_LABEL), "got: {message}");
        assert!(message.contains("zero variance"), "got: {message}");
    }

    #[test]
    fn fills_every_result() {
        let comparison = compare(
            &sample(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            &sample(&[10.0, 20.0, 30.0, 40.0, 50.0]),
        )
        .unwrap();
        assert_eq!(comparison.first_summary.mean, 3.0);
        assert_eq!(comparison.second_summary.mean, 30.0);
        assert!(comparison.mean_difference.statistic < 0.0);
        assert!(comparison.mean_difference.degrees_of_freedom.is_some());
        assert_eq!(comparison.distribution_equality.statistic, 1.0);
    }
}
