//! Human-readable text report.

use crate::comparison::Comparison;
use crate::constants::{FIRST_SAMPLE_LABEL, SECOND_SAMPLE_LABEL};
use crate::descriptive::DescriptiveSummary;
use crate::testing::TestResult;

fn summary_line(label: &str, summary: &DescriptiveSummary) -> String {
    format!(
        "{}: mean={:.2}, std={:.2}",
        label, summary.mean, summary.std_dev
    )
}

fn normality_line(label: &str, result: &TestResult<f64>) -> String {
    format!(
        "{} normality (Shapiro-Wilk): W={:.4}, p={:.4}",
        label, result.statistic, result.p_value
    )
}

/// Render the report, one line per result, in a fixed order:
/// both summaries, both normality tests, the t-test, then the KS test.
pub fn render_report(comparison: &Comparison) -> String {
    let lines = [
        summary_line(FIRST_SAMPLE_LABEL, &comparison.first_summary),
        summary_line(SECOND_SAMPLE_LABEL, &comparison.second_summary),
        normality_line(FIRST_SAMPLE_LABEL, &comparison.first_normality),
        normality_line(SECOND_SAMPLE_LABEL, &comparison.second_normality),
        format!(
            "T-test for difference of means: t={:.4}, p={:.4}",
            comparison.mean_difference.statistic, comparison.mean_difference.p_value
        ),
        format!(
            "KS test for same distribution: D={:.4}, p={:.4}",
            comparison.distribution_equality.statistic, comparison.distribution_equality.p_value
        ),
    ];

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
