//! Parametric tests for a difference in means.
//!
//! Both Student's pooled-variance t-test and Welch's unequal-variance t-test are provided.
//! The comparison pipeline uses Welch's variant; the pooled form is kept for callers who
//! know their samples share a variance.

use crate::testing::utils::mean_and_variance;
use crate::testing::{TTestType, TestResult};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Perform a two-sided t-test comparing two samples.
///
/// # Arguments
///
/// * `x` - First sample
/// * `y` - Second sample
/// * `test_type` - Type of t-test to perform (Student's or Welch's)
///
/// # Returns
///
/// `TestResult` containing the t-statistic, the two-tailed p-value and the degrees of
/// freedom. The statistic is positive when the mean of `x` exceeds the mean of `y`.
pub fn t_test(x: &[f64], y: &[f64], test_type: TTestType) -> anyhow::Result<TestResult<f64>> {
    let nx = x.len();
    let ny = y.len();

    if nx < 2 || ny < 2 {
        return Err(anyhow::anyhow!(
            "t-test requires at least 2 values per sample, got {} and {}",
            nx,
            ny
        ));
    }

    let (mean_x, var_x) = mean_and_variance(x);
    let (mean_y, var_y) = mean_and_variance(y);

    t_test_from_moments(
        mean_x,
        var_x,
        nx as f64,
        mean_y,
        var_y,
        ny as f64,
        test_type,
    )
}

/// Perform a t-test using precomputed summary statistics.
///
/// # Arguments
///
/// * `mean1`, `var1`, `n1` - Mean, unbiased variance, and count for group 1
/// * `mean2`, `var2`, `n2` - Mean, unbiased variance, and count for group 2
/// * `test_type` - Type of t-test to perform (Student's or Welch's)
pub fn t_test_from_moments(
    mean1: f64,
    var1: f64,
    n1: f64,
    mean2: f64,
    var2: f64,
    n2: f64,
    test_type: TTestType,
) -> anyhow::Result<TestResult<f64>> {
    if n1 < 2.0 || n2 < 2.0 {
        return Err(anyhow::anyhow!("t-test requires at least 2 values per sample"));
    }

    let mean_diff = mean1 - mean2;

    let (std_err, df) = match test_type {
        TTestType::Student => {
            let pooled_var = ((n1 - 1.0) * var1 + (n2 - 1.0) * var2) / (n1 + n2 - 2.0);
            ((pooled_var * (1.0 / n1 + 1.0 / n2)).sqrt(), n1 + n2 - 2.0)
        }
        TTestType::Welch => {
            let term1 = var1 / n1;
            let term2 = var2 / n2;
            let combined_var = term1 + term2;

            // Welch-Satterthwaite equation for degrees of freedom
            let df = combined_var * combined_var
                / (term1 * term1 / (n1 - 1.0) + term2 * term2 / (n2 - 1.0));
            (combined_var.sqrt(), df)
        }
    };

    if std_err <= 0.0 || !std_err.is_finite() {
        return Err(anyhow::anyhow!(
            "t-test is undefined when both samples have zero variance"
        ));
    }

    let t_stat = mean_diff / std_err;
    let p_value = two_tailed_p_value(t_stat, df)?;

    tracing::debug!(t = t_stat, df, p = p_value, ?test_type, "t-test");
    Ok(TestResult::new(t_stat, p_value).with_degrees_of_freedom(df))
}

fn two_tailed_p_value(t_stat: f64, df: f64) -> anyhow::Result<f64> {
    let t_dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| anyhow::anyhow!("Invalid t distribution with df={}: {}", df, e))?;

    // Survival function keeps precision for large |t|
    Ok((2.0 * t_dist.sf(t_stat.abs())).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn welch_matches_hand_computation() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [10.0, 20.0, 30.0, 40.0, 50.0];
        let result = t_test(&x, &y, TTestType::Welch).unwrap();

        // se = sqrt(2.5/5 + 250/5)
        assert_relative_eq!(result.statistic, -27.0 / 50.5f64.sqrt(), epsilon = 1e-12);
        // df = 50.5^2 / (0.5^2/4 + 50^2/4)
        let df = 50.5 * 50.5 / (0.25 / 4.0 + 2500.0 / 4.0);
        assert_relative_eq!(result.degrees_of_freedom.unwrap(), df, epsilon = 1e-12);
        assert!(result.p_value > 0.01 && result.p_value < 0.05, "p = {}", result.p_value);
    }

    #[test]
    fn student_uses_pooled_degrees_of_freedom() {
        let x = [1.0, 2.0, 3.0];
        let y = [7.0, 8.0, 9.0];
        let result = t_test(&x, &y, TTestType::Student).unwrap();
        assert_eq!(result.degrees_of_freedom, Some(4.0));
        assert_relative_eq!(result.statistic, -6.0 / (2.0f64 / 3.0).sqrt(), epsilon = 1e-12);
        assert!(result.p_value < 0.01);
    }

    #[test]
    fn identical_means_give_p_of_one() {
        let x = [1.0, 2.0, 3.0];
        let y = [3.0, 2.0, 1.0];
        let result = t_test(&x, &y, TTestType::Welch).unwrap();
        assert_relative_eq!(result.statistic, 0.0);
        assert_relative_eq!(result.p_value, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_constant_samples() {
        assert!(t_test(&[5.0, 5.0, 5.0], &[5.0, 5.0], TTestType::Welch).is_err());
    }

    #[test]
    fn rejects_short_samples() {
        assert!(t_test(&[1.0], &[1.0, 2.0], TTestType::Welch).is_err());
    }
}
