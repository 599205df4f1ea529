use crate::constants::KS_EXACT_MAX_N;
use crate::testing::TestResult;
use crate::testing::utils::{count_at_or_below, sorted_copy};

/// Two-sample Kolmogorov-Smirnov test (two-sided).
///
/// The statistic D is the largest absolute difference between the empirical CDFs of the
/// two samples, evaluated at every pooled observation. The p-value is exact while both
/// samples have at most `KS_EXACT_MAX_N` values and asymptotic beyond that.
pub fn ks_2samp(x: &[f64], y: &[f64]) -> anyhow::Result<TestResult<f64>> {
    let n1 = x.len();
    let n2 = y.len();

    if n1 == 0 || n2 == 0 {
        return Err(anyhow::anyhow!(
            "Kolmogorov-Smirnov test requires non-empty samples, got {} and {}",
            n1,
            n2
        ));
    }

    let sorted_x = sorted_copy(x);
    let sorted_y = sorted_copy(y);

    // D * n1 * n2 is an integer; keep it exact for the lattice path count
    let scaled_d = sorted_x
        .iter()
        .chain(sorted_y.iter())
        .map(|&v| {
            let cx = count_at_or_below(&sorted_x, v) as i128 * n2 as i128;
            let cy = count_at_or_below(&sorted_y, v) as i128 * n1 as i128;
            (cx - cy).unsigned_abs()
        })
        .max()
        .unwrap_or(0);

    let statistic = scaled_d as f64 / (n1 as f64 * n2 as f64);

    let p_value = if n1.max(n2) <= KS_EXACT_MAX_N {
        exact_p_value(n1, n2, scaled_d)
    } else {
        asymptotic_p_value(n1, n2, statistic)
    };

    tracing::debug!(n1, n2, d = statistic, p = p_value, "kolmogorov-smirnov");
    Ok(TestResult::new(statistic, p_value.clamp(0.0, 1.0)))
}

/// P(D >= d) under the null, by counting monotone lattice paths from (0, 0) to (n1, n2)
/// that stay strictly inside the band |i / n1 - j / n2| < d.
///
/// `scaled_d` is d * n1 * n2. The recursion tracks the probability of each prefix rather
/// than raw path counts so nothing overflows.
fn exact_p_value(n1: usize, n2: usize, scaled_d: u128) -> f64 {
    if scaled_d == 0 {
        return 1.0;
    }

    let inside = |i: usize, j: usize| -> bool {
        let diff = (i as i128 * n2 as i128 - j as i128 * n1 as i128).unsigned_abs();
        diff < scaled_d
    };

    // row[j] holds P(path passes through (i, j) while staying inside)
    let mut row = vec![0.0f64; n2 + 1];
    row[0] = 1.0;
    for j in 1..=n2 {
        row[j] = if inside(0, j) { row[j - 1] } else { 0.0 };
    }

    for i in 1..=n1 {
        row[0] = if inside(i, 0) { row[0] } else { 0.0 };
        for j in 1..=n2 {
            if !inside(i, j) {
                row[j] = 0.0;
                continue;
            }
            let total = (i + j) as f64;
            row[j] = row[j] * (i as f64 / total) + row[j - 1] * (j as f64 / total);
        }
    }

    1.0 - row[n2]
}

/// Limiting Kolmogorov distribution with Stephens' effective-size correction.
fn asymptotic_p_value(n1: usize, n2: usize, statistic: f64) -> f64 {
    let en = ((n1 as f64 * n2 as f64) / (n1 + n2) as f64).sqrt();
    let lambda = (en + 0.12 + 0.11 / en) * statistic;
    kolmogorov_survival(lambda)
}

/// Q(lambda) = 2 * sum_{k>=1} (-1)^(k-1) exp(-2 k^2 lambda^2)
fn kolmogorov_survival(lambda: f64) -> f64 {
    if lambda < 1e-3 {
        return 1.0;
    }

    let mut sum = 0.0;
    let mut sign = 1.0;
    for k in 1..=100 {
        let k = k as f64;
        let term = sign * (-2.0 * k * k * lambda * lambda).exp();
        sum += term;
        if term.abs() < 1e-16 {
            break;
        }
        sign = -sign;
    }

    (2.0 * sum).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fully_separated_equal_sizes() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [10.0, 20.0, 30.0, 40.0, 50.0];
        let result = ks_2samp(&x, &y).unwrap();
        assert_relative_eq!(result.statistic, 1.0);
        // Only the two corner paths of C(10, 5) = 252 leave the band
        assert_relative_eq!(result.p_value, 2.0 / 252.0, epsilon = 1e-12);
    }

    #[test]
    fn fully_separated_unequal_sizes() {
        let x = [1.0, 2.0];
        let y = [5.0, 6.0, 7.0];
        let result = ks_2samp(&x, &y).unwrap();
        assert_relative_eq!(result.statistic, 1.0);
        // C(5, 2) = 10 paths, two reach a corner
        assert_relative_eq!(result.p_value, 2.0 / 10.0, epsilon = 1e-12);
    }

    #[test]
    fn identical_samples() {
        let x = [3.0, 1.0, 2.0];
        let result = ks_2samp(&x, &x).unwrap();
        assert_relative_eq!(result.statistic, 0.0);
        assert_relative_eq!(result.p_value, 1.0);
    }

    #[test]
    fn ties_use_right_continuous_cdf() {
        let x = [1.0, 2.0, 2.0, 3.0];
        let y = [2.0, 2.0, 2.0, 2.0];
        // At 1: F1 = 0.25, F2 = 0; at 2: F1 = 0.75, F2 = 1 -> D = 0.25
        let result = ks_2samp(&x, &y).unwrap();
        assert_relative_eq!(result.statistic, 0.25);
    }

    #[test]
    fn asymptotic_tail_behaves() {
        assert_relative_eq!(kolmogorov_survival(0.0), 1.0);
        assert!(kolmogorov_survival(3.0) < 1e-6);
        // Q(1.36) is the classic 5% critical point
        assert_relative_eq!(kolmogorov_survival(1.36), 0.05, epsilon = 2e-3);
    }

    #[test]
    fn rejects_empty_sample() {
        assert!(ks_2samp(&[], &[1.0]).is_err());
    }
}
