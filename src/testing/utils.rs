use std::cmp::Ordering;

/// Return an ascending copy of the values.
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Evaluate `coefficients[0] + coefficients[1] * x + ...` with Horner's rule.
pub fn poly(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * x + c)
}

/// Count of values in an ascending slice that are `<= x`.
pub fn count_at_or_below(sorted: &[f64], x: f64) -> usize {
    sorted.partition_point(|&v| v <= x)
}

/// Sample mean and unbiased variance computed in two passes.
pub fn mean_and_variance(values: &[f64]) -> (f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let ss: f64 = values.iter().map(|&v| (v - mean) * (v - mean)).sum();
    (mean, ss / (n - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poly_matches_direct_evaluation() {
        let c = [1.0, -2.0, 0.5];
        assert_eq!(poly(&c, 2.0), 1.0 - 4.0 + 2.0);
        assert_eq!(poly(&[], 3.0), 0.0);
    }

    #[test]
    fn counts_ties_on_the_right() {
        let sorted = [1.0, 2.0, 2.0, 3.0];
        assert_eq!(count_at_or_below(&sorted, 0.5), 0);
        assert_eq!(count_at_or_below(&sorted, 2.0), 3);
        assert_eq!(count_at_or_below(&sorted, 9.0), 4);
    }

    #[test]
    fn variance_uses_n_minus_one() {
        let (mean, var) = mean_and_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(mean, 3.0);
        assert!((var - 2.5).abs() < 1e-12);
    }
}
