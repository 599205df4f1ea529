//! Shapiro-Wilk test for normality.
//!
//! Coefficients and the p-value use Royston's approximation (Applied Statistics algorithm
//! AS R94, 1995), calibrated for 3 <= n <= 5000.

use crate::constants::SHAPIRO_WILK_MAX_N;
use crate::testing::TestResult;
use crate::testing::utils::{poly, sorted_copy};
use statrs::distribution::{ContinuousCDF, Normal};

const SMALL: f64 = 1e-19;

/// Reported p-value when log(1 - W) falls outside the small-sample transform's domain
const MIN_P_VALUE: f64 = 1e-99;

const C1: [f64; 6] = [0.0, 0.221157, -0.147981, -2.071190, 4.434685, -2.706056];
const C2: [f64; 6] = [0.0, 0.042981, -0.293762, -1.752461, 5.682633, -3.582633];
const C3: [f64; 4] = [0.5440, -0.39978, 0.025054, -6.714e-4];
const C4: [f64; 4] = [1.3822, -0.77857, 0.062767, -0.0020322];
const C5: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const C6: [f64; 3] = [-0.4803, -0.082676, 0.0030302];
const G: [f64; 2] = [-2.273, 0.459];

/// Perform the Shapiro-Wilk test on a sample.
///
/// Returns the W statistic and its p-value. Small p-values indicate departure from
/// normality. The input order is irrelevant.
///
/// # Errors
///
/// Fails for fewer than three values and for samples whose range is below 1e-19.
pub fn shapiro_wilk(x: &[f64]) -> anyhow::Result<TestResult<f64>> {
    let n = x.len();
    if n < 3 {
        return Err(anyhow::anyhow!(
            "Shapiro-Wilk requires at least 3 values, got {}",
            n
        ));
    }
    if n > SHAPIRO_WILK_MAX_N {
        tracing::warn!(
            n,
            "Shapiro-Wilk p-value may be inaccurate for more than {} values",
            SHAPIRO_WILK_MAX_N
        );
    }

    let sorted = sorted_copy(x);
    let range = sorted[n - 1] - sorted[0];
    if range < SMALL {
        return Err(anyhow::anyhow!(
            "Shapiro-Wilk requires a value range of at least {:e}, got {:e}",
            SMALL,
            range
        ));
    }

    let normal = standard_normal()?;
    let half = coefficients(n, &normal);

    // Full antisymmetric coefficient vector, zero in the middle for odd n
    let mut a = vec![0.0; n];
    for (i, &coef) in half.iter().enumerate() {
        a[i] = -coef;
        a[n - 1 - i] = coef;
    }

    let w = w_statistic(&sorted, &a, range);
    let p_value = p_value(w, n, &normal);

    tracing::debug!(n, w, p = p_value, "shapiro-wilk");
    Ok(TestResult::new(w, p_value))
}

fn standard_normal() -> anyhow::Result<Normal> {
    Normal::new(0.0, 1.0).map_err(|e| anyhow::anyhow!("Invalid normal distribution: {}", e))
}

/// Upper-half coefficients a_1..a_{n/2}, all positive, with sum(2 * a_i^2) == 1.
fn coefficients(n: usize, normal: &Normal) -> Vec<f64> {
    let nn2 = n / 2;
    if n == 3 {
        return vec![std::f64::consts::FRAC_1_SQRT_2];
    }

    let an = n as f64;
    let an25 = an + 0.25;

    let m: Vec<f64> = (1..=nn2)
        .map(|i| normal.inverse_cdf((i as f64 - 0.375) / an25))
        .collect();
    let summ2 = 2.0 * m.iter().map(|v| v * v).sum::<f64>();
    let ssumm2 = summ2.sqrt();
    let rsn = 1.0 / an.sqrt();

    let mut a = vec![0.0; nn2];
    let a1 = poly(&C1, rsn) - m[0] / ssumm2;
    a[0] = a1;

    let (first_scaled, fac) = if n > 5 {
        let a2 = -m[1] / ssumm2 + poly(&C2, rsn);
        a[1] = a2;
        let fac = ((summ2 - 2.0 * m[0] * m[0] - 2.0 * m[1] * m[1])
            / (1.0 - 2.0 * a1 * a1 - 2.0 * a2 * a2))
            .sqrt();
        (2, fac)
    } else {
        let fac = ((summ2 - 2.0 * m[0] * m[0]) / (1.0 - 2.0 * a1 * a1)).sqrt();
        (1, fac)
    };

    for i in first_scaled..nn2 {
        a[i] = -m[i] / fac;
    }

    a
}

/// W computed as 1 - (1 - W) to keep precision when W is close to one.
fn w_statistic(sorted: &[f64], a: &[f64], range: f64) -> f64 {
    let n = sorted.len() as f64;
    let scaled: Vec<f64> = sorted.iter().map(|v| v / range).collect();

    let mean_x = scaled.iter().sum::<f64>() / n;
    let mean_a = a.iter().sum::<f64>() / n;

    let mut ssa = 0.0;
    let mut ssx = 0.0;
    let mut sax = 0.0;
    for (&ai, &xi) in a.iter().zip(scaled.iter()) {
        let da = ai - mean_a;
        let dx = xi - mean_x;
        ssa += da * da;
        ssx += dx * dx;
        sax += da * dx;
    }

    let ssassx = (ssa * ssx).sqrt();
    let w1 = (ssassx - sax) * (ssassx + sax) / (ssa * ssx);
    (1.0 - w1).clamp(0.0, 1.0)
}

fn p_value(w: f64, n: usize, normal: &Normal) -> f64 {
    if n == 3 {
        // Exact distribution for three observations
        const PI6: f64 = 6.0 / std::f64::consts::PI;
        const STQR: f64 = std::f64::consts::FRAC_PI_3;
        return (PI6 * (w.sqrt().asin() - STQR)).clamp(0.0, 1.0);
    }

    let an = n as f64;
    let mut w1 = (1.0 - w).ln();

    let (m, s) = if n <= 11 {
        let gamma = poly(&G, an);
        if w1 >= gamma {
            return MIN_P_VALUE;
        }
        w1 = -(gamma - w1).ln();
        (poly(&C3, an), poly(&C4, an).exp())
    } else {
        let xx = an.ln();
        (poly(&C5, xx), poly(&C6, xx).exp())
    };

    normal.sf((w1 - m) / s)
}
