use crate::sample::Sample;

/// Location and spread of a single sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveSummary {
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (N-1 denominator)
    pub std_dev: f64,
}

/// Compute the mean and the Bessel-corrected standard deviation of a sample.
///
/// At least two observations are needed for the standard deviation to be defined.
pub fn describe(sample: &Sample) -> anyhow::Result<DescriptiveSummary> {
    if sample.len() < 2 {
        return Err(anyhow::anyhow!(
            "At least 2 values are required for a standard deviation, got {}",
            sample.len()
        ));
    }

    let view = sample.view();
    let mean = view
        .mean()
        .ok_or_else(|| anyhow::anyhow!("Cannot take the mean of an empty sample"))?;
    let std_dev = view.std(1.0);

    Ok(DescriptiveSummary { mean, std_dev })
}
