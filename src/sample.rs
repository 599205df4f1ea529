//! Loading samples from plain text files.
//!
//! Input files hold one numeric value per line. Surrounding whitespace is ignored, blank
//! lines are skipped and anything else that does not parse as a finite number aborts the
//! load. A load either yields every value in file order or fails.

use anyhow::{Context, anyhow};
use ndarray::ArrayView1;
use std::fs;
use std::path::Path;

/// An ordered sequence of finite observations read from one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    pub fn new(values: Vec<f64>) -> Self {
        Sample { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in the order they appeared in the source file
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Array view used for reductions
    pub fn view(&self) -> ArrayView1<'_, f64> {
        ArrayView1::from(self.values.as_slice())
    }

    /// Smallest and largest value, or `None` for an empty sample
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let first = *self.values.first()?;
        Some(
            self.values
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }
}

impl From<Vec<f64>> for Sample {
    fn from(values: Vec<f64>) -> Self {
        Sample::new(values)
    }
}

/// Parse the textual contents of a sample file.
///
/// Lines are trimmed and empty lines skipped. The first line that is not a finite number
/// fails the whole parse; the error carries its 1-based line number.
pub fn parse_sample(content: &str) -> anyhow::Result<Sample> {
    let mut values = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }

        let value: f64 = token
            .parse()
            .map_err(|_| anyhow!("could not convert '{}' on line {} to a number", token, idx + 1))?;

        if !value.is_finite() {
            return Err(anyhow!(
                "non-finite value '{}' on line {}",
                token,
                idx + 1
            ));
        }

        values.push(value);
    }

    Ok(Sample::new(values))
}

/// Read and parse a sample file.
///
/// Errors name the offending path, whether the file could not be read or one of its
/// lines is malformed.
pub fn load_sample(path: &Path) -> anyhow::Result<Sample> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading {}", path.display()))?;

    let sample =
        parse_sample(&content).with_context(|| format!("Error reading {}", path.display()))?;

    tracing::debug!(path = %path.display(), values = sample.len(), "loaded sample");
    Ok(sample)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_values_in_order_and_skips_blank_lines() {
        let sample = parse_sample("1\n\n  2.5  \n-3\n\t\n+4e1\n").unwrap();
        assert_eq!(sample.as_slice(), &[1.0, 2.5, -3.0, 40.0]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let sample = parse_sample("1.5\r\n2.5\r\n").unwrap();
        assert_eq!(sample.as_slice(), &[1.5, 2.5]);
    }

    #[test]
    fn rejects_malformed_line_with_line_number() {
        let err = parse_sample("1\n2\nabc\n4").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'abc'"), "got: {message}");
        assert!(message.contains("line 3"), "got: {message}");
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(parse_sample("1\nnan\n").is_err());
        assert!(parse_sample("inf\n").is_err());
    }

    #[test]
    fn empty_content_yields_empty_sample() {
        let sample = parse_sample("\n   \n").unwrap();
        assert!(sample.is_empty());
        assert_eq!(sample.min_max(), None);
    }

    #[test]
    fn min_max_spans_all_values() {
        let sample = Sample::from(vec![3.0, -1.0, 7.5, 2.0]);
        assert_eq!(sample.min_max(), Some((-1.0, 7.5)));
    }
}
