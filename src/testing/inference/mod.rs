use crate::sample::Sample;
use crate::testing::{TTestType, TestResult};

pub mod normality;

pub mod parametric;

pub mod nonparametric;

pub trait SampleStatTests {
    fn shapiro_wilk(&self) -> anyhow::Result<TestResult<f64>>;

    fn t_test(&self, other: &Self, test_type: TTestType) -> anyhow::Result<TestResult<f64>>;

    fn ks_test(&self, other: &Self) -> anyhow::Result<TestResult<f64>>;
}

impl SampleStatTests for Sample {
    fn shapiro_wilk(&self) -> anyhow::Result<TestResult<f64>> {
        normality::shapiro_wilk(self.as_slice())
    }

    fn t_test(&self, other: &Self, test_type: TTestType) -> anyhow::Result<TestResult<f64>> {
        parametric::t_test(self.as_slice(), other.as_slice(), test_type)
    }

    fn ks_test(&self, other: &Self) -> anyhow::Result<TestResult<f64>> {
        nonparametric::ks_2samp(self.as_slice(), other.as_slice())
    }
}
