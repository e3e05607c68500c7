use std::fmt::{Display, Formatter, Result};

use crate::core::estimators::average;
use crate::core::variance::{VarianceError, variance_one_pass, variance_two_pass};

/// Relative gap between the two variances above which the one-pass result is
/// considered visibly damaged by cancellation.
pub const CANCELLATION_WARN_RATIO: f32 = 1e-3;

/// Both variance estimates of one sample set, side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct VarianceComparison {
    pub label: String,
    pub count: usize,
    pub one_pass: f32,
    pub two_pass: f32,
    pub difference: f32,
    pub mean: f32,
    pub std_dev: f32,
}

impl VarianceComparison {
    /// `difference` relative to the two-pass variance, or the raw difference
    /// when the two-pass variance is zero.
    pub fn relative_difference(&self) -> f32 {
        if self.two_pass > 0.0 {
            self.difference / self.two_pass
        } else {
            self.difference
        }
    }
}

pub fn compare_variances(
    label: impl Into<String>,
    values: &[f32],
) -> std::result::Result<VarianceComparison, VarianceError> {
    let one_pass = variance_one_pass(values)?;
    let two_pass = variance_two_pass(values)?;

    let comparison = VarianceComparison {
        label: label.into(),
        count: values.len(),
        one_pass,
        two_pass,
        difference: (one_pass - two_pass).abs(),
        mean: average(values),
        std_dev: one_pass.sqrt(),
    };

    let rel = comparison.relative_difference();
    if rel > CANCELLATION_WARN_RATIO {
        log::warn!(
            "{}: one-pass and two-pass variances disagree by {:.3e} (relative), mean={}",
            comparison.label,
            rel,
            comparison.mean
        );
    } else {
        log::debug!("{}: variances agree, relative gap {:.3e}", comparison.label, rel);
    }

    Ok(comparison)
}

impl Display for VarianceComparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "===== {} =====", self.label)?;
        writeln!(f, "Calculating variance of {} numbers...", self.count)?;
        writeln!(f)?;
        writeln!(f, "1 Pass = {:.6}", self.one_pass)?;
        writeln!(f, "2 Pass = {:.6}", self.two_pass)?;
        writeln!(f, "Difference = {:.6}", self.difference)?;
        writeln!(f)?;
        writeln!(f, "mean = {:.6}", self.mean)?;
        writeln!(f, "stdDev = {:.6}", self.std_dev)
    }
}
