use std::io::Write;

use crate::evaluation::{ReportError, VarianceComparison, write_report};
use crate::streams::{SampleStream, collect_samples};

/// Drains one sample stream and reports how its two variance estimates
/// compare.
pub struct VarianceComparisonTask {
    stream: Box<dyn SampleStream>,
}

impl VarianceComparisonTask {
    pub fn new(stream: Box<dyn SampleStream>) -> Self {
        Self { stream }
    }

    pub fn run<W: Write>(&mut self, writer: &mut W) -> Result<VarianceComparison, ReportError> {
        let values = collect_samples(self.stream.as_mut());
        log::info!(
            "comparing variances of {} samples from {}",
            values.len(),
            self.stream.label()
        );
        write_report(writer, self.stream.label(), &values)
    }
}
