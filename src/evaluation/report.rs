use std::io::{self, Write};

use thiserror::Error;

use crate::core::variance::VarianceError;
use crate::evaluation::comparison::{VarianceComparison, compare_variances};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Variance(#[from] VarianceError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Compares both variance estimates of `values` and writes the report,
/// followed by a blank line, to `writer`.
pub fn write_report<W: Write>(
    writer: &mut W,
    label: &str,
    values: &[f32],
) -> Result<VarianceComparison, ReportError> {
    let comparison = compare_variances(label, values)?;
    writeln!(writer, "{comparison}")?;
    Ok(comparison)
}

/// [`write_report`] on stdout.
pub fn report(label: &str, values: &[f32]) -> Result<VarianceComparison, ReportError> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_report(&mut lock, label, values)
}
