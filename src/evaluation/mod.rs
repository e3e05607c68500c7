mod comparison;
mod report;

pub use comparison::{CANCELLATION_WARN_RATIO, VarianceComparison, compare_variances};
pub use report::{ReportError, report, write_report};
