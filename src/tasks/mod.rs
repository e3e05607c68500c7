mod variance_comparison_task;

pub use variance_comparison_task::VarianceComparisonTask;
