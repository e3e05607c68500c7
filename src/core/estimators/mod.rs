mod estimator;
mod lerp_average;

pub use estimator::Estimator;
pub use lerp_average::{LerpAverage, average, incremental_average, lerp};
