use crate::core::estimators::{Estimator, LerpAverage};
use crate::core::variance::VarianceError;

/// Population variance from two traversals: the mean first, then the mean of
/// squared deviations from it.
///
/// Deviations are taken against the finished mean before squaring, so the
/// squared terms stay small even when the data sits far from zero.
pub fn variance_two_pass(values: &[f32]) -> Result<f32, VarianceError> {
    if values.is_empty() {
        return Err(VarianceError::InvalidInput);
    }

    let mean = values.iter().copied().collect::<LerpAverage>().estimation();

    let mut squared_deviation = LerpAverage::new();
    for &v in values {
        let d = v - mean;
        squared_deviation.add(d * d);
    }
    Ok(squared_deviation.estimation())
}
