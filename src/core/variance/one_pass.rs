use crate::core::estimators::{Estimator, LerpAverage};
use crate::core::variance::VarianceError;

/// Population variance from a single traversal, as `|E[x²] - E[x]²|`.
///
/// Both running averages grow with the magnitude of the data, so their
/// difference loses precision when the mean is large compared to the spread.
/// The absolute value keeps rounding from producing a negative variance.
pub fn variance_one_pass(values: &[f32]) -> Result<f32, VarianceError> {
    if values.is_empty() {
        return Err(VarianceError::InvalidInput);
    }

    let mut avg_v = LerpAverage::new();
    let mut avg_v2 = LerpAverage::new();
    for &v in values {
        avg_v.add(v);
        avg_v2.add(v * v);
    }

    let mean = avg_v.estimation();
    Ok((avg_v2.estimation() - mean * mean).abs())
}
