use crate::core::estimators::Estimator;

/// Linear interpolation from `a` towards `b` by factor `t`.
///
/// Written as `a + (b - a) * t`, which matches `a * (1 - t) + b * t` and
/// returns `a` exactly whenever `a == b`.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Folds `v` into the running average `avg`, where `n` counts the values
/// folded so far including `v`.
///
/// `n` must be at least 1; the first fold (`n == 1`) yields `v`.
#[inline]
pub fn incremental_average(avg: f32, v: f32, n: usize) -> f32 {
    debug_assert!(n >= 1, "incremental_average needs n >= 1");
    lerp(avg, v, 1.0 / n as f32)
}

/// Streaming mean estimator driven by [`incremental_average`].
///
/// Starts at zero and never stores the values it has seen.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LerpAverage {
    value: f32,
    count: usize,
}

impl LerpAverage {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl Estimator for LerpAverage {
    #[inline]
    fn add(&mut self, v: f32) {
        self.count += 1;
        self.value = incremental_average(self.value, v, self.count);
    }

    #[inline]
    fn estimation(&self) -> f32 {
        self.value
    }
}

impl Extend<f32> for LerpAverage {
    fn extend<I: IntoIterator<Item = f32>>(&mut self, iter: I) {
        for v in iter {
            self.add(v);
        }
    }
}

impl FromIterator<f32> for LerpAverage {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        let mut avg = LerpAverage::new();
        avg.extend(iter);
        avg
    }
}

/// Mean of `values` through a fresh [`LerpAverage`]; `0.0` when empty.
pub fn average(values: &[f32]) -> f32 {
    values.iter().copied().collect::<LerpAverage>().estimation()
}
