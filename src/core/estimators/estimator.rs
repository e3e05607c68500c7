/// Running statistic that folds one `f32` at a time.
///
/// Nothing is buffered: [`add`] updates the internal state in place and
/// [`estimation`] reads the statistic over everything folded so far.
///
/// [`add`]: Estimator::add
/// [`estimation`]: Estimator::estimation
pub trait Estimator {
    /// Folds `v` into the statistic.
    fn add(&mut self, v: f32);

    /// Statistic over all values folded so far.
    fn estimation(&self) -> f32;
}
