use std::io::{Error, ErrorKind};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::streams::generators::resolve_seed;
use crate::streams::stream::SampleStream;

const LABEL: &str = "Gaussian";

/// Normally distributed samples with a fixed mean and standard deviation.
#[derive(Debug)]
pub struct GaussianGenerator {
    seed: u64,
    rng: StdRng,
    normal: Normal<f32>,
    max_samples: Option<usize>,
    produced: usize,
}

impl GaussianGenerator {
    pub fn new(
        mean: f32,
        std_dev: f32,
        max_samples: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Self, Error> {
        if !mean.is_finite() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Gaussian mean must be finite",
            ));
        }
        if std_dev.is_nan() || std_dev < 0.0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Gaussian std_dev must be non-negative",
            ));
        }
        let normal = Normal::new(mean, std_dev)
            .map_err(|e| Error::new(ErrorKind::InvalidInput, format!("Gaussian std_dev: {e}")))?;

        let seed = resolve_seed(seed);
        log::debug!("gaussian generator N({mean}, {std_dev}) seeded with {seed}");
        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            normal,
            max_samples,
            produced: 0,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SampleStream for GaussianGenerator {
    fn label(&self) -> &str {
        LABEL
    }

    fn has_more_samples(&self) -> bool {
        self.max_samples.is_none_or(|max| self.produced < max)
    }

    fn next_sample(&mut self) -> Option<f32> {
        if !self.has_more_samples() {
            return None;
        }
        let v = self.normal.sample(&mut self.rng);
        self.produced += 1;
        Some(v)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streams::collect_samples;

    #[test]
    fn sample_moments_are_close_to_parameters() {
        let mut generator = GaussianGenerator::new(100.0, 20.0, Some(20_000), Some(2025)).unwrap();
        let values = collect_samples(&mut generator);
        let n = values.len() as f64;
        let mean = values.iter().map(|&v| v as f64).sum::<f64>() / n;
        let var = values.iter().map(|&v| (v as f64 - mean).powi(2)).sum::<f64>() / n;
        assert!((mean - 100.0).abs() < 1.0, "mean={mean}");
        assert!((var.sqrt() - 20.0).abs() < 1.0, "std_dev={}", var.sqrt());
    }

    #[test]
    fn zero_std_dev_is_constant() {
        let mut generator = GaussianGenerator::new(7.5, 0.0, Some(10), Some(3)).unwrap();
        assert!(collect_samples(&mut generator).iter().all(|&v| v == 7.5));
    }

    #[test]
    fn restart_resets_sequence_with_same_seed() {
        let mut generator = GaussianGenerator::new(0.0, 1.0, Some(40), Some(99)).unwrap();
        let first = collect_samples(&mut generator);
        generator.restart().unwrap();
        let second = collect_samples(&mut generator);
        assert_eq!(first.len(), 40);
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let err = GaussianGenerator::new(0.0, -1.0, None, Some(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = GaussianGenerator::new(0.0, f32::NAN, None, Some(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = GaussianGenerator::new(f32::INFINITY, 1.0, None, Some(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn negative_std_dev_is_rejected() {
        for std_dev in [-1.0f32, -1.0e-6, f32::NEG_INFINITY] {
            let err = GaussianGenerator::new(100.0, std_dev, Some(10), Some(1)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "std_dev={std_dev}");
        }
    }

    #[test]
    fn label_names_the_distribution() {
        let generator = GaussianGenerator::new(0.0, 1.0, None, Some(1)).unwrap();
        assert_eq!(generator.label(), "Gaussian");
    }
}
