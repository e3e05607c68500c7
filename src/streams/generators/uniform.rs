use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::streams::generators::resolve_seed;
use crate::streams::stream::SampleStream;

const LABEL: &str = "Uniform";

/// Uniform samples on `[min, max)`.
#[derive(Debug)]
pub struct UniformGenerator {
    seed: u64,
    rng: StdRng,
    min: f32,
    max: f32,
    max_samples: Option<usize>,
    produced: usize,
}

impl UniformGenerator {
    pub fn new(
        min: f32,
        max: f32,
        max_samples: Option<usize>,
        seed: Option<u64>,
    ) -> Result<Self, Error> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Uniform bounds must be finite",
            ));
        }
        if min >= max {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Uniform min must be strictly below max",
            ));
        }

        let seed = resolve_seed(seed);
        log::debug!("uniform generator on [{min}, {max}) seeded with {seed}");
        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            min,
            max,
            max_samples,
            produced: 0,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl SampleStream for UniformGenerator {
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
        let v = self.rng.random_range(self.min..self.max);
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
    fn samples_stay_in_bounds() {
        let mut generator = UniformGenerator::new(-1000.0, 1000.0, Some(2000), Some(42)).unwrap();
        let values = collect_samples(&mut generator);
        assert_eq!(values.len(), 2000);
        assert!(values.iter().all(|v| (-1000.0..1000.0).contains(v)));
    }

    #[test]
    fn bounded_stream_stops_at_cap() {
        let mut generator = UniformGenerator::new(0.0, 1.0, Some(3), Some(1)).unwrap();
        for _ in 0..3 {
            assert!(generator.next_sample().is_some());
        }
        assert!(!generator.has_more_samples());
        assert!(generator.next_sample().is_none());
    }

    #[test]
    fn unbounded_stream_keeps_going() {
        let mut generator = UniformGenerator::new(0.0, 1.0, None, Some(1)).unwrap();
        for _ in 0..10_000 {
            assert!(generator.next_sample().is_some());
        }
        assert!(generator.has_more_samples());
    }

    #[test]
    fn restart_resets_sequence_with_same_seed() {
        let mut generator = UniformGenerator::new(-5.0, 5.0, Some(50), Some(12345)).unwrap();
        let first = collect_samples(&mut generator);
        generator.restart().unwrap();
        let second = collect_samples(&mut generator);
        assert_eq!(first, second);
    }

    #[test]
    fn unseeded_generator_still_replays() {
        let mut generator = UniformGenerator::new(-5.0, 5.0, Some(20), None).unwrap();
        let first = collect_samples(&mut generator);
        generator.restart().unwrap();
        assert_eq!(first, collect_samples(&mut generator));

        let mut twin = UniformGenerator::new(-5.0, 5.0, Some(20), Some(generator.seed())).unwrap();
        assert_eq!(first, collect_samples(&mut twin));
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let err = UniformGenerator::new(1.0, 1.0, None, Some(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = UniformGenerator::new(2.0, -2.0, None, Some(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = UniformGenerator::new(f32::NEG_INFINITY, 0.0, None, Some(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = UniformGenerator::new(0.0, f32::NAN, None, Some(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn label_names_the_distribution() {
        let generator = UniformGenerator::new(0.0, 1.0, None, Some(1)).unwrap();
        assert_eq!(generator.label(), "Uniform");
    }
}
