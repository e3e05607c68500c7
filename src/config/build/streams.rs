use std::convert::TryFrom;

use crate::config::build::BuildError;
use crate::config::choices::{DistributionChoice, GaussianParameters, UniformParameters};
use crate::streams::SampleStream;
use crate::streams::generators::{GaussianGenerator, UniformGenerator};

fn check_count(count: usize) -> Result<usize, BuildError> {
    if count == 0 {
        return Err(BuildError::InvalidParameter(
            "count must be at least 1".into(),
        ));
    }
    Ok(count)
}

impl TryFrom<UniformParameters> for UniformGenerator {
    type Error = BuildError;

    fn try_from(parameters: UniformParameters) -> Result<Self, Self::Error> {
        let count = check_count(parameters.count)?;
        UniformGenerator::new(parameters.min, parameters.max, Some(count), parameters.seed)
            .map_err(BuildError::from)
    }
}

impl TryFrom<GaussianParameters> for GaussianGenerator {
    type Error = BuildError;

    fn try_from(parameters: GaussianParameters) -> Result<Self, Self::Error> {
        let count = check_count(parameters.count)?;
        GaussianGenerator::new(
            parameters.mean,
            parameters.std_dev,
            Some(count),
            parameters.seed,
        )
        .map_err(BuildError::from)
    }
}

pub fn build_stream(choice: DistributionChoice) -> Result<Box<dyn SampleStream>, BuildError> {
    let stream: Box<dyn SampleStream> = match choice {
        DistributionChoice::Uniform(p) => Box::new(UniformGenerator::try_from(p)?),
        DistributionChoice::Gaussian(p) => Box::new(GaussianGenerator::try_from(p)?),
    };
    Ok(stream)
}
