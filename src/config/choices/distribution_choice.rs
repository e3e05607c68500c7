use serde::{Deserialize, Serialize};

use crate::config::build::BuildError;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumDiscriminants, EnumIter, IntoStaticStr};

const DEFAULT_COUNT: usize = 1000;
fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_uniform_min() -> f32 {
    -1000.0
}
fn default_uniform_max() -> f32 {
    1000.0
}

fn default_gaussian_mean() -> f32 {
    100.0
}
fn default_gaussian_std_dev() -> f32 {
    20.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformParameters {
    #[serde(default = "default_count")]
    pub count: usize,

    #[serde(default = "default_uniform_min")]
    pub min: f32,

    #[serde(default = "default_uniform_max")]
    pub max: f32,

    /// `None` draws a fresh seed per run.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for UniformParameters {
    fn default() -> Self {
        Self {
            count: default_count(),
            min: default_uniform_min(),
            max: default_uniform_max(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianParameters {
    #[serde(default = "default_count")]
    pub count: usize,

    #[serde(default = "default_gaussian_mean")]
    pub mean: f32,

    #[serde(default = "default_gaussian_std_dev")]
    pub std_dev: f32,

    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GaussianParameters {
    fn default() -> Self {
        Self {
            count: default_count(),
            mean: default_gaussian_mean(),
            std_dev: default_gaussian_std_dev(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(DistributionKind))]
#[strum_discriminants(derive(EnumIter, Display, IntoStaticStr))]
pub enum DistributionChoice {
    Uniform(UniformParameters),
    Gaussian(GaussianParameters),
}

impl DistributionChoice {
    pub fn with_defaults(kind: DistributionKind) -> Self {
        match kind {
            DistributionKind::Uniform => Self::Uniform(UniformParameters::default()),
            DistributionKind::Gaussian => Self::Gaussian(GaussianParameters::default()),
        }
    }

    pub fn kind(&self) -> DistributionKind {
        DistributionKind::from(self)
    }

    pub fn count(&self) -> usize {
        match self {
            Self::Uniform(p) => p.count,
            Self::Gaussian(p) => p.count,
        }
    }

    pub fn from_json(text: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// The experiments the binary runs: every distribution with its defaults,
/// Uniform first.
pub fn default_experiments() -> Vec<DistributionChoice> {
    DistributionKind::iter()
        .map(DistributionChoice::with_defaults)
        .collect()
}
