mod gaussian;
mod uniform;

pub use gaussian::GaussianGenerator;
pub use uniform::UniformGenerator;

/// Seed drawn once from the thread RNG when the caller does not pin one, so
/// `restart` still replays the same sequence.
pub(crate) fn resolve_seed(seed: Option<u64>) -> u64 {
    use rand::Rng;
    seed.unwrap_or_else(|| rand::rng().random())
}
