use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VarianceError {
    /// The sample set had no elements, so no mean exists to fold from.
    #[error("invalid input: variance needs at least one sample")]
    InvalidInput,
}
