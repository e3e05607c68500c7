mod error;
mod one_pass;
mod two_pass;

pub use error::VarianceError;
pub use one_pass::variance_one_pass;
pub use two_pass::variance_two_pass;
