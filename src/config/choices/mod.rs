mod distribution_choice;

pub use distribution_choice::*;
