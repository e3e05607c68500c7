pub mod estimators;
pub mod variance;
