pub mod catalog;
pub mod config;
pub mod estimator;

pub use catalog::Catalog;
pub use estimator::Estimator;
