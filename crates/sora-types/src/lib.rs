pub mod error;
pub mod estimate;
pub mod gpu;
pub mod plan;
pub mod request;
