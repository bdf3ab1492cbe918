pub mod quality_service;

pub use quality_service::{degradation_percent, QualityError};
