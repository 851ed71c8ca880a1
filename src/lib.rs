pub mod curve;
pub mod discretize;
pub mod error;
pub mod math;
pub mod station;

pub use error::{AlineaError, Result};
