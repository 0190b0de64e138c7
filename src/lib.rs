pub mod error;
pub mod geometry;
pub mod math;
pub mod polygon;

pub use error::{FlatgeomError, Result};
