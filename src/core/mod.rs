pub mod area;
pub mod calculator;

pub use crate::domain::model::{BoxDimensions, SurfaceArea};
pub use crate::domain::ports::{DimensionSource, ResultSink};
pub use crate::utils::error::Result;
