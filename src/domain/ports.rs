use crate::domain::model::SurfaceArea;
use crate::utils::error::Result;

/// Yields raw input lines, one value per line.
pub trait DimensionSource {
    /// Next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>>;
}

pub trait ResultSink {
    fn write_result(&mut self, result: &SurfaceArea) -> Result<()>;
}
