use crate::core::area::{parse_dimension, surface_area};
use crate::core::{BoxDimensions, DimensionSource, ResultSink, SurfaceArea};
use crate::utils::error::{AreaError, Result};
use num_bigint::BigInt;

/// Reads three dimensions from a source, computes the surface area and
/// writes it to a sink.
pub struct AreaCalculator<S: DimensionSource, W: ResultSink> {
    source: S,
    sink: W,
}

impl<S: DimensionSource, W: ResultSink> AreaCalculator<S, W> {
    pub fn new(source: S, sink: W) -> Self {
        Self { source, sink }
    }

    pub fn run(&mut self) -> Result<SurfaceArea> {
        // Read
        let dimensions = self.read_dimensions()?;
        tracing::debug!("Read dimensions {}", dimensions);

        // Compute
        let area = surface_area(&dimensions);
        tracing::debug!("Surface area of {} is {}", dimensions, area);

        // Write
        let result = SurfaceArea { dimensions, area };
        self.sink.write_result(&result)?;

        Ok(result)
    }

    /// Lines are taken in the order first dimension, second dimension, height.
    fn read_dimensions(&mut self) -> Result<BoxDimensions> {
        let x = self.read_value(1)?;
        let y = self.read_value(2)?;
        let h = self.read_value(3)?;
        Ok(BoxDimensions::new(x, y, h))
    }

    fn read_value(&mut self, line: usize) -> Result<BigInt> {
        let raw = self
            .source
            .next_line()?
            .ok_or(AreaError::MissingInput { line })?;
        let value = parse_dimension(line, &raw)?;
        tracing::debug!("Line {}: {}", line, value);
        Ok(value)
    }

    pub fn into_sink(self) -> W {
        self.sink
    }
}
