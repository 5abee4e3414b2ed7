pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{
    cli::{LineSource, WriterSink},
    OutputFormat,
};
pub use crate::core::{area::area, calculator::AreaCalculator};
pub use domain::model::{BoxDimensions, SurfaceArea};
pub use utils::error::{AreaError, Result};
