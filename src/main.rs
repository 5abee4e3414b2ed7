use anyhow::Context;
use box_area::core::DimensionSource;
use box_area::utils::{logger, validation::Validate};
use box_area::{AreaCalculator, AreaError, CliConfig, LineSource, OutputFormat, SurfaceArea, WriterSink};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        let exit_code = match e.downcast_ref::<AreaError>() {
            Some(area_error) => {
                tracing::debug!("Failed: {:#}", e);
                tracing::debug!("Suggestion: {}", area_error.recovery_suggestion());
                eprintln!("error: {}", area_error.user_friendly_message());
                area_error.exit_code()
            }
            None => {
                eprintln!("error: {:#}", e);
                1
            }
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    config.validate()?;

    let result = match &config.input {
        Some(path) => {
            let source = LineSource::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            calculate(source, config.format)?
        }
        None => calculate(LineSource::stdin(), config.format)?,
    };

    tracing::debug!("Done: {} -> {}", result.dimensions, result.area);
    Ok(())
}

fn calculate<S: DimensionSource>(source: S, format: OutputFormat) -> box_area::Result<SurfaceArea> {
    AreaCalculator::new(source, WriterSink::stdout(format)).run()
}
