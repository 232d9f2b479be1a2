use rust_decimal::Decimal;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{ChartSettings, Config, DatasetSettings};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the configuration file,
/// deserializes it into our strongly-typed `Config` struct, and returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml"))
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

/// Rejects settings the aggregation layer cannot work with.
fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.charts.histogram_bins == 0 {
        return Err(ConfigError::ValidationError(
            "charts.histogram_bins must be at least 1".to_string(),
        ));
    }
    let high = config.charts.high_share_threshold;
    let low = config.charts.low_share_threshold;
    if high < Decimal::ZERO || high > Decimal::ONE || low < Decimal::ZERO || low > Decimal::ONE {
        return Err(ConfigError::ValidationError(
            "cohort share thresholds must lie within [0, 1]".to_string(),
        ));
    }
    if low > high {
        return Err(ConfigError::ValidationError(format!(
            "charts.low_share_threshold ({low}) must not exceed charts.high_share_threshold ({high})"
        )));
    }
    Ok(())
}
