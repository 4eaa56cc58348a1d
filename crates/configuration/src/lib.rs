use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{CalculatorSettings, Config, OutputFormat, RiskThresholds};

/// Prefix for environment overrides, e.g. `DDCALC__CALCULATOR__STARTING_BALANCE`.
pub const ENV_PREFIX: &str = "DDCALC";

/// Loads the application configuration from `config.toml` in the working
/// directory, if there is one.
///
/// Every setting has a default, so a missing file is not an error. Environment
/// variables prefixed with `DDCALC__` are layered on top of the file.
pub fn load_config() -> Result<Config, ConfigError> {
    build(
        config::File::with_name("config.toml").required(false),
        environment(),
    )
}

/// Loads the configuration from an explicit file, which must exist.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    build(config::File::from(path).required(true), environment())
}

/// `DDCALC__SECTION__KEY` maps to `section.key`.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
}

fn build<S>(file: S, env: config::Environment) -> Result<Config, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let builder = config::Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}
