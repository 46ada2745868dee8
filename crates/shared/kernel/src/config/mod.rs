use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `UHUB__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "UHUB";

#[uhub_derive::uhub_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays `UHUB__`-prefixed environment variables.
///
/// The file defaults to `server` in the working directory, with any extension the
/// `config` crate understands (`server.toml`, `server.json`, ...). Nested keys are reached
/// with a double underscore: `UHUB__UNIFICATION__VERTICALS` maps to `unification.verticals`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing or its content does not match `T`.
///
/// # Example
/// ```rust
/// use uhub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("unification.verticals")
                .with_list_parse_key("unification.disabled_providers")
                .try_parsing(true),
        );

    info!("Loading config from {}", effective_path.display());

    builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
