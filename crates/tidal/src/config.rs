use crate::error::{Result, TidalErrorExt};
use config::{Config, Environment, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_NAME: &str = "tidal";
/// Prefix of environment overrides, e.g. `TIDAL__LOG__LEVEL=debug`.
pub const ENV_PREFIX: &str = "TIDAL";

/// Settings for the code generation step.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TidalConfig {
    /// Directory holding the `*.sql` sources.
    pub migrations: PathBuf,
    /// Generated Rust file.
    pub output: PathBuf,
    /// Package override; derived from the migrations when unset.
    pub package: Option<String>,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
    pub path: Option<PathBuf>,
}

impl Default for TidalConfig {
    fn default() -> Self {
        Self {
            migrations: PathBuf::from("migrations"),
            output: PathBuf::from("migrations.rs"),
            package: None,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, path: None }
    }
}

/// Loads configuration from an optional file overlaid with `TIDAL__` environment variables.
///
/// Without a path, `tidal.{toml,yaml,json,...}` in the working directory is used when
/// present. The file is optional in both cases; nested keys are separated by `__` in
/// variable names (`TIDAL__LOG__LEVEL` maps to `log.level`).
///
/// # Errors
/// Returns [`crate::TidalError::Config`] if a source cannot be parsed or the merged
/// values do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use tidal::config::{TidalConfig, load_config};
///
/// let cfg: TidalConfig = load_config(None::<&str>)?;
/// assert_eq!(cfg.log.level, "info");
/// # Ok::<(), tidal::TidalError>(())
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T>
where
    T: DeserializeOwned,
{
    load_with_env(path, Environment::with_prefix(ENV_PREFIX).separator("__"))
}

fn load_with_env<T>(path: Option<impl AsRef<Path>>, env: Environment) -> Result<T>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_NAME), |p| p.as_ref().to_path_buf());

    debug!("Loading config from {}", effective_path.display());

    Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
