// --- File: crates/tibenkana_config/src/lib.rs ---
use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use tracing::warn;

pub mod env_vars;
pub mod models;
pub use models::*;

/// Directory the layered config files are read from, unless `TIBENKANA_CONFIG_DIR` says otherwise.
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Loads the application configuration.
///
/// Sources, later ones winning:
/// 1. `config/default.{toml,yaml,json}`
/// 2. `config/<RUN_ENV>.{toml,yaml,json}` (RUN_ENV defaults to `development`)
/// 3. `TIBENKANA__SECTION__KEY` environment variables
///
/// Afterwards `secret_from_env` markers are resolved and the plain `SMTP_*`
/// variables are applied to the smtp section.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "development".to_string());
    let config_dir = PathBuf::from(
        env::var("TIBENKANA_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string()),
    );
    let prefix = env_vars::get_config_prefix();

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .prefix_separator(env_vars::CONFIG_SEPARATOR)
                .separator(env_vars::CONFIG_SEPARATOR)
                .list_separator(",")
                .with_list_parse_key("smtp.recipients")
                .with_list_parse_key("bookings.services")
                .with_list_parse_key("bookings.time_slots")
                .try_parsing(true),
        );

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    let mut config = apply_env_overrides_from_marker(raw_config)?;
    env_vars::apply_smtp_env_overrides(&mut config.smtp);
    Ok(config)
}

/// Applies environment overrides based on "secret_from_env" markers in serialized config
pub fn apply_env_overrides_from_marker(config: AppConfig) -> Result<AppConfig, ConfigError> {
    let mut json = serde_json::to_value(&config)
        .map_err(|err| ConfigError::Message(format!("failed to serialize config: {err}")))?;
    for path in env_vars::inject_env_secrets(&mut json) {
        warn!(
            "env var {} not found for secret_from_env at {}",
            env_vars::secret_path_to_env_var(&path),
            path
        );
    }
    serde_json::from_value(json)
        .map_err(|err| ConfigError::Message(format!("failed to rebuild config: {err}")))
}

static INIT_DOTENV: OnceCell<String> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables, once.
///
/// The file is `DOTENV_OVERRIDE` when set, else the first command line argument
/// if it looks like `.env*`, else `.env`. Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    INIT_DOTENV
        .get_or_init(|| {
            let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
            let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

            let dotenv_path = dotenv_path_override
                .or(dotenv_path_arg)
                .unwrap_or_else(|| ".env".to_string());
            dotenv::from_filename(&dotenv_path).ok();
            dotenv_path
        })
        .clone()
}
