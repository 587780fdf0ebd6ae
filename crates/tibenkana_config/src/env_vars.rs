//! Environment variable handling for the Tibenkana booking service.
//!
//! Configuration values can come from three kinds of variables:
//!
//! - prefixed paths picked up by the `config` crate (`TIBENKANA__SERVER__PORT`)
//! - `secret_from_env` markers, resolved from the upper-cased path (`smtp.password` → `SMTP_PASSWORD`)
//! - the plain `SMTP_*` variables the mail transport has always been configured with

use crate::models::SmtpConfig;
use serde_json::Value;
use std::env;
use tracing::warn;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "TIBENKANA";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Marker value that asks for a secret to be read from the environment
pub const SECRET_MARKER: &str = "secret_from_env";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a secret path to an environment variable name
///
/// `smtp.password` becomes `SMTP_PASSWORD`.
pub fn secret_path_to_env_var(path: &str) -> String {
    path.replace('.', SECRET_SEPARATOR).to_uppercase()
}

/// Recursively replaces all `secret_from_env` string values with environment variable values.
///
/// Returns the paths that were left unresolved.
pub fn inject_env_secrets(value: &mut Value) -> Vec<String> {
    inject_with(value, |name| env::var(name).ok())
}

pub(crate) fn inject_with<F>(value: &mut Value, lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    fn walk<F: Fn(&str) -> Option<String>>(
        path: &mut Vec<String>,
        obj: &mut Value,
        lookup: &F,
        missing: &mut Vec<String>,
    ) {
        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    path.push(k.to_string());
                    walk(path, v, lookup, missing);
                    path.pop();
                }
            }
            Value::String(s) if s == SECRET_MARKER => {
                let path_str = path.join(".");
                match lookup(&secret_path_to_env_var(&path_str)) {
                    Some(env_val) => *obj = Value::String(env_val),
                    None => {
                        // An unresolved marker must not leak into the config as a real value.
                        *obj = Value::Null;
                        missing.push(path_str);
                    }
                }
            }
            _ => {}
        }
    }

    let mut missing = Vec::new();
    walk(&mut Vec::new(), value, &lookup, &mut missing);
    missing
}

/// Applies the plain `SMTP_HOST`, `SMTP_PORT`, `SMTP_USER`, `SMTP_PASS` and `SMTP_FROM`
/// variables on top of the configured smtp section.
pub fn apply_smtp_env_overrides(smtp: &mut SmtpConfig) {
    apply_smtp_overrides_with(smtp, |name| env::var(name).ok())
}

pub(crate) fn apply_smtp_overrides_with<F>(smtp: &mut SmtpConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(host) = non_blank("SMTP_HOST") {
        smtp.host = Some(host);
    }
    if let Some(port) = non_blank("SMTP_PORT") {
        match port.trim().parse::<u16>() {
            Ok(port) => smtp.port = Some(port),
            Err(_) => warn!("Ignoring SMTP_PORT={:?}: not a valid port", port),
        }
    }
    if let Some(user) = non_blank("SMTP_USER") {
        smtp.user = Some(user);
    }
    if let Some(pass) = non_blank("SMTP_PASS") {
        smtp.password = Some(pass);
    }
    if let Some(from) = non_blank("SMTP_FROM") {
        smtp.from = Some(from);
    }
}
