/******************************************************************************
   Author: portainer-client contributors
   Project: portainer-client
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default`
///
/// A variable that is set but cannot be parsed is reported at error level.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
/// * `default` - Value used when the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {env_var}={val:?} ({e:?}), using default");
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable, returning `None` when it is missing,
/// empty or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    let raw = env::var(env_var).ok().filter(|v| !v.trim().is_empty())?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Failed to parse {env_var} ({e:?}), ignoring it");
            None
        }
    }
}

/// Parses a boolean flag the way shell users write them (`1`, `true`, `yes`, `on`)
#[must_use]
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Reads a boolean flag from the environment, falling back to `default`
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    match env::var(env_var) {
        Ok(val) => parse_flag(&val).unwrap_or_else(|| {
            error!("Failed to parse {env_var}={val:?} as a flag, using default");
            default
        }),
        Err(_) => default,
    }
}
