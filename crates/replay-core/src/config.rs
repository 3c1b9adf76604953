use connectors::sink::SigningCredentials;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Environment variable {0} is invalid: {1}")]
    Invalid(&'static str, String),
}

/// The full configuration surface, read once at startup and passed down
/// explicitly. Nothing below this layer touches the environment.
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Root of the blob store holding record sources and cursor state.
    pub data_dir: String,
    /// Key of the cursor blob, e.g. `meta_data.json`.
    pub cursor_key: String,
    /// Engine names; list order is the per-tick processing order.
    pub engines: Vec<String>,
    pub identity_column: String,
    pub feature_columns: Vec<String>,
    pub sink_endpoint: String,
    pub credentials: SigningCredentials,
    pub request_timeout: Duration,
    pub io_timeout: Duration,
}

impl ReplayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&std::env::vars().collect())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        Ok(ReplayConfig {
            data_dir: require(vars, "DATA_DIR")?,
            cursor_key: require(vars, "META_DATA_FILE")?,
            engines: require_list(vars, "ENGINES")?,
            identity_column: require(vars, "ID_COL_NAME")?,
            feature_columns: require_list(vars, "FEATURE_COL_NAMES")?,
            sink_endpoint: require(vars, "SINK_ENDPOINT")?,
            credentials: SigningCredentials {
                access_key: require(vars, "SINK_ACCESS_KEY")?,
                secret_key: require(vars, "SINK_SECRET_KEY")?,
                session_token: optional(vars, "SINK_SESSION_TOKEN"),
                region: require(vars, "SINK_REGION")?,
                service: "appsync".to_string(),
            },
            request_timeout: timeout_or_default(vars, "REQUEST_TIMEOUT_SECS")?,
            io_timeout: timeout_or_default(vars, "IO_TIMEOUT_SECS")?,
        })
    }
}

fn require(vars: &HashMap<String, String>, name: &'static str) -> Result<String, ConfigError> {
    match vars.get(name) {
        Some(value) if !value.trim().is_empty() => Ok(value.clone()),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn optional(vars: &HashMap<String, String>, name: &'static str) -> Option<String> {
    vars.get(name).filter(|value| !value.trim().is_empty()).cloned()
}

/// Comma-separated list; entries are trimmed, order is preserved. The
/// configured order is the processing order, so it must stay stable.
fn require_list(
    vars: &HashMap<String, String>,
    name: &'static str,
) -> Result<Vec<String>, ConfigError> {
    let raw = require(vars, name)?;
    let items: Vec<String> = raw
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        return Err(ConfigError::Invalid(name, "empty list".to_string()));
    }
    Ok(items)
}

fn timeout_or_default(
    vars: &HashMap<String, String>,
    name: &'static str,
) -> Result<Duration, ConfigError> {
    match vars.get(name) {
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|err| ConfigError::Invalid(name, err.to_string())),
        None => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_vars() -> HashMap<String, String> {
        [
            ("DATA_DIR", "/var/replay"),
            ("META_DATA_FILE", "meta_data.json"),
            ("ENGINES", "Engine1, Engine2,Engine3"),
            ("ID_COL_NAME", "unit"),
            ("FEATURE_COL_NAMES", "temp,pressure"),
            ("SINK_ENDPOINT", "https://api.example.com/graphql"),
            ("SINK_ACCESS_KEY", "AKIDEXAMPLE"),
            ("SINK_SECRET_KEY", "secret"),
            ("SINK_REGION", "us-east-1"),
        ]
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
    }

    #[test]
    fn parses_full_surface_with_defaults() {
        let config = ReplayConfig::from_vars(&full_vars()).unwrap();
        assert_eq!(config.engines, vec!["Engine1", "Engine2", "Engine3"]);
        assert_eq!(config.feature_columns, vec!["temp", "pressure"]);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.credentials.session_token.is_none());
    }

    #[test]
    fn missing_variable_names_the_offender() {
        let mut vars = full_vars();
        vars.remove("ENGINES");

        let err = ReplayConfig::from_vars(&vars).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("ENGINES")));
    }

    #[test]
    fn blank_list_is_rejected() {
        let mut vars = full_vars();
        vars.insert("ENGINES".to_string(), " , ,".to_string());

        let err = ReplayConfig::from_vars(&vars).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("ENGINES", _)));
    }

    #[test]
    fn timeout_override_is_parsed() {
        let mut vars = full_vars();
        vars.insert("REQUEST_TIMEOUT_SECS".to_string(), "3".to_string());
        vars.insert("IO_TIMEOUT_SECS".to_string(), "nope".to_string());

        let err = ReplayConfig::from_vars(&vars).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("IO_TIMEOUT_SECS", _)));

        vars.insert("IO_TIMEOUT_SECS".to_string(), "7".to_string());
        let config = ReplayConfig::from_vars(&vars).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.io_timeout, Duration::from_secs(7));
    }
}
