//! Configuration loading from disk and environment.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::validation::{Validate, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config<T>(path: &Path) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Validate,
{
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;

    config.validate().map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load from `path` when given, otherwise start from defaults.
pub fn load_or_default<T>(path: Option<&Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Validate + Default,
{
    match path {
        Some(path) => load_config(path),
        None => Ok(T::default()),
    }
}

/// Parse a `PORT` value. Unset or empty yields `None`.
pub fn parse_port(value: Option<&str>) -> Result<Option<u16>, ConfigError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<u16>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidPort(raw.to_string())),
    }
}

/// Read the `PORT` environment variable.
pub fn port_from_env() -> Result<Option<u16>, ConfigError> {
    parse_port(std::env::var("PORT").ok().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{EdgeConfig, PrivateConfig};
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", name, uuid::Uuid::new_v4()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_valid_file() {
        let path = write_temp(
            "edge",
            r#"
            [listener]
            bind_address = "127.0.0.1:5001"

            [backend]
            base_url = "http://10.0.0.5:8080/pri"
            allowed_services = ["1", "2", "3"]
            "#,
        );
        let config: EdgeConfig = load_config(&path).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:5001");
        assert_eq!(config.backend.allowed_services.len(), 3);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn reports_validation_failures() {
        let path = write_temp("private", "target_url = \"not a url\"\n");
        let err = load_config::<PrivateConfig>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
        assert!(err.to_string().starts_with("Validation failed"));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config::<PrivateConfig>(Path::new("/nonexistent/runservice.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn port_parsing() {
        assert_eq!(parse_port(None).unwrap(), None);
        assert_eq!(parse_port(Some("")).unwrap(), None);
        assert_eq!(parse_port(Some("8081")).unwrap(), Some(8081));
        assert!(matches!(parse_port(Some("eighty")), Err(ConfigError::InvalidPort(_))));
    }
}
