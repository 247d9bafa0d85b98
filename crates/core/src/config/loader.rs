//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result};
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults.
    ///
    /// An explicit path must exist; otherwise the standard locations are
    /// searched and defaults are used when none is found.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            if !Path::new(p).exists() {
                return Err(Error::config_not_found(p));
            }
        }

        let config_path = path.map(String::from).or_else(find_config_file);

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };
        validate(&schema)?;

        tracing::debug!(path = ?config_path, "Configuration loaded");

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [".chapashop.toml", "chapashop.toml", ".config/chapashop.toml"];

    candidates
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read config file {}: {}", path, e)))?;

    toml::from_str(&content).map_err(|e| {
        Error::from(e).with_context(format!("While parsing {}", path))
    })
}

fn validate(schema: &ConfigSchema) -> Result<()> {
    if schema.geolocation.timeout_secs == 0 {
        return Err(Error::invalid_config_value(
            "geolocation.timeout_secs",
            "must be greater than zero",
        ));
    }

    let radius = schema.nearby.radius_km;
    if radius.is_nan() || radius <= 0.0 {
        return Err(Error::invalid_config_value(
            "nearby.radius_km",
            "must be a positive number",
        ));
    }

    if let Some(home) = schema.geolocation.home() {
        if !home.is_valid() {
            return Err(Error::invalid_config_value(
                "geolocation.home_lat/home_lng",
                "out of range",
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.geolocation.timeout_secs, 10);
        assert_eq!(config.schema.geolocation.max_age_secs, 300);
        assert!(config.schema.geolocation.high_accuracy);
    }

    #[test]
    fn test_position_options_match_defaults() {
        let options = Config::default().schema.geolocation.position_options();
        assert_eq!(options, chapashop_geo::PositionOptions::default());
    }

    #[test]
    fn test_load_explicit_file() {
        let file = write_config(
            r#"
[geolocation]
timeout_secs = 3
home_lat = 19.4326
home_lng = -99.1332

[nearby]
limit = 5
"#,
        );

        let config = Config::load(file.path().to_str()).unwrap();
        assert_eq!(config.schema.geolocation.timeout_secs, 3);
        assert_eq!(config.schema.nearby.limit, 5);
        assert_eq!(config.schema.nearby.radius_km, 5.0);
        assert!(config.schema.geolocation.home().is_some());
        assert_eq!(config.schema.general.app_name, "ChapaShop");
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let err = Config::load(Some("/nonexistent/chapashop.toml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = write_config("[geolocation\ntimeout_secs = ");
        let err = Config::load(file.path().to_str()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
        assert!(err.context.is_some());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let file = write_config("[geolocation]\ntimeout_secs = 0\n");
        let err = Config::load(file.path().to_str()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidConfigValue);
    }

    #[test]
    fn test_home_out_of_range_rejected() {
        let file = write_config("[geolocation]\nhome_lat = 120.0\nhome_lng = 0.0\n");
        assert!(Config::load(file.path().to_str()).is_err());
    }
}
