//! Environment-based server configuration.

use crate::server::error::config::ConfigError;

const DEFAULT_BLOB_CONTAINER: &str = "uploads";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub blob_base_url: String,
    pub blob_container: String,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a local `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            None => DEFAULT_DATABASE_MAX_CONNECTIONS,
            Some(value) => match value.trim().parse::<u32>() {
                Ok(max) if max > 0 => max,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "DATABASE_MAX_CONNECTIONS".to_string(),
                        reason: format!("expected a positive integer, got {:?}", value),
                    })
                }
            },
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            database_max_connections,
            blob_base_url: required("BLOB_BASE_URL")?,
            blob_container: lookup("BLOB_CONTAINER")
                .unwrap_or_else(|| DEFAULT_BLOB_CONTAINER.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |name: &str| vars.get(name).cloned()
    }

    /// Expected: optional variables fall back to their defaults
    #[test]
    fn applies_defaults() {
        let config = Config::from_vars(lookup(&[
            ("DATABASE_URL", "postgres://localhost/consent"),
            ("BLOB_BASE_URL", "https://blobs.example.com"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/consent");
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.blob_container, "uploads");
    }

    /// Expected: Err(MissingEnvVar) naming the absent variable
    #[test]
    fn requires_database_url() {
        let result = Config::from_vars(lookup(&[("BLOB_BASE_URL", "https://blobs.example.com")]));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(var)) if var == "DATABASE_URL"));
    }

    /// Expected: Err(InvalidEnvValue) for zero or non-numeric pool sizes
    #[test]
    fn rejects_invalid_max_connections() {
        for value in ["0", "ten", "-3"] {
            let result = Config::from_vars(lookup(&[
                ("DATABASE_URL", "postgres://localhost/consent"),
                ("BLOB_BASE_URL", "https://blobs.example.com"),
                ("DATABASE_MAX_CONNECTIONS", value),
            ]));

            assert!(matches!(
                result,
                Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == "DATABASE_MAX_CONNECTIONS"
            ));
        }
    }
}
