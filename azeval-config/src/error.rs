//! Error types for evaluation configuration

use thiserror::Error;

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised when evaluation configuration is unusable
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required configuration fields could not be resolved
    /// from either an explicit value or the environment.
    #[error("Missing required configuration fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl ConfigError {
    /// Names of the required fields that were absent, in the fixed
    /// field order (deployment, key, endpoint, version).
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            ConfigError::MissingFields(fields) => fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_lists_all_fields() {
        let err = ConfigError::MissingFields(vec!["azure_deployment", "api_key"]);
        assert_eq!(
            err.to_string(),
            "Missing required configuration fields: azure_deployment, api_key"
        );
    }

    #[test]
    fn test_missing_fields_accessor() {
        let err = ConfigError::MissingFields(vec!["api_version"]);
        assert_eq!(err.missing_fields(), &["api_version"]);
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: Result<i32> = Err(ConfigError::MissingFields(vec!["api_key"]));
        assert!(err_result.is_err());
    }
}
