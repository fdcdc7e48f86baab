//! Evaluation configuration resolved from explicit values or the environment.
//!
//! `EvalConfig` centralizes the settings the Azure AI evaluation SDK needs
//! (deployment, key, endpoint, API version) plus the optional Foundry
//! project URL used to route results to a dashboard. Each setting resolves
//! explicit-first: a value passed to the builder always wins over the
//! corresponding environment variable.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Environment variable holding the model deployment name.
pub const ENV_DEPLOYMENT: &str = "AZURE_DEPLOYMENT_NAME";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "AZURE_API_KEY";
/// Environment variable holding the service endpoint URL.
pub const ENV_ENDPOINT: &str = "AZURE_ENDPOINT";
/// Environment variable holding the API version tag.
pub const ENV_API_VERSION: &str = "AZURE_API_VERSION";
/// Environment variable holding the AI Foundry project URL.
pub const ENV_AI_PROJECT: &str = "AZURE_AI_PROJECT";

const FIELD_DEPLOYMENT: &str = "azure_deployment";
const FIELD_API_KEY: &str = "api_key";
const FIELD_ENDPOINT: &str = "azure_endpoint";
const FIELD_API_VERSION: &str = "api_version";
const FIELD_AI_PROJECT: &str = "azure_ai_project";

const REDACTED: &str = "****";
const NOT_SET: &str = "<not set>";

/// Configuration for Azure AI evaluation tasks.
///
/// Immutable after construction. Absent settings are represented as
/// `None`, never as empty strings; empty values from either source are
/// treated as not provided.
///
/// # Example
///
/// ```rust,ignore
/// use azeval_config::EvalConfig;
///
/// let config = EvalConfig::from_env();
/// config.validate()?;
/// let model_config = config.model_config();
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct EvalConfig {
    azure_deployment: Option<String>,
    api_key: Option<String>,
    azure_endpoint: Option<String>,
    api_version: Option<String>,
    azure_ai_project: Option<String>,
}

/// The model configuration object consumed by the evaluation SDK.
///
/// Always carries exactly these four keys, in this order. The project
/// URL is routing information, not model configuration, and is never
/// part of this mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Model deployment name.
    pub azure_deployment: Option<String>,
    /// API key.
    pub api_key: Option<String>,
    /// Service endpoint URL.
    pub azure_endpoint: Option<String>,
    /// API version tag.
    pub api_version: Option<String>,
}

impl EvalConfig {
    /// Start building a configuration from explicit values.
    pub fn builder() -> EvalConfigBuilder {
        EvalConfigBuilder::default()
    }

    /// Resolve every setting from the process environment.
    pub fn from_env() -> Self {
        Self::builder().build()
    }

    /// Model deployment name, if resolved.
    pub fn azure_deployment(&self) -> Option<&str> {
        self.azure_deployment.as_deref()
    }

    /// API key, if resolved. Prefer [`masked_api_key`](Self::masked_api_key)
    /// for anything user-visible.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Service endpoint URL, if resolved.
    pub fn azure_endpoint(&self) -> Option<&str> {
        self.azure_endpoint.as_deref()
    }

    /// API version tag, if resolved.
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    /// AI Foundry project URL, if resolved. Optional; never required
    /// for validity.
    pub fn azure_ai_project(&self) -> Option<&str> {
        self.azure_ai_project.as_deref()
    }

    /// Derive the model configuration the evaluation SDK consumes.
    ///
    /// Total: absent settings appear as `None` in the output rather
    /// than failing here. Call [`validate`](Self::validate) first for a
    /// hard guarantee.
    pub fn model_config(&self) -> ModelConfig {
        ModelConfig {
            azure_deployment: self.azure_deployment.clone(),
            api_key: self.api_key.clone(),
            azure_endpoint: self.azure_endpoint.clone(),
            api_version: self.api_version.clone(),
        }
    }

    /// Soft check: true iff all four required settings are present.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Hard check: fails with [`ConfigError::MissingFields`] naming
    /// every absent required setting, in field order.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.azure_deployment.is_none() {
            missing.push(FIELD_DEPLOYMENT);
        }
        if self.api_key.is_none() {
            missing.push(FIELD_API_KEY);
        }
        if self.azure_endpoint.is_none() {
            missing.push(FIELD_ENDPOINT);
        }
        if self.api_version.is_none() {
            missing.push(FIELD_API_VERSION);
        }

        if missing.is_empty() { Ok(()) } else { Err(ConfigError::MissingFields(missing)) }
    }

    /// API key in redacted form: first and last four characters for
    /// keys longer than eight characters, a fixed marker otherwise.
    pub fn masked_api_key(&self) -> String {
        mask_key(self.api_key.as_deref())
    }
}

fn mask_key(key: Option<&str>) -> String {
    match key {
        Some(key) => {
            let chars: Vec<char> = key.chars().collect();
            if chars.len() > 8 {
                let head: String = chars[..4].iter().collect();
                let tail: String = chars[chars.len() - 4..].iter().collect();
                format!("{head}...{tail}")
            } else {
                REDACTED.to_string()
            }
        }
        None => REDACTED.to_string(),
    }
}

impl fmt::Display for EvalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |value: Option<&str>| value.unwrap_or(NOT_SET).to_string();
        write!(
            f,
            "EvalConfig({FIELD_DEPLOYMENT}: {}, {FIELD_API_KEY}: {}, {FIELD_ENDPOINT}: {}, \
             {FIELD_API_VERSION}: {}, {FIELD_AI_PROJECT}: {})",
            show(self.azure_deployment()),
            self.masked_api_key(),
            show(self.azure_endpoint()),
            show(self.api_version()),
            show(self.azure_ai_project()),
        )
    }
}

// Manual impl so `{:?}` goes through the same masking as `{}`. A derived
// Debug would print the raw key.
impl fmt::Debug for EvalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Builder for [`EvalConfig`].
///
/// Unset fields fall back to their environment variables at build time;
/// explicit values always win, even when the variable is also set.
#[derive(Debug, Clone, Default)]
pub struct EvalConfigBuilder {
    azure_deployment: Option<String>,
    api_key: Option<String>,
    azure_endpoint: Option<String>,
    api_version: Option<String>,
    azure_ai_project: Option<String>,
}

impl EvalConfigBuilder {
    /// Set the model deployment name.
    pub fn azure_deployment(mut self, value: impl Into<String>) -> Self {
        self.azure_deployment = Some(value.into());
        self
    }

    /// Set the API key.
    pub fn api_key(mut self, value: impl Into<String>) -> Self {
        self.api_key = Some(value.into());
        self
    }

    /// Set the service endpoint URL.
    pub fn azure_endpoint(mut self, value: impl Into<String>) -> Self {
        self.azure_endpoint = Some(value.into());
        self
    }

    /// Set the API version tag.
    pub fn api_version(mut self, value: impl Into<String>) -> Self {
        self.api_version = Some(value.into());
        self
    }

    /// Set the AI Foundry project URL.
    pub fn azure_ai_project(mut self, value: impl Into<String>) -> Self {
        self.azure_ai_project = Some(value.into());
        self
    }

    /// Resolve unset fields from the process environment.
    pub fn build(self) -> EvalConfig {
        self.build_with(|name| std::env::var(name).ok())
    }

    /// Resolve unset fields through `lookup`.
    ///
    /// This is the only place the environment is consulted; `lookup` is
    /// called at most once per field. Injectable so tests can supply a
    /// fixed mapping instead of mutating process state.
    pub fn build_with<F>(self, lookup: F) -> EvalConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut from_env: Vec<&'static str> = Vec::new();
        let mut absent: Vec<&'static str> = Vec::new();
        let mut resolve = |explicit: Option<String>, var: &str, field: &'static str| {
            if let Some(value) = non_empty(explicit) {
                return Some(value);
            }
            match non_empty(lookup(var)) {
                Some(value) => {
                    from_env.push(field);
                    Some(value)
                }
                None => {
                    absent.push(field);
                    None
                }
            }
        };

        let config = EvalConfig {
            azure_deployment: resolve(self.azure_deployment, ENV_DEPLOYMENT, FIELD_DEPLOYMENT),
            api_key: resolve(self.api_key, ENV_API_KEY, FIELD_API_KEY),
            azure_endpoint: resolve(self.azure_endpoint, ENV_ENDPOINT, FIELD_ENDPOINT),
            api_version: resolve(self.api_version, ENV_API_VERSION, FIELD_API_VERSION),
            azure_ai_project: resolve(self.azure_ai_project, ENV_AI_PROJECT, FIELD_AI_PROJECT),
        };

        // Field names only. Values (the key in particular) never reach the log.
        debug!(?from_env, ?absent, "resolved evaluation configuration");
        config
    }
}

// Empty strings from either source count as not provided.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key_absent() {
        assert_eq!(mask_key(None), "****");
    }

    #[test]
    fn test_mask_key_short() {
        assert_eq!(mask_key(Some("short")), "****");
        assert_eq!(mask_key(Some("12345678")), "****");
        assert_eq!(mask_key(Some("")), "****");
    }

    #[test]
    fn test_mask_key_long() {
        assert_eq!(mask_key(Some("123456789")), "1234...6789");
        assert_eq!(mask_key(Some("test-key-123456789")), "test...6789");
    }

    #[test]
    fn test_mask_key_multibyte_boundary() {
        // Character count, not byte count, decides the 8-char threshold.
        assert_eq!(mask_key(Some("éééééééé")), "****");
        assert_eq!(mask_key(Some("ééééXéééé")), "éééé...éééé");
    }

    #[test]
    fn test_non_empty_filters_empty_strings() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_debug_matches_masked_display() {
        let config = EvalConfig::builder()
            .api_key("abcdefghijkl")
            .build_with(|_| None);
        assert_eq!(format!("{config:?}"), format!("{config}"));
        assert!(!format!("{config:?}").contains("abcdefghijkl"));
    }
}
