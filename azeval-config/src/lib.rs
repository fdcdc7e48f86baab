//! # azeval-config
//!
//! Configuration management for Azure AI agent evaluation.
//!
//! Evaluation scripts need the same handful of settings every time: a
//! model deployment name, an API key, a service endpoint, an API version,
//! and optionally an AI Foundry project URL for result tracking. This
//! crate centralizes resolving them (explicit values first, environment
//! variables second), validating that the required four are present, and
//! deriving the `model_config` object the evaluation SDK consumes —
//! without ever printing the raw key.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use azeval_config::EvalConfig;
//!
//! let config = EvalConfig::from_env();
//! config.validate()?; // names every missing field, not just the first
//!
//! let model_config = config.model_config();
//! // hand model_config to the evaluator client
//!
//! println!("{config}"); // api_key shown as e.g. "test...6789"
//! ```
//!
//! Explicit values always win over the environment:
//!
//! ```rust,ignore
//! let config = EvalConfig::builder()
//!     .azure_deployment("gpt-4o-eval")
//!     .api_version("2024-02-01")
//!     .build(); // key and endpoint still come from AZURE_API_KEY / AZURE_ENDPOINT
//! ```

pub mod config;
pub mod error;

// Re-exports
pub use config::{
    ENV_AI_PROJECT, ENV_API_KEY, ENV_API_VERSION, ENV_DEPLOYMENT, ENV_ENDPOINT, EvalConfig,
    EvalConfigBuilder, ModelConfig,
};
pub use error::{ConfigError, Result};
