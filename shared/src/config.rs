//! Configuration management for the ingestion Lambda.

use std::env;

use crate::{Error, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name or ARN of the Lambda function running the ingestion engine
    pub engine_function_name: String,
    /// AWS region
    pub aws_region: String,
    /// Stage prefix that API Gateway prepends to request paths
    pub stage_prefix: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let stage_prefix = lookup("API_STAGE_PREFIX").unwrap_or_else(|| "/api".to_string());
        if !stage_prefix.is_empty() && !stage_prefix.starts_with('/') {
            return Err(Error::Config(format!(
                "API_STAGE_PREFIX must start with '/': {}",
                stage_prefix
            )));
        }

        Ok(Self {
            engine_function_name: lookup("ENGINE_FUNCTION_NAME")
                .unwrap_or_else(|| "ingestion-engine".to_string()),
            aws_region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            stage_prefix,
        })
    }
}
