//! Configuration management for Lambda functions.

use std::env;

use crate::{Error, Result};

/// Production Maps API base URL.
pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";

/// Where the Maps API key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    /// Key given directly in the environment
    Literal(String),
    /// ARN of a Secrets Manager secret holding the key
    SecretArn(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maps API key or where to fetch it from
    pub api_key: ApiKeySource,
    /// Base URL the endpoint paths are resolved against
    pub base_url: String,
    /// AWS region
    pub aws_region: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let api_key = match (
            var("GOOGLE_MAPS_API_KEY"),
            var("GOOGLE_MAPS_API_KEY_SECRET_ARN"),
        ) {
            (Some(key), _) => ApiKeySource::Literal(key),
            (None, Some(arn)) => ApiKeySource::SecretArn(arn),
            (None, None) => {
                return Err(Error::Config(
                    "GOOGLE_MAPS_API_KEY or GOOGLE_MAPS_API_KEY_SECRET_ARN must be set".to_string(),
                ))
            }
        };

        Ok(Self {
            api_key,
            base_url: var("GOOGLE_MAPS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            aws_region: var("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
        })
    }
}
