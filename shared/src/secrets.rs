//! AWS Secrets Manager integration.

use aws_sdk_secretsmanager::Client as SecretsClient;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;
use tokio::sync::RwLock;

use crate::config::ApiKeySource;
use crate::{Config, Error, Result};

/// Cached secrets with lazy initialization.
static SECRETS_CACHE: OnceLock<RwLock<HashMap<String, String>>> = OnceLock::new();

fn get_cache() -> &'static RwLock<HashMap<String, String>> {
    SECRETS_CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Maps API key stored as a JSON secret.
#[derive(Debug, Deserialize)]
struct ApiKeySecret {
    api_key: String,
}

/// Get a secret value from Secrets Manager with caching.
pub async fn get_secret(client: &SecretsClient, secret_arn: &str) -> Result<String> {
    // Check cache first
    {
        let cache = get_cache().read().await;
        if let Some(value) = cache.get(secret_arn) {
            return Ok(value.clone());
        }
    }

    let response = client
        .get_secret_value()
        .secret_id(secret_arn)
        .send()
        .await
        .map_err(|e| Error::Aws(format!("Failed to get secret: {}", e)))?;

    let secret_string = response
        .secret_string()
        .ok_or_else(|| Error::Aws("Secret has no string value".to_string()))?
        .to_string();

    {
        let mut cache = get_cache().write().await;
        cache.insert(secret_arn.to_string(), secret_string.clone());
    }

    Ok(secret_string)
}

/// Extract the API key from a secret string.
///
/// Accepts either the bare key or a JSON object with an `api_key` field.
pub fn parse_api_key(secret: &str) -> Result<String> {
    let trimmed = secret.trim();
    if trimmed.starts_with('{') {
        let parsed: ApiKeySecret = serde_json::from_str(trimmed)
            .map_err(|e| Error::Aws(format!("Failed to parse API key secret: {}", e)))?;
        return Ok(parsed.api_key);
    }
    if trimmed.is_empty() {
        return Err(Error::Config("API key secret is empty".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Resolve the configured Maps API key, fetching it from Secrets Manager when needed.
pub async fn resolve_api_key(config: &Config) -> Result<String> {
    match &config.api_key {
        ApiKeySource::Literal(key) => Ok(key.clone()),
        ApiKeySource::SecretArn(arn) => {
            let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(config.aws_region.clone()))
                .load()
                .await;
            let client = SecretsClient::new(&aws_config);
            let secret = get_secret(&client, arn).await?;
            parse_api_key(&secret)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_key() {
        assert_eq!(parse_api_key("AIzaSyExample\n").unwrap(), "AIzaSyExample");
    }

    #[test]
    fn test_parse_json_key() {
        let json = r#"{"api_key":"AIzaSyExample","owner":"maps-team"}"#;
        assert_eq!(parse_api_key(json).unwrap(), "AIzaSyExample");
    }

    #[test]
    fn test_parse_json_without_key_fails() {
        assert!(matches!(parse_api_key(r#"{"token":"x"}"#), Err(Error::Aws(_))));
    }

    #[test]
    fn test_parse_empty_secret_fails() {
        assert!(matches!(parse_api_key("  "), Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_literal_key_skips_secrets_manager() {
        let config = Config {
            api_key: ApiKeySource::Literal("abc".to_string()),
            base_url: crate::config::DEFAULT_BASE_URL.to_string(),
            aws_region: "us-east-1".to_string(),
        };
        assert_eq!(resolve_api_key(&config).await.unwrap(), "abc");
    }
}
