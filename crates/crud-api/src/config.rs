//! Process configuration, read once from the environment at startup.

use crate::error::AppError;

/// Runtime settings for the API process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// DynamoDB table holding product records.
    pub table_name: String,
    /// Endpoint override for DynamoDB Local.
    pub dynamodb_endpoint: Option<String>,
    /// Listen address when running as a local server.
    pub host: String,
    /// Listen port when running as a local server.
    pub port: u16,
    /// `true` when the Lambda runtime API is available.
    pub lambda: bool,
}

impl ServiceConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `TABLE_NAME` is unset or `PORT` is not a
    /// valid port number.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of an
    /// environment variable if set.
    ///
    /// # Errors
    ///
    /// Same as [`ServiceConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup("TABLE_NAME")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::Config("TABLE_NAME environment variable must be set".into()))?;
        let dynamodb_endpoint = lookup("DYNAMODB_ENDPOINT").filter(|v| !v.is_empty());
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };
        let lambda = lookup("AWS_LAMBDA_RUNTIME_API").is_some();

        Ok(Self {
            table_name,
            dynamodb_endpoint,
            host,
            port,
            lambda,
        })
    }
}
