//! SDK client construction.

use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use tracing::info;

/// Loads the default AWS configuration (environment, profile, or Lambda
/// role credentials) and builds a DynamoDB client.
///
/// `endpoint_url` overrides the service endpoint, e.g. for DynamoDB Local.
pub async fn build_client(endpoint_url: Option<&str>) -> Client {
    let shared = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let mut builder = aws_sdk_dynamodb::config::Builder::from(&shared);
    if let Some(url) = endpoint_url {
        info!(endpoint_url = url, "using custom DynamoDB endpoint");
        builder = builder.endpoint_url(url);
    }
    Client::from_conf(builder.build())
}
