use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::document::Node;
use crate::error::{CheckError, Result};
use crate::validation::validate_query_component;

const DEFAULT_BASE_URL: &str = "https://rest.db.ripe.net";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the RIPE database REST interface.
#[derive(Debug, Clone)]
pub struct RipeClient {
    http: Client,
    base_url: String,
}

impl Default for RipeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RipeClient {
    pub fn new() -> Self {
        Self {
            http: build_http(DEFAULT_TIMEOUT),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http = build_http(timeout);
        self
    }

    /// Point the client at a different endpoint, e.g. the RIPE test database
    /// or a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch one object from the database and return its response document.
    #[instrument(skip(self), fields(source = %source, object_type = %object_type, key = %key))]
    pub async fn fetch(&self, source: &str, object_type: &str, key: &str) -> Result<Node> {
        let source = validate_query_component("source", source)?;
        let object_type = validate_query_component("objecttype", object_type)?;
        let key = validate_query_component("key", key)?;

        let url = format!(
            "{}/{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            source,
            object_type,
            key
        );
        debug!(url = %url, "Querying RIPE database");

        let response = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CheckError::ObjectNotFound(format!(
                "{} {} in source {}",
                object_type, key, source
            )));
        }

        if !response.status().is_success() {
            return Err(CheckError::LookupError(format!(
                "query for {} {} failed with status {}",
                object_type,
                key,
                response.status()
            )));
        }

        let payload: serde_json::Value = response.json().await?;
        Ok(Node::from(payload))
    }
}

fn build_http(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .user_agent("check_ripe_db/0.3 (RIPE REST client)")
        .build()
        .expect("Failed to build HTTP client")
}
