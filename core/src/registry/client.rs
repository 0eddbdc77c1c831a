//! Registry client trait and the Crossref implementation

use crate::config::RegistryConfig;
use crate::error::{LookupError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::error::Error as StdError;
use tracing::{debug, warn};

use super::work::{Work, WorksResponse};

/// Trait for bibliographic registries that can resolve a DOI to a work record
#[async_trait]
pub trait WorksClient: Send + Sync {
    /// Fetch the work record for an already-cleaned DOI
    async fn fetch_work(&self, doi: &str) -> std::result::Result<Work, LookupError>;

    /// Get the registry name
    fn registry_name(&self) -> &str;
}

/// Crossref REST API client
pub struct CrossrefClient {
    client: Client,
    config: RegistryConfig,
}

impl CrossrefClient {
    /// Create a new Crossref client
    pub fn new(config: RegistryConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

#[async_trait]
impl WorksClient for CrossrefClient {
    async fn fetch_work(&self, doi: &str) -> std::result::Result<Work, LookupError> {
        let url = self.config.works_url(doi);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Request for {} failed: {}", url, e);
            network_error(&e)
        })?;

        let status = response.status();
        debug!("Registry answered {} for {}", status, doi);

        match status {
            StatusCode::OK => {}
            StatusCode::NOT_FOUND => return Err(LookupError::NotFound),
            other => {
                return Err(LookupError::Upstream {
                    status: other.as_u16(),
                })
            }
        }

        let body: WorksResponse = response.json().await.map_err(|e| {
            warn!("Could not decode registry response for {}: {}", doi, e);
            network_error(&e)
        })?;

        Ok(body.message)
    }

    fn registry_name(&self) -> &str {
        "crossref"
    }
}

/// Flatten a reqwest error and its sources into one message
fn network_error(error: &reqwest::Error) -> LookupError {
    let mut message = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    LookupError::Network { message }
}
