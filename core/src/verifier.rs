//! Citation verification: clean the DOI, look it up once, map the outcome

use crate::config::RegistryConfig;
use crate::doi::{clean_doi, doi_url};
use crate::error::{LookupError, Result};
use crate::registry::{CrossrefClient, Work, WorksClient};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Metadata reported for a DOI the registry knows about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationMetadata {
    pub title: String,
    pub authors: String,
    pub journal: String,
    pub publisher: String,
    pub year: String,
    pub url: String,
}

impl CitationMetadata {
    /// Summarize a work record found under `doi`
    pub fn from_work(work: &Work, doi: &str) -> Self {
        Self {
            title: work.title(),
            authors: work.authors(),
            journal: work.journal(),
            publisher: work.publisher(),
            year: work.year(),
            url: doi_url(doi),
        }
    }
}

/// How a lookup ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Verified(CitationMetadata),
    Unverified(LookupError),
}

/// Result of verifying one DOI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    /// The cleaned identifier
    pub doi: String,
    pub outcome: Outcome,
}

impl VerificationResult {
    pub fn verified<S: Into<String>>(doi: S, metadata: CitationMetadata) -> Self {
        Self {
            doi: doi.into(),
            outcome: Outcome::Verified(metadata),
        }
    }

    pub fn unverified<S: Into<String>>(doi: S, error: LookupError) -> Self {
        Self {
            doi: doi.into(),
            outcome: Outcome::Unverified(error),
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self.outcome, Outcome::Verified(_))
    }

    pub fn metadata(&self) -> Option<&CitationMetadata> {
        match &self.outcome {
            Outcome::Verified(metadata) => Some(metadata),
            Outcome::Unverified(_) => None,
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match &self.outcome {
            Outcome::Verified(_) => None,
            Outcome::Unverified(error) => Some(error),
        }
    }

    /// Flat wire form of this result
    pub fn to_report(&self) -> VerificationReport {
        VerificationReport::from(self)
    }

    /// Two-space indented JSON encoding of the wire form
    pub fn to_json_pretty(&self) -> String {
        // A struct of strings and bools always serializes
        serde_json::to_string_pretty(&self.to_report()).unwrap_or_default()
    }
}

/// Flat key/value encoding of a [`VerificationResult`].
///
/// Always carries `verified` and `doi`, then either the metadata fields or
/// `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub verified: bool,
    pub doi: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&VerificationResult> for VerificationReport {
    fn from(result: &VerificationResult) -> Self {
        let mut report = Self {
            verified: result.is_verified(),
            doi: result.doi.clone(),
            title: None,
            authors: None,
            journal: None,
            publisher: None,
            year: None,
            url: None,
            error: None,
        };

        match &result.outcome {
            Outcome::Verified(metadata) => {
                report.title = Some(metadata.title.clone());
                report.authors = Some(metadata.authors.clone());
                report.journal = Some(metadata.journal.clone());
                report.publisher = Some(metadata.publisher.clone());
                report.year = Some(metadata.year.clone());
                report.url = Some(metadata.url.clone());
            }
            Outcome::Unverified(error) => {
                report.error = Some(error.to_string());
            }
        }

        report
    }
}

/// Verifies DOIs against a bibliographic registry
#[derive(Clone)]
pub struct CitationVerifier {
    client: Arc<dyn WorksClient>,
}

impl CitationVerifier {
    /// Create a verifier for the public Crossref API
    pub fn new() -> Result<Self> {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a Crossref verifier with custom registry settings
    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        Ok(Self::with_client(Arc::new(CrossrefClient::new(config)?)))
    }

    /// Create a verifier backed by any registry client
    pub fn with_client(client: Arc<dyn WorksClient>) -> Self {
        Self { client }
    }

    /// Verify a raw DOI string.
    ///
    /// Never fails: every lookup problem is reported inside the result.
    pub async fn verify_doi(&self, raw: &str) -> VerificationResult {
        let doi = clean_doi(raw);

        match self.client.fetch_work(&doi).await {
            Ok(work) => {
                let metadata = CitationMetadata::from_work(&work, &doi);
                info!(
                    "Verified {} via {}: {}",
                    doi,
                    self.client.registry_name(),
                    metadata.title
                );
                VerificationResult::verified(doi, metadata)
            }
            Err(error) => {
                if error.is_hallucination() {
                    info!("{} not found in {}", doi, self.client.registry_name());
                } else {
                    warn!("Could not verify {}: {}", doi, error);
                }
                VerificationResult::unverified(doi, error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::testing::{serve_once, unreachable_base_url, NATURE_WORK};
    use crate::registry::{Author, WorksResponse};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Registry double that answers every lookup the same way
    struct FixedClient {
        answer: std::result::Result<Work, LookupError>,
        seen: Mutex<Vec<String>>,
    }

    impl FixedClient {
        fn new(answer: std::result::Result<Work, LookupError>) -> Arc<Self> {
            Arc::new(Self {
                answer,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl WorksClient for FixedClient {
        async fn fetch_work(&self, doi: &str) -> std::result::Result<Work, LookupError> {
            self.seen.lock().unwrap().push(doi.to_string());
            self.answer.clone()
        }

        fn registry_name(&self) -> &str {
            "fixed"
        }
    }

    fn nature_work() -> Work {
        serde_json::from_str::<WorksResponse>(NATURE_WORK)
            .unwrap()
            .message
    }

    #[tokio::test]
    async fn test_verified_result_carries_metadata() {
        let client = FixedClient::new(Ok(nature_work()));
        let verifier = CitationVerifier::with_client(client.clone());

        let result = verifier
            .verify_doi(" https://doi.org/10.1038/nature12373 ")
            .await;

        assert!(result.is_verified());
        assert_eq!(result.doi, "10.1038/nature12373");
        assert_eq!(client.seen.lock().unwrap().as_slice(), ["10.1038/nature12373"]);

        let metadata = result.metadata().unwrap();
        assert_eq!(metadata.title, "Nanometre-scale thermometry in a living cell");
        assert_eq!(metadata.journal, "Nature");
        assert_eq!(metadata.authors, "G. Kucsko, P. C. Maurer, N. Y. Yao, et al.");
        assert_eq!(metadata.year, "2013");
        assert_eq!(metadata.url, "https://doi.org/10.1038/nature12373");
    }

    #[tokio::test]
    async fn test_not_found_is_flagged_as_hallucinated() {
        let verifier = CitationVerifier::with_client(FixedClient::new(Err(LookupError::NotFound)));

        let result = verifier.verify_doi("10.1234/fake.doi.2024").await;

        assert!(!result.is_verified());
        assert_eq!(result.doi, "10.1234/fake.doi.2024");
        assert!(result
            .error()
            .unwrap()
            .to_string()
            .to_lowercase()
            .contains("hallucinated"));
    }

    #[tokio::test]
    async fn test_sparse_work_defaults_to_unknown() {
        let work = Work {
            author: vec![Author {
                given: Some("Only".to_string()),
                family: None,
            }],
            ..Default::default()
        };
        let verifier = CitationVerifier::with_client(FixedClient::new(Ok(work)));

        let report = verifier.verify_doi("10.1000/182").await.to_report();

        assert!(report.verified);
        assert_eq!(report.title.as_deref(), Some("Unknown"));
        assert_eq!(report.authors.as_deref(), Some("Unknown"));
        assert_eq!(report.journal.as_deref(), Some("Unknown"));
        assert_eq!(report.publisher.as_deref(), Some("Unknown"));
        assert_eq!(report.year.as_deref(), Some("Unknown"));
        assert!(report.error.is_none());
    }

    #[test]
    fn test_success_json_shape() {
        let result = VerificationResult::verified(
            "10.1038/nature12373",
            CitationMetadata::from_work(&nature_work(), "10.1038/nature12373"),
        );
        let json = result.to_json_pretty();

        assert!(json.starts_with("{\n  \"verified\": true,\n  \"doi\": \"10.1038/nature12373\""));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["authors", "doi", "journal", "publisher", "title", "url", "verified", "year"]
        );
    }

    #[test]
    fn test_failure_json_shape() {
        let result =
            VerificationResult::unverified("10.1000/182", LookupError::Upstream { status: 500 });
        let report: VerificationReport = serde_json::from_str(&result.to_json_pretty()).unwrap();

        assert!(!report.verified);
        assert_eq!(report.doi, "10.1000/182");
        assert_eq!(report.error.as_deref(), Some("HTTP 500: Unable to verify"));
        assert!(report.title.is_none());
        assert!(report.url.is_none());
        assert_eq!(report, result.to_report());
    }

    #[tokio::test]
    async fn test_verify_over_http() {
        let stub = serve_once("200 OK", NATURE_WORK).await;
        let verifier =
            CitationVerifier::with_config(RegistryConfig::default().with_base_url(stub.base_url))
                .unwrap();

        let result = verifier.verify_doi("http://dx.doi.org/10.1038/nature12373").await;
        assert!(result.is_verified());
        assert_eq!(result.doi, "10.1038/nature12373");
    }

    #[tokio::test]
    async fn test_network_failure_is_absorbed() {
        let verifier = CitationVerifier::with_config(
            RegistryConfig::default().with_base_url(unreachable_base_url().await),
        )
        .unwrap();

        let result = verifier.verify_doi("10.1000/182").await;
        assert!(!result.is_verified());
        assert!(result.to_report().error.unwrap().starts_with("Network error: "));
    }

    #[tokio::test]
    async fn test_malformed_doi_is_looked_up_verbatim() {
        let stub = serve_once("404 Not Found", r#""Resource not found.""#).await;
        let verifier =
            CitationVerifier::with_config(RegistryConfig::default().with_base_url(stub.base_url))
                .unwrap();

        let result = verifier.verify_doi(" 10.///invalid///doi ").await;

        assert_eq!(result.doi, "10.///invalid///doi");
        assert_eq!(result.error(), Some(&LookupError::NotFound));
        let request = stub.request.await.unwrap();
        assert!(request.starts_with("GET /works/10.///invalid///doi HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_null_metadata_over_http_still_verifies() {
        let stub = serve_once(
            "200 OK",
            r#"{"status":"ok","message":{"title":null,"container-title":null,"author":null,"publisher":"ACM"}}"#,
        )
        .await;
        let verifier =
            CitationVerifier::with_config(RegistryConfig::default().with_base_url(stub.base_url))
                .unwrap();

        let report = verifier.verify_doi("10.1145/3313831").await.to_report();

        assert!(report.verified, "unexpected error: {:?}", report.error);
        assert_eq!(report.title.as_deref(), Some("Unknown"));
        assert_eq!(report.journal.as_deref(), Some("Unknown"));
        assert_eq!(report.authors.as_deref(), Some("Unknown"));
        assert_eq!(report.publisher.as_deref(), Some("ACM"));
    }

    #[tokio::test]
    #[ignore = "queries the live Crossref API"]
    async fn test_live_known_doi() {
        let verifier = CitationVerifier::new().unwrap();
        let result = verifier.verify_doi("10.1038/nature12373").await;

        let metadata = result.metadata().expect("known DOI should verify");
        assert!(!metadata.title.is_empty());
        assert_eq!(metadata.journal, "Nature");
        assert_ne!(metadata.authors, "Unknown");
        assert_eq!(metadata.year.len(), 4);
        assert!(metadata.year.parse::<u32>().unwrap() > 2000);
    }

    #[tokio::test]
    #[ignore = "queries the live Crossref API"]
    async fn test_live_fabricated_doi() {
        let verifier = CitationVerifier::new().unwrap();
        let result = verifier.verify_doi("10.1234/fake.doi.2024").await;

        assert!(!result.is_verified());
        assert!(result.error().unwrap().to_string().contains("hallucinated"));
    }
}
