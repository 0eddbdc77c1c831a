//! Citation verification tool

use crate::config::RegistryConfig;
use crate::doi::clean_doi;
use crate::error::{LookupError, Result};
use crate::tools::{Tool, ToolCall, ToolExample, ToolFactory, ToolResult};
use crate::verifier::{CitationVerifier, VerificationResult};
use async_trait::async_trait;
use serde_json::json;

/// Name agents use to call the tool
pub const VERIFY_CITATION: &str = "verify_citation";

const DESCRIPTION: &str = "Verify a DOI citation against the Crossref database.\n\
     Returns JSON with `verified` and `doi`, plus title, authors, journal, publisher, \
     year and url when the DOI exists, or an `error` explaining why it could not be \
     verified. A DOI that Crossref does not know is likely hallucinated.";

/// Verify `doi` against Crossref and return the indented JSON report.
///
/// Always returns a parseable report; lookup failures are encoded in it.
pub async fn verify_citation(doi: &str) -> String {
    verify_citation_with_config(doi, &RegistryConfig::default()).await
}

/// [`verify_citation`] against a custom registry configuration
pub async fn verify_citation_with_config(doi: &str, config: &RegistryConfig) -> String {
    verify(doi, config).await.to_json_pretty()
}

async fn verify(doi: &str, config: &RegistryConfig) -> VerificationResult {
    match CitationVerifier::with_config(config.clone()) {
        Ok(verifier) => verifier.verify_doi(doi).await,
        Err(e) => {
            tracing::warn!("Could not build registry client: {}", e);
            VerificationResult::unverified(
                clean_doi(doi),
                LookupError::Network {
                    message: e.to_string(),
                },
            )
        }
    }
}

/// Tool wrapper around the citation verifier
pub struct VerifyCitationTool {
    config: RegistryConfig,
}

impl VerifyCitationTool {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self { config }
    }
}

impl Default for VerifyCitationTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for VerifyCitationTool {
    fn name(&self) -> &str {
        VERIFY_CITATION
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "doi": {
                    "type": "string",
                    "description": "The DOI to verify, e.g. \"10.1038/nature12373\". A https://doi.org/ or http://dx.doi.org/ prefix is accepted."
                }
            },
            "required": ["doi"]
        })
    }

    async fn execute(&self, call: ToolCall) -> Result<ToolResult> {
        let doi: String = call.get_parameter("doi")?;

        let result = verify(&doi, &self.config).await;
        let data = serde_json::to_value(result.to_report())?;

        Ok(ToolResult::success(&call.id, result.to_json_pretty()).with_data(data))
    }

    fn examples(&self) -> Vec<ToolExample> {
        vec![
            ToolExample {
                description: "Verify a bare DOI".to_string(),
                parameters: json!({ "doi": "10.1038/nature12373" }),
                expected_result: "JSON report with verified=true and the paper's metadata"
                    .to_string(),
            },
            ToolExample {
                description: "Verify a DOI given as a resolver URL".to_string(),
                parameters: json!({ "doi": "https://doi.org/10.1234/fake.doi.2024" }),
                expected_result: "JSON report with verified=false and an error marking the citation as likely hallucinated"
                    .to_string(),
            },
        ]
    }
}

/// Factory producing [`VerifyCitationTool`]s bound to one registry configuration
pub struct VerifyCitationToolFactory {
    config: RegistryConfig,
}

impl VerifyCitationToolFactory {
    pub fn new(config: RegistryConfig) -> Self {
        Self { config }
    }
}

impl ToolFactory for VerifyCitationToolFactory {
    fn create(&self) -> Box<dyn Tool> {
        Box::new(VerifyCitationTool::with_config(self.config.clone()))
    }

    fn tool_name(&self) -> &str {
        VERIFY_CITATION
    }

    fn tool_description(&self) -> &str {
        DESCRIPTION
    }
}
