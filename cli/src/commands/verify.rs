//! DOI verification command

use anyhow::Result;
use cite_verify_core::{CitationVerifier, RegistryConfig, VerificationReport};
use tracing::info;

/// Verify each DOI and print the reports.
///
/// A single DOI prints one JSON object; several print a JSON array.
/// Returns the number of DOIs that could not be verified.
pub async fn verify_command(config: RegistryConfig, dois: Vec<String>, summary: bool) -> Result<usize> {
    info!("Verifying {} citation(s) against {}", dois.len(), config.base_url);

    let verifier = CitationVerifier::with_config(config)?;

    let mut reports: Vec<VerificationReport> = Vec::with_capacity(dois.len());
    for doi in &dois {
        reports.push(verifier.verify_doi(doi).await.to_report());
    }

    let unverified = reports.iter().filter(|report| !report.verified).count();

    if let [report] = reports.as_slice() {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    if summary {
        eprintln!("{}", summary_line(unverified, reports.len()));
    }

    Ok(unverified)
}

/// One-line hallucination rate summary
fn summary_line(unverified: usize, total: usize) -> String {
    let rate = if total == 0 {
        0.0
    } else {
        unverified as f64 * 100.0 / total as f64
    };

    format!(
        "Detected {}/{} unverified citations ({:.1}% hallucination rate)",
        unverified, total, rate
    )
}
