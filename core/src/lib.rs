//! # cite-verify Core
//!
//! Core library for cite-verify - a citation checker for LLM-generated text.
//!
//! A DOI is cleaned, looked up once against the Crossref registry, and the
//! response is mapped to a [`VerificationResult`]. The [`tools`] module exposes
//! the lookup as the `verify_citation` tool so an agent host can call it.

pub mod config;
pub mod doi;
pub mod error;
pub mod registry;
pub mod tools;
pub mod verifier;

// Re-export commonly used types
pub use config::RegistryConfig;
pub use error::{Error, LookupError, Result};
pub use registry::{CrossrefClient, WorksClient};
pub use tools::verify_citation;
pub use verifier::{CitationMetadata, CitationVerifier, Outcome, VerificationReport, VerificationResult};

/// Current version of the cite-verify-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
