//! Minimal configuration module for cite-verify core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{RegistryConfig, CROSSREF_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
