//! Bibliographic registry access

pub mod client;
pub mod work;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{CrossrefClient, WorksClient};
pub use work::{format_authors, extract_year, Author, PartialDate, Work, WorksResponse, UNKNOWN};
