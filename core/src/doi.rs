//! DOI normalization

/// Resolver prefix most citations carry
pub const DOI_ORG_PREFIX: &str = "https://doi.org/";

/// Legacy resolver prefix
pub const DX_DOI_ORG_PREFIX: &str = "http://dx.doi.org/";

/// Reduce a raw DOI string to the bare identifier.
///
/// Surrounding whitespace is trimmed, then `https://doi.org/` and
/// `http://dx.doi.org/` are each stripped once, in that order. Matching is
/// case-sensitive.
pub fn clean_doi(raw: &str) -> String {
    let mut doi = raw.trim();

    for prefix in [DOI_ORG_PREFIX, DX_DOI_ORG_PREFIX] {
        if let Some(rest) = doi.strip_prefix(prefix) {
            doi = rest;
        }
    }

    doi.trim().to_string()
}

/// Canonical resolver URL for a cleaned DOI
pub fn doi_url(doi: &str) -> String {
    format!("{}{}", DOI_ORG_PREFIX, doi)
}
