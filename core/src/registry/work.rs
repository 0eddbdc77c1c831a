//! Crossref work records and metadata extraction
//!
//! Only the fields the verifier reports are modelled. Every field is optional
//! on the wire; missing, null or mistyped metadata resolves to [`UNKNOWN`]
//! instead of failing the decode.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder for metadata the registry did not supply
pub const UNKNOWN: &str = "Unknown";

/// Maximum number of named authors in a formatted author list
pub const MAX_LISTED_AUTHORS: usize = 3;

/// Envelope returned by `GET /works/{doi}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksResponse {
    /// The work record itself
    pub message: Work,
}

/// A single work record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Work {
    #[serde(default, deserialize_with = "lenient")]
    pub title: Vec<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub container_title: Vec<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub publisher: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub author: Vec<Author>,

    #[serde(default, deserialize_with = "lenient")]
    pub published_print: Option<PartialDate>,

    #[serde(default, deserialize_with = "lenient")]
    pub published_online: Option<PartialDate>,
}

/// A contributor entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, deserialize_with = "lenient")]
    pub given: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub family: Option<String>,
}

/// Crossref partial date, e.g. `{"date-parts": [[2013, 8, 1]]}`.
///
/// `date-parts` is kept as raw JSON because the registry occasionally sends
/// nulls or strings inside it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialDate {
    #[serde(rename = "date-parts", default)]
    pub date_parts: Option<serde_json::Value>,
}

/// Decode a field, falling back to its default when the value is null or has
/// an unexpected shape
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

impl Work {
    /// First title, or "Unknown"
    pub fn title(&self) -> String {
        first_or_unknown(&self.title)
    }

    /// First container title (the journal), or "Unknown"
    pub fn journal(&self) -> String {
        first_or_unknown(&self.container_title)
    }

    pub fn publisher(&self) -> String {
        self.publisher
            .clone()
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    pub fn authors(&self) -> String {
        format_authors(&self.author)
    }

    /// Print publication year, falling back to the online publication date
    pub fn year(&self) -> String {
        let date = self
            .published_print
            .as_ref()
            .filter(|date| date.date_parts.is_some())
            .or(self.published_online.as_ref());

        extract_year(date)
    }
}

fn first_or_unknown(values: &[String]) -> String {
    values
        .first()
        .cloned()
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Format up to three authors as `"Given Family"` joined by `", "`.
///
/// Entries without a family name are skipped. Lists longer than three get a
/// trailing `"et al."`.
pub fn format_authors(authors: &[Author]) -> String {
    if authors.is_empty() {
        return UNKNOWN.to_string();
    }

    let mut names: Vec<String> = authors
        .iter()
        .take(MAX_LISTED_AUTHORS)
        .filter_map(|author| {
            let family = author.family.as_deref().filter(|f| !f.is_empty())?;
            let given = author.given.as_deref().unwrap_or_default();
            Some(format!("{} {}", given, family).trim().to_string())
        })
        .collect();

    if authors.len() > MAX_LISTED_AUTHORS {
        names.push("et al.".to_string());
    }

    if names.is_empty() {
        UNKNOWN.to_string()
    } else {
        names.join(", ")
    }
}

/// Year from the first element of the first `date-parts` entry.
pub fn extract_year(date: Option<&PartialDate>) -> String {
    let year = date
        .and_then(|date| date.date_parts.as_ref())
        .and_then(|parts| parts.get(0))
        .and_then(|first| first.get(0));

    match year {
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
        _ => UNKNOWN.to_string(),
    }
}
