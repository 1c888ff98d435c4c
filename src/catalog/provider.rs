use std::path::PathBuf;

use thiserror::Error;

use crate::parsing::raw::RawEntry;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    InvalidShape(String),
}

/// Label of the embedded sample, a small subset of the upstream restriction library
pub const EMBEDDED_SOURCE: &str = "sample catalog (subset of BioPython Bio.Restriction)";

/// Read-only source of raw enzyme entries
pub trait CatalogProvider {
    /// Human-readable name of the upstream data source
    fn source(&self) -> &str;

    /// All raw entries, in upstream order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` when the catalog cannot be read at all.
    fn entries(&self) -> Result<Vec<RawEntry>, CatalogError>;
}

/// Parse a JSON array of raw entries
///
/// # Errors
///
/// Returns `CatalogError::ParseError` for invalid JSON, or
/// `CatalogError::InvalidShape` if the root is not an array.
pub fn parse_entries(json: &str) -> Result<Vec<RawEntry>, CatalogError> {
    let root: serde_json::Value = serde_json::from_str(json)?;
    match root {
        serde_json::Value::Array(values) => Ok(values.into_iter().map(RawEntry::new).collect()),
        other => Err(CatalogError::InvalidShape(format!(
            "expected an array of enzyme entries, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Sample of well-known enzymes compiled into the binary.
///
/// This is not a complete dump of the upstream library; pass a full dump with
/// `JsonFileCatalog` to generate a complete table.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    // Embedded at compile time; validated by build.rs
    const JSON: &'static str = include_str!("../../catalogs/restriction_enzymes.json");
}

impl CatalogProvider for EmbeddedCatalog {
    fn source(&self) -> &str {
        EMBEDDED_SOURCE
    }

    fn entries(&self) -> Result<Vec<RawEntry>, CatalogError> {
        parse_entries(Self::JSON)
    }
}

/// Catalog read from a JSON file at run time
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
    source: String,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let source = path.display().to_string();
        Self { path, source }
    }
}

impl CatalogProvider for JsonFileCatalog {
    fn source(&self) -> &str {
        &self.source
    }

    fn entries(&self) -> Result<Vec<RawEntry>, CatalogError> {
        let content = std::fs::read_to_string(&self.path)?;
        parse_entries(&content)
    }
}

/// Catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    source: String,
    entries: Vec<RawEntry>,
}

impl StaticCatalog {
    pub fn new(source: impl Into<String>, entries: Vec<RawEntry>) -> Self {
        Self {
            source: source.into(),
            entries,
        }
    }
}

impl CatalogProvider for StaticCatalog {
    fn source(&self) -> &str {
        &self.source
    }

    fn entries(&self) -> Result<Vec<RawEntry>, CatalogError> {
        Ok(self.entries.clone())
    }
}
