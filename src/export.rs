//! The export pipeline: fetch entries, build the catalog, render, write.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::catalog::builder::build_catalog_with_report;
use crate::catalog::provider::{CatalogError, CatalogProvider};
use crate::codegen::typescript::TypeScriptModule;

/// Default destination, relative to the consuming project's root
pub const DEFAULT_OUTPUT: &str = "src/enzymes.ts";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Failed to encode enzyme records: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What a completed export produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub emitted: usize,
    pub skipped: usize,
}

/// Render the catalog from `provider` and overwrite `output` with it.
///
/// # Errors
///
/// Returns `ExportError::Catalog` if the provider cannot be read,
/// `ExportError::Serialize` if encoding fails, or `ExportError::Write` if the
/// destination cannot be written. Unusable entries are skipped, not errors.
pub fn export_catalog(
    provider: &dyn CatalogProvider,
    module: &TypeScriptModule,
    output: &Path,
) -> Result<ExportSummary, ExportError> {
    let entries = provider.entries()?;
    let build = build_catalog_with_report(&entries);

    info!(
        "Built {} enzymes from {} entries ({} skipped, {} with undefined cut positions)",
        build.records.len(),
        entries.len(),
        build.skipped.len(),
        build.undefined_cut_count()
    );

    let source = module.render(&build.records)?;
    std::fs::write(output, source).map_err(|source| ExportError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(ExportSummary {
        path: output.to_path_buf(),
        emitted: build.records.len(),
        skipped: build.skipped.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::provider::StaticCatalog;
    use crate::parsing::raw::RawEntry;
    use serde_json::json;

    fn provider() -> StaticCatalog {
        StaticCatalog::new(
            "test catalog",
            vec![
                RawEntry::new(json!({"name": "PstI", "site": "CTGCAG", "fst5": 5, "fst3": -5, "ovhg": 4, "suppl": []})),
                RawEntry::new(json!({"name": "AbaSI", "site": "C", "fst5": null, "fst3": null, "ovhg": null})),
                RawEntry::new(json!({"name": "EcoRI", "site": "GAATTC", "fst5": 1, "fst3": -1, "ovhg": -4, "suppl": ["N", "R"]})),
            ],
        )
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("enzymes.ts");
        let module = TypeScriptModule::default().with_source("test catalog");

        let summary = export_catalog(&provider(), &module, &output).unwrap();
        assert_eq!(summary.emitted, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.path, output);

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.starts_with("// Auto-generated from test catalog - DO NOT EDIT\n"));
        let ecori = content.find("\"EcoRI\"").unwrap();
        let psti = content.find("\"PstI\"").unwrap();
        assert!(ecori < psti);
        assert!(!content.contains("AbaSI"));
    }

    #[test]
    fn test_export_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("enzymes.ts");
        let module = TypeScriptModule::default();

        export_catalog(&provider(), &module, &output).unwrap();
        let first = std::fs::read(&output).unwrap();
        export_catalog(&provider(), &module, &output).unwrap();
        let second = std::fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("enzymes.ts");
        std::fs::write(&output, "stale content that is much longer than nothing").unwrap();

        let empty = StaticCatalog::new("empty", Vec::new());
        export_catalog(&empty, &TypeScriptModule::default(), &output).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.ends_with("[];\n"));
    }

    #[test]
    fn test_export_missing_directory_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing").join("enzymes.ts");

        let result = export_catalog(&provider(), &TypeScriptModule::default(), &output);
        assert!(matches!(result, Err(ExportError::Write { .. })));
    }
}
