use tracing::debug;

use crate::core::enzyme::EnzymeRecord;
use crate::parsing::raw::{check_cut_positions, extract_record, RawEntry, SkipReason};

/// An upstream entry left out of the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Position in upstream order
    pub index: usize,
    pub name: Option<String>,
    pub reason: SkipReason,
}

/// Result of building a catalog, with the entries that were dropped
#[derive(Debug, Clone, Default)]
pub struct CatalogBuild {
    /// Records sorted by name
    pub records: Vec<EnzymeRecord>,
    pub skipped: Vec<SkippedEntry>,
}

impl CatalogBuild {
    /// Number of entries skipped because a cut position was undefined
    pub fn undefined_cut_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|s| matches!(s.reason, SkipReason::UndefinedCut(_)))
            .count()
    }
}

/// Map a single entry, applying the cut-position filter first
fn build_record(entry: &RawEntry) -> Result<EnzymeRecord, SkipReason> {
    check_cut_positions(entry)?;
    extract_record(entry)
}

/// Build the sorted catalog and report every skipped entry.
///
/// Entries with an undefined cut position or an unusable shape are skipped;
/// no entry aborts the build. The surviving records are sorted by name with
/// a stable sort. Duplicate names are not checked.
pub fn build_catalog_with_report(entries: &[RawEntry]) -> CatalogBuild {
    let mut build = CatalogBuild::default();

    for (index, entry) in entries.iter().enumerate() {
        match build_record(entry) {
            Ok(record) => build.records.push(record),
            Err(reason) => {
                debug!(
                    "Skipping entry {} ({}): {}",
                    index,
                    entry.name().unwrap_or("<unnamed>"),
                    reason
                );
                build.skipped.push(SkippedEntry {
                    index,
                    name: entry.name().map(str::to_string),
                    reason,
                });
            }
        }
    }

    build.records.sort_by(|a, b| a.name.cmp(&b.name));
    build
}

/// Build the sorted catalog, dropping unusable entries
pub fn build_catalog(entries: &[RawEntry]) -> Vec<EnzymeRecord> {
    build_catalog_with_report(entries).records
}
