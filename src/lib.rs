//! # enzyme-export
//!
//! Generates a typed TypeScript table of restriction enzymes from an enzyme
//! catalog.
//!
//! Each upstream entry carries a name, a recognition site, forward and reverse
//! cut offsets and a signed stagger. The exporter drops entries whose cut
//! positions are undefined, derives the overhang (`blunt`, `5'` or `3'`) from
//! the stagger, sorts the records by name and writes them as one exported
//! constant.
//!
//! ## Example
//!
//! ```rust,no_run
//! use enzyme_export::catalog::builder::build_catalog;
//! use enzyme_export::catalog::provider::{CatalogProvider, EmbeddedCatalog};
//! use enzyme_export::codegen::typescript::serialize;
//!
//! let entries = EmbeddedCatalog.entries().unwrap();
//! let records = build_catalog(&entries);
//! let source = serialize(&records).unwrap();
//! std::fs::write("src/enzymes.ts", source).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Enzyme record and overhang types
//! - [`parsing`]: Extraction of records from raw catalog entries
//! - [`catalog`]: Catalog providers and the sorted catalog builder
//! - [`codegen`]: TypeScript module rendering
//! - [`export`]: The end-to-end export pipeline
//! - [`cli`]: Command-line interface implementation

pub mod catalog;
pub mod cli;
pub mod codegen;
pub mod core;
pub mod export;
pub mod parsing;

// Re-export commonly used types for convenience
pub use catalog::builder::{build_catalog, build_catalog_with_report, CatalogBuild};
pub use catalog::provider::{
    CatalogError, CatalogProvider, EmbeddedCatalog, JsonFileCatalog, StaticCatalog,
};
pub use crate::core::enzyme::EnzymeRecord;
pub use crate::core::overhang::{derive_overhang, Overhang};
pub use crate::core::types::OverhangType;
pub use export::{export_catalog, ExportError, ExportSummary};
pub use parsing::raw::{extract_record, RawEntry, SkipReason};
