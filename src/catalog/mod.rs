//! Enzyme catalog providers and the sorted catalog builder.
//!
//! A [`CatalogProvider`](provider::CatalogProvider) exposes the raw entries of
//! an upstream catalog. A small sample of well-known enzymes is compiled into
//! the binary; a complete dump of the upstream library is read from a JSON
//! file:
//!
//! ```rust,no_run
//! use enzyme_export::catalog::builder::build_catalog;
//! use enzyme_export::catalog::provider::{CatalogProvider, JsonFileCatalog};
//!
//! let catalog = JsonFileCatalog::new("enzymes.json");
//! let records = build_catalog(&catalog.entries().unwrap());
//! println!("{} enzymes", records.len());
//! ```

pub mod builder;
pub mod provider;
