//! Command-line interface for enzyme-export.
//!
//! Running with no arguments regenerates `src/enzymes.ts` in the current
//! directory from the embedded sample catalog. Pass `--catalog` with a full
//! dump of the upstream library for a complete table.
//!
//! ## Usage
//!
//! ```text
//! # Regenerate from the embedded sample
//! enzyme-export
//!
//! # Use a different catalog dump and destination
//! enzyme-export --catalog enzymes.json --output web/src/enzymes.ts
//!
//! # Log every skipped entry
//! enzyme-export --verbose
//! ```

use clap::Parser;

pub mod export;

#[derive(Parser)]
#[command(name = "enzyme-export")]
#[command(version)]
#[command(about = "Generate a TypeScript restriction enzyme table from an enzyme catalog")]
#[command(
    long_about = "enzyme-export reads every entry of a restriction enzyme catalog, drops enzymes without defined cut positions, derives overhang length and type, sorts by name, and writes the result as a typed TypeScript constant."
)]
pub struct Cli {
    #[command(flatten)]
    pub export: export::ExportArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
