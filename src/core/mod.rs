//! Core data types for the enzyme catalog.
//!
//! - [`EnzymeRecord`](enzyme::EnzymeRecord): one enzyme as emitted in the generated module
//! - [`Overhang`](overhang::Overhang): length and strand side of a staggered cut
//! - [`OverhangType`](types::OverhangType): `blunt`, `5'` or `3'`
//!
//! ## Stagger Convention
//!
//! The upstream catalog stores the stagger as one signed integer:
//!
//! | Stagger | Overhang | Example |
//! |---------|----------|---------|
//! | 0       | blunt    | SmaI    |
//! | < 0     | 5'       | EcoRI   |
//! | > 0     | 3'       | PstI    |

pub mod enzyme;
pub mod overhang;
pub mod types;
