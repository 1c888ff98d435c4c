//! Rendering of enzyme records as source code for downstream consumers.
//!
//! The only target is a TypeScript module:
//!
//! ```text
//! // Auto-generated from catalog.json - DO NOT EDIT
//! // Regenerate with: enzyme-export
//!
//! import type { RestrictionEnzyme } from "./types.js";
//!
//! export const enzymes: RestrictionEnzyme[] =
//! [
//!   { "name": "AatII", ... }
//! ];
//! ```

pub mod typescript;
