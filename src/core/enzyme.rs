use serde::{Deserialize, Serialize};

use crate::core::overhang::Overhang;
use crate::core::types::OverhangType;

/// A restriction enzyme as emitted in the generated module.
///
/// Field order here is the field order of the serialized JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnzymeRecord {
    /// Enzyme name (e.g. `EcoRI`)
    pub name: String,

    /// Recognition sequence
    pub site: String,

    /// Cut offset on the forward strand
    pub forward_cut: i64,

    /// Cut offset on the reverse strand
    pub reverse_cut: i64,

    /// Magnitude of the strand stagger
    pub overhang_length: u64,

    pub overhang_type: OverhangType,

    /// Supplier codes, in upstream order
    pub suppliers: Vec<String>,
}

impl EnzymeRecord {
    pub fn new(
        name: impl Into<String>,
        site: impl Into<String>,
        forward_cut: i64,
        reverse_cut: i64,
        overhang: Overhang,
    ) -> Self {
        Self {
            name: name.into(),
            site: site.into(),
            forward_cut,
            reverse_cut,
            overhang_length: overhang.length,
            overhang_type: overhang.kind,
            suppliers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_suppliers(mut self, suppliers: Vec<String>) -> Self {
        self.suppliers = suppliers;
        self
    }

    pub fn is_blunt(&self) -> bool {
        self.overhang_type == OverhangType::Blunt
    }
}
