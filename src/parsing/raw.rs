//! Extraction of enzyme records from raw upstream catalog entries.
//!
//! Raw entries keep the attribute names of the upstream restriction library:
//!
//! | Attribute | Meaning                      | Required |
//! |-----------|------------------------------|----------|
//! | `name`    | Enzyme name                  | Yes      |
//! | `site`    | Recognition sequence         | Yes      |
//! | `fst5`    | Forward strand cut offset    | Yes, may be null |
//! | `fst3`    | Reverse strand cut offset    | Yes, may be null |
//! | `ovhg`    | Signed stagger               | Yes      |
//! | `suppl`   | Supplier codes               | No       |
//!
//! An entry that does not fit this shape is skipped, never fatal.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::enzyme::EnzymeRecord;
use crate::core::overhang::derive_overhang;

pub const NAME: &str = "name";
pub const SITE: &str = "site";
pub const FORWARD_CUT: &str = "fst5";
pub const REVERSE_CUT: &str = "fst3";
pub const STAGGER: &str = "ovhg";
pub const SUPPLIERS: &str = "suppl";

/// Why a raw entry was left out of the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("entry is not an object")]
    NotAnObject,

    #[error("missing attribute '{0}'")]
    MissingAttribute(&'static str),

    #[error("attribute '{field}' is not {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("cut position '{0}' is undefined")]
    UndefinedCut(&'static str),
}

/// One entry as exposed by the upstream catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawEntry(pub Value);

impl RawEntry {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Enzyme name, when the entry carries one
    pub fn name(&self) -> Option<&str> {
        self.0.get(NAME).and_then(Value::as_str)
    }
}

impl From<Value> for RawEntry {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Check that both cut positions are present and non-null.
///
/// # Errors
///
/// Returns `SkipReason::UndefinedCut` for a null cut position,
/// `SkipReason::MissingAttribute` when the attribute is absent, or
/// `SkipReason::NotAnObject` for non-object entries.
pub fn check_cut_positions(entry: &RawEntry) -> Result<(), SkipReason> {
    let fields = as_fields(entry)?;
    for key in [FORWARD_CUT, REVERSE_CUT] {
        match fields.get(key) {
            None => return Err(SkipReason::MissingAttribute(key)),
            Some(Value::Null) => return Err(SkipReason::UndefinedCut(key)),
            Some(_) => {}
        }
    }
    Ok(())
}

/// Map a raw entry onto an `EnzymeRecord`.
///
/// Missing or null supplier data becomes an empty list. A supplier field given
/// as a single string is read as one code per character.
///
/// # Errors
///
/// Returns a `SkipReason` when a required attribute is absent, null, or of an
/// unexpected type.
pub fn extract_record(entry: &RawEntry) -> Result<EnzymeRecord, SkipReason> {
    let fields = as_fields(entry)?;

    let name = required_str(fields, NAME)?;
    let site = required_str(fields, SITE)?;
    let forward_cut = cut_position(fields, FORWARD_CUT)?;
    let reverse_cut = cut_position(fields, REVERSE_CUT)?;
    let stagger = required_int(fields, STAGGER)?;
    let suppliers = supplier_codes(fields)?;

    let overhang = derive_overhang(stagger);
    Ok(EnzymeRecord::new(name, site, forward_cut, reverse_cut, overhang).with_suppliers(suppliers))
}

fn as_fields(entry: &RawEntry) -> Result<&Map<String, Value>, SkipReason> {
    entry.0.as_object().ok_or(SkipReason::NotAnObject)
}

fn required_str<'a>(
    fields: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a str, SkipReason> {
    match fields.get(key) {
        None => Err(SkipReason::MissingAttribute(key)),
        Some(value) => value.as_str().ok_or(SkipReason::InvalidType {
            field: key,
            expected: "a string",
        }),
    }
}

fn required_int(fields: &Map<String, Value>, key: &'static str) -> Result<i64, SkipReason> {
    match fields.get(key) {
        None => Err(SkipReason::MissingAttribute(key)),
        Some(value) => value.as_i64().ok_or(SkipReason::InvalidType {
            field: key,
            expected: "an integer",
        }),
    }
}

fn cut_position(fields: &Map<String, Value>, key: &'static str) -> Result<i64, SkipReason> {
    if matches!(fields.get(key), Some(Value::Null)) {
        return Err(SkipReason::UndefinedCut(key));
    }
    required_int(fields, key)
}

fn supplier_codes(fields: &Map<String, Value>) -> Result<Vec<String>, SkipReason> {
    let invalid = SkipReason::InvalidType {
        field: SUPPLIERS,
        expected: "a list of supplier codes",
    };

    match fields.get(SUPPLIERS) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(codes)) => Ok(codes.chars().map(String::from).collect()),
        Some(Value::Array(codes)) => codes
            .iter()
            .map(|code| code.as_str().map(str::to_string).ok_or_else(|| invalid.clone()))
            .collect(),
        Some(_) => Err(invalid),
    }
}
