use crate::catalog::provider::EMBEDDED_SOURCE;
use crate::core::enzyme::EnzymeRecord;

/// Command printed in the banner of the generated module
pub const REGENERATE_COMMAND: &str = "enzyme-export";

/// Layout of the generated TypeScript module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeScriptModule {
    /// Upstream source named in the banner
    pub source: String,
    pub regenerate_command: String,
    /// Record type the constant is annotated with
    pub type_name: String,
    /// Module the record type is imported from
    pub type_import_path: String,
    pub export_name: String,
}

impl Default for TypeScriptModule {
    fn default() -> Self {
        Self {
            source: EMBEDDED_SOURCE.to_string(),
            regenerate_command: REGENERATE_COMMAND.to_string(),
            type_name: "RestrictionEnzyme".to_string(),
            type_import_path: "./types.js".to_string(),
            export_name: "enzymes".to_string(),
        }
    }
}

impl TypeScriptModule {
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Render the module source.
    ///
    /// Control characters in banner text are escaped so each banner stays a
    /// single comment line.
    ///
    /// The records are embedded as a pretty-printed JSON array (2-space
    /// indent). The output ends with exactly one newline.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the records cannot be encoded.
    pub fn render(&self, records: &[EnzymeRecord]) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string_pretty(records)?;

        let lines = [
            format!(
                "// Auto-generated from {} - DO NOT EDIT",
                comment_text(&self.source)
            ),
            format!(
                "// Regenerate with: {}",
                comment_text(&self.regenerate_command)
            ),
            String::new(),
            format!(
                "import type {{ {} }} from \"{}\";",
                self.type_name, self.type_import_path
            ),
            String::new(),
            format!(
                "export const {}: {}[] = ",
                self.export_name, self.type_name
            ),
            format!("{json};"),
        ];

        let mut source = lines.join("\n");
        source.push('\n');
        Ok(source)
    }
}

fn comment_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    escaped
}

/// Render records with the default module layout
///
/// # Errors
///
/// Returns `serde_json::Error` if the records cannot be encoded.
pub fn serialize(records: &[EnzymeRecord]) -> Result<String, serde_json::Error> {
    TypeScriptModule::default().render(records)
}

/// Extract the JSON array embedded in a generated module
pub fn embedded_json(source: &str) -> Option<&str> {
    let start = source.find("= \n")? + 3;
    let end = source.rfind(';')?;
    source.get(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::overhang::derive_overhang;

    fn ecori() -> EnzymeRecord {
        EnzymeRecord::new("EcoRI", "GAATTC", 1, -1, derive_overhang(-4))
            .with_suppliers(vec!["N".to_string(), "R".to_string()])
    }

    #[test]
    fn test_render_exact() {
        let expected = concat!(
            "// Auto-generated from sample catalog (subset of BioPython Bio.Restriction) - DO NOT EDIT\n",
            "// Regenerate with: enzyme-export\n",
            "\n",
            "import type { RestrictionEnzyme } from \"./types.js\";\n",
            "\n",
            "export const enzymes: RestrictionEnzyme[] = \n",
            "[\n",
            "  {\n",
            "    \"name\": \"EcoRI\",\n",
            "    \"site\": \"GAATTC\",\n",
            "    \"forwardCut\": 1,\n",
            "    \"reverseCut\": -1,\n",
            "    \"overhangLength\": 4,\n",
            "    \"overhangType\": \"5'\",\n",
            "    \"suppliers\": [\n",
            "      \"N\",\n",
            "      \"R\"\n",
            "    ]\n",
            "  }\n",
            "];\n",
        );
        assert_eq!(serialize(&[ecori()]).unwrap(), expected);
    }

    #[test]
    fn test_render_empty() {
        let source = serialize(&[]).unwrap();
        assert!(source.ends_with("RestrictionEnzyme[] = \n[];\n"));
    }

    #[test]
    fn test_single_trailing_newline() {
        let source = serialize(&[ecori()]).unwrap();
        assert!(source.ends_with(";\n"));
        assert!(!source.ends_with("\n\n"));
    }

    #[test]
    fn test_empty_suppliers_inline() {
        let smai = EnzymeRecord::new("SmaI", "CCCGGG", 3, -3, derive_overhang(0));
        let source = serialize(&[smai]).unwrap();
        assert!(source.contains("\"overhangType\": \"blunt\",\n    \"suppliers\": []\n"));
    }

    #[test]
    fn test_custom_source_in_banner() {
        let module = TypeScriptModule::default().with_source("catalog.json");
        let source = module.render(&[]).unwrap();
        assert!(source.starts_with("// Auto-generated from catalog.json - DO NOT EDIT\n"));
    }

    #[test]
    fn test_control_characters_in_banner_are_escaped() {
        let module = TypeScriptModule::default().with_source("dumps/split\n};alert(1)//\r\t.json");
        let source = module.render(&[]).unwrap();

        let banner = source.lines().next().unwrap();
        assert_eq!(
            banner,
            "// Auto-generated from dumps/split\\n};alert(1)//\\r\\t.json - DO NOT EDIT"
        );
        assert_eq!(source.lines().nth(1), Some("// Regenerate with: enzyme-export"));
        assert!(source.contains("\nimport type { RestrictionEnzyme }"));
    }

    #[test]
    fn test_embedded_json_round_trip() {
        let records = vec![
            ecori(),
            EnzymeRecord::new("PstI", "CTGCAG", 5, -5, derive_overhang(4)),
        ];
        let source = serialize(&records).unwrap();

        let json = embedded_json(&source).unwrap();
        let parsed: Vec<EnzymeRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, records);
    }
}
