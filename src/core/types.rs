use serde::{Deserialize, Serialize};

/// Strand side of the single-stranded extension left by a cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverhangType {
    /// Both strands cut at the same position
    #[serde(rename = "blunt")]
    Blunt,
    /// Top strand cut before the bottom strand (e.g. `EcoRI`)
    #[serde(rename = "5'")]
    FivePrime,
    /// Bottom strand cut before the top strand (e.g. `PstI`)
    #[serde(rename = "3'")]
    ThreePrime,
}

impl OverhangType {
    /// Label used in the generated module
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blunt => "blunt",
            Self::FivePrime => "5'",
            Self::ThreePrime => "3'",
        }
    }
}

impl std::fmt::Display for OverhangType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_labels() {
        assert_eq!(
            serde_json::to_string(&OverhangType::Blunt).unwrap(),
            "\"blunt\""
        );
        assert_eq!(
            serde_json::to_string(&OverhangType::FivePrime).unwrap(),
            "\"5'\""
        );
        assert_eq!(
            serde_json::to_string(&OverhangType::ThreePrime).unwrap(),
            "\"3'\""
        );
    }

    #[test]
    fn test_display_matches_serialized_label() {
        for kind in [
            OverhangType::Blunt,
            OverhangType::FivePrime,
            OverhangType::ThreePrime,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }

    #[test]
    fn test_deserialize_label() {
        let kind: OverhangType = serde_json::from_str("\"5'\"").unwrap();
        assert_eq!(kind, OverhangType::FivePrime);
    }
}
