use serde::{Deserialize, Serialize};

use crate::core::types::OverhangType;

/// Length and strand side of the overhang produced by a staggered cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overhang {
    pub length: u64,
    pub kind: OverhangType,
}

/// Derive the overhang from the raw signed stagger.
///
/// Zero is blunt, a negative stagger is a 5' overhang and a positive stagger
/// is a 3' overhang. The length is always the magnitude of the stagger.
///
/// # Examples
///
/// ```
/// use enzyme_export::core::overhang::derive_overhang;
/// use enzyme_export::core::types::OverhangType;
///
/// let ecori = derive_overhang(-4);
/// assert_eq!(ecori.length, 4);
/// assert_eq!(ecori.kind, OverhangType::FivePrime);
/// ```
#[must_use]
pub fn derive_overhang(raw_stagger: i64) -> Overhang {
    let kind = match raw_stagger.signum() {
        0 => OverhangType::Blunt,
        -1 => OverhangType::FivePrime,
        _ => OverhangType::ThreePrime,
    };

    Overhang {
        length: raw_stagger.unsigned_abs(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blunt() {
        let overhang = derive_overhang(0);
        assert_eq!(overhang.length, 0);
        assert_eq!(overhang.kind, OverhangType::Blunt);
    }

    #[test]
    fn test_negative_is_five_prime() {
        for stagger in [-1i64, -2, -4, -17] {
            let overhang = derive_overhang(stagger);
            assert_eq!(overhang.kind, OverhangType::FivePrime);
            assert_eq!(overhang.length, stagger.unsigned_abs());
        }
    }

    #[test]
    fn test_positive_is_three_prime() {
        for stagger in [1i64, 2, 4, 17] {
            let overhang = derive_overhang(stagger);
            assert_eq!(overhang.kind, OverhangType::ThreePrime);
            assert_eq!(overhang.length, stagger as u64);
        }
    }

    #[test]
    fn test_extreme_values() {
        let overhang = derive_overhang(i64::MIN);
        assert_eq!(overhang.kind, OverhangType::FivePrime);
        assert_eq!(overhang.length, 1u64 << 63);

        let overhang = derive_overhang(i64::MAX);
        assert_eq!(overhang.kind, OverhangType::ThreePrime);
        assert_eq!(overhang.length, i64::MAX as u64);
    }
}
