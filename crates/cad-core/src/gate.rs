//! Critical-field gate: decides whether a mapping is usable for upload

use crate::field::CanonicalField;
use crate::mapper::MatchResult;
use serde::{Deserialize, Serialize};

/// Fields that must be mapped before rows can be imported
pub const CRITICAL_FIELDS: [CanonicalField; 4] = [
    CanonicalField::AccountNumber,
    CanonicalField::OwnerName,
    CanonicalField::PropertyAddress,
    CanonicalField::TotalDue,
];

/// Whether a mapping can be used as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Readiness {
    /// All critical fields are mapped
    Ready,
    /// Some critical fields are unmapped
    Blocked { missing: Vec<CanonicalField> },
}

impl Readiness {
    pub fn is_blocking(&self) -> bool {
        matches!(self, Readiness::Blocked { .. })
    }

    /// Unmapped critical fields, empty when ready
    pub fn missing(&self) -> &[CanonicalField] {
        match self {
            Readiness::Ready => &[],
            Readiness::Blocked { missing } => missing,
        }
    }
}

/// Check a match result against the critical fields
pub fn check_readiness(result: &MatchResult) -> Readiness {
    let missing: Vec<CanonicalField> = CRITICAL_FIELDS
        .into_iter()
        .filter(|field| !result.contains(*field))
        .collect();

    if missing.is_empty() {
        Readiness::Ready
    } else {
        Readiness::Blocked { missing }
    }
}
