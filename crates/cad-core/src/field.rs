//! Canonical fields of the CAD tracker property schema

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A target column in the property table
///
/// Declaration order is the order fields are matched and reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CanonicalField {
    AccountNumber,
    OwnerName,
    PropertyAddress,
    MailingAddress,
    TotalDue,
    PercentageDue,
    Status,
    TaxYear,
    LegalDescription,
}

impl CanonicalField {
    /// Every field, in declaration order
    pub const ALL: [CanonicalField; 9] = [
        CanonicalField::AccountNumber,
        CanonicalField::OwnerName,
        CanonicalField::PropertyAddress,
        CanonicalField::MailingAddress,
        CanonicalField::TotalDue,
        CanonicalField::PercentageDue,
        CanonicalField::Status,
        CanonicalField::TaxYear,
        CanonicalField::LegalDescription,
    ];

    /// The schema identifier (e.g. "accountNumber")
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::AccountNumber => "accountNumber",
            CanonicalField::OwnerName => "ownerName",
            CanonicalField::PropertyAddress => "propertyAddress",
            CanonicalField::MailingAddress => "mailingAddress",
            CanonicalField::TotalDue => "totalDue",
            CanonicalField::PercentageDue => "percentageDue",
            CanonicalField::Status => "status",
            CanonicalField::TaxYear => "taxYear",
            CanonicalField::LegalDescription => "legalDescription",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad so `{:20}` lines up in reports
        f.pad(self.as_str())
    }
}

impl FromStr for CanonicalField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_round_trip() {
        for field in CanonicalField::ALL {
            assert_eq!(field.as_str().parse::<CanonicalField>().unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_identifier() {
        let err = "AccountNumber".parse::<CanonicalField>().unwrap_err();
        assert!(matches!(err, Error::UnknownField(ref s) if s == "AccountNumber"));
    }

    #[test]
    fn test_serde_uses_schema_identifier() {
        let json = serde_json::to_string(&CanonicalField::LegalDescription).unwrap();
        assert_eq!(json, "\"legalDescription\"");

        let field: CanonicalField = serde_json::from_str("\"taxYear\"").unwrap();
        assert_eq!(field, CanonicalField::TaxYear);
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:<10}|", CanonicalField::Status), "status    |");
    }
}
