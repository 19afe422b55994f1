//! Alias table: accepted source-column labels for each canonical field
//!
//! Labels are compared by exact string equality. Case variants are listed
//! explicitly rather than normalized.

use crate::error::{Error, Result};
use crate::field::CanonicalField;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Aliases for a single canonical field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldAliases {
    /// The target field
    pub field: CanonicalField,
    /// Accepted source labels, in preference order
    pub aliases: Vec<String>,
}

impl FieldAliases {
    /// Create an entry from string literals
    pub fn new<S: Into<String>>(field: CanonicalField, aliases: impl IntoIterator<Item = S>) -> Self {
        Self {
            field,
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a source label is one of this field's aliases
    pub fn accepts(&self, label: &str) -> bool {
        self.aliases.iter().any(|a| a == label)
    }
}

/// The full alias table, one entry per canonical field
///
/// Entry order is the order fields are matched and reported in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldAliases>", into = "Vec<FieldAliases>")]
pub struct AliasTable {
    entries: Vec<FieldAliases>,
}

impl AliasTable {
    /// Build a table, checking that every field has exactly one non-empty entry
    pub fn from_entries(entries: Vec<FieldAliases>) -> Result<Self> {
        let mut seen: HashSet<CanonicalField> = HashSet::new();

        for entry in &entries {
            if !seen.insert(entry.field) {
                return Err(Error::DuplicateField(entry.field));
            }
            if entry.aliases.is_empty() {
                return Err(Error::EmptyAliases(entry.field));
            }
        }

        if let Some(missing) = CanonicalField::ALL.into_iter().find(|f| !seen.contains(f)) {
            return Err(Error::MissingField(missing));
        }

        let table = Self { entries };
        for (label, fields) in table.overlaps() {
            let names: Vec<&str> = fields.iter().map(|f| f.as_str()).collect();
            warn!(label = %label, fields = ?names, "alias claimed by more than one field");
        }

        Ok(table)
    }

    /// Load a table from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let entries: Vec<FieldAliases> = serde_json::from_str(&content)?;
        let table = Self::from_entries(entries)?;
        info!(path = %path.display(), "loaded alias table");
        Ok(table)
    }

    /// Save the table to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Entries in matching order
    pub fn entries(&self) -> &[FieldAliases] {
        &self.entries
    }

    /// Aliases for a field
    pub fn aliases_for(&self, field: CanonicalField) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.aliases.as_slice())
            .unwrap_or_default()
    }

    /// Labels accepted by more than one field, with the fields that accept them
    pub fn overlaps(&self) -> BTreeMap<&str, Vec<CanonicalField>> {
        let mut claims: BTreeMap<&str, Vec<CanonicalField>> = BTreeMap::new();
        for entry in &self.entries {
            for alias in &entry.aliases {
                let fields = claims.entry(alias.as_str()).or_default();
                if !fields.contains(&entry.field) {
                    fields.push(entry.field);
                }
            }
        }
        claims.retain(|_, fields| fields.len() > 1);
        claims
    }
}

impl Default for AliasTable {
    /// The labels seen in county tax-roll exports so far
    fn default() -> Self {
        use CanonicalField::*;

        Self {
            entries: vec![
                FieldAliases::new(
                    AccountNumber,
                    ["Account Number", "ACCOUNT NUMBER", "Account #", "ACCOUNT #"],
                ),
                FieldAliases::new(OwnerName, ["Owner Name", "OWNER NAME", "Owner", "OWNER"]),
                FieldAliases::new(
                    PropertyAddress,
                    [
                        "Property Address",
                        "PROPERTY ADDRESS",
                        "Address",
                        "ADDRESS",
                        "Property Addr",
                    ],
                ),
                FieldAliases::new(
                    MailingAddress,
                    ["Mailing Address", "MAILING ADDRESS", "Mail Address"],
                ),
                FieldAliases::new(
                    TotalDue,
                    ["Total Due", "TOTAL DUE", "Amount Due", "AMOUNT DUE", "Total Amount"],
                ),
                FieldAliases::new(
                    PercentageDue,
                    ["Percentage Due", "PERCENTAGE DUE", "Percent", "PERCENT", "%"],
                ),
                FieldAliases::new(Status, ["Status", "STATUS"]),
                FieldAliases::new(TaxYear, ["Tax Year", "TAX YEAR", "Year"]),
                FieldAliases::new(
                    LegalDescription,
                    ["Legal Description", "LEGAL DESCRIPTION", "Legal Desc"],
                ),
            ],
        }
    }
}

impl TryFrom<Vec<FieldAliases>> for AliasTable {
    type Error = Error;

    fn try_from(entries: Vec<FieldAliases>) -> Result<Self> {
        Self::from_entries(entries)
    }
}

impl From<AliasTable> for Vec<FieldAliases> {
    fn from(table: AliasTable) -> Self {
        table.entries
    }
}
