//! Column mapper: matches source column labels against the alias table

use crate::aliases::{AliasTable, FieldAliases};
use crate::field::CanonicalField;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A canonical field and the source column that satisfied it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMatch {
    pub field: CanonicalField,
    /// Source label, verbatim
    pub column: String,
}

/// Outcome of matching one set of source columns
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Matched fields, in alias-table order
    pub mapped: Vec<FieldMatch>,
    /// Source columns no field claimed, in source order
    pub unmatched: Vec<String>,
}

impl MatchResult {
    /// The source column mapped to a field, if any
    pub fn get(&self, field: CanonicalField) -> Option<&str> {
        self.mapped
            .iter()
            .find(|m| m.field == field)
            .map(|m| m.column.as_str())
    }

    /// Check whether a field was mapped
    pub fn contains(&self, field: CanonicalField) -> bool {
        self.get(field).is_some()
    }

    /// Table entries that found no source column, in table order
    pub fn missing_fields<'a>(&self, table: &'a AliasTable) -> Vec<&'a FieldAliases> {
        table
            .entries()
            .iter()
            .filter(|entry| !self.contains(entry.field))
            .collect()
    }
}

/// Match source column labels to canonical fields
///
/// Fields are tried in table order. Each field takes the first source
/// column, in source order, whose label is one of its aliases and which no
/// earlier field has claimed. Claims are tracked by position, so every
/// source column ends up either mapped or unmatched exactly once, even with
/// duplicate labels.
pub fn match_columns<S: AsRef<str>>(source: &[S], table: &AliasTable) -> MatchResult {
    let mut claimed = vec![false; source.len()];
    let mut mapped = Vec::new();

    for entry in table.entries() {
        let hit = source
            .iter()
            .map(AsRef::<str>::as_ref)
            .enumerate()
            .find(|&(idx, label)| !claimed[idx] && entry.accepts(label));

        match hit {
            Some((idx, label)) => {
                claimed[idx] = true;
                debug!(field = %entry.field, column = label, "mapped");
                mapped.push(FieldMatch {
                    field: entry.field,
                    column: label.to_string(),
                });
            }
            None => debug!(field = %entry.field, "no matching column"),
        }
    }

    let unmatched = source
        .iter()
        .zip(claimed)
        .filter(|(_, taken)| !taken)
        .map(|(label, _)| label.as_ref().to_string())
        .collect();

    MatchResult { mapped, unmatched }
}
