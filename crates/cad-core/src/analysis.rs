//! Column analysis report for a single spreadsheet

use crate::aliases::AliasTable;
use crate::field::CanonicalField;
use crate::gate::{check_readiness, Readiness};
use crate::mapper::{match_columns, MatchResult};
use serde::{Deserialize, Serialize};

/// A field that no source column satisfied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingField {
    pub field: CanonicalField,
    /// Aliases that were tried
    pub tried: Vec<String>,
}

/// Everything known about how a spreadsheet's columns line up with the schema
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Where the columns came from (usually a file path)
    pub source: String,
    /// Column labels as read
    pub columns: Vec<String>,
    #[serde(flatten)]
    pub result: MatchResult,
    /// Fields with no match, in table order
    pub missing: Vec<MissingField>,
    pub readiness: Readiness,
}

impl Analysis {
    pub fn is_blocking(&self) -> bool {
        self.readiness.is_blocking()
    }
}

/// Map a set of column labels and classify the outcome
pub fn analyze_columns(source: impl Into<String>, columns: Vec<String>, table: &AliasTable) -> Analysis {
    let result = match_columns(&columns, table);
    let missing = result
        .missing_fields(table)
        .into_iter()
        .map(|entry| MissingField {
            field: entry.field,
            tried: entry.aliases.clone(),
        })
        .collect();
    let readiness = check_readiness(&result);

    Analysis {
        source: source.into(),
        columns,
        result,
        missing,
        readiness,
    }
}
