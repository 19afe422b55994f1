//! cad-core: Core library for mapping county tax-roll spreadsheets onto the CAD tracker schema
//!
//! This library provides functionality to:
//! - Read the header row of a CSV or Excel export
//! - Match column labels against a table of accepted aliases per canonical field
//! - Report unmatched columns and fields with no match
//! - Decide whether the critical fields needed for an upload are present
//! - Load and save custom alias tables as JSON

pub mod aliases;
pub mod analysis;
pub mod error;
pub mod field;
pub mod gate;
pub mod mapper;
pub mod source;

pub use aliases::{AliasTable, FieldAliases};
pub use analysis::{analyze_columns, Analysis, MissingField};
pub use error::{Error, Result};
pub use field::CanonicalField;
pub use gate::{check_readiness, Readiness, CRITICAL_FIELDS};
pub use mapper::{match_columns, FieldMatch, MatchResult};
pub use source::{read_column_labels, read_column_labels_str, SheetFormat};
