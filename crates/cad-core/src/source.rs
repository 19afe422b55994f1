//! Header extraction from county spreadsheet exports
//!
//! Only the first row is read; row data is never loaded.

use crate::error::{Error, Result};
use calamine::{open_workbook_auto, Reader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Spreadsheet formats we can pull a header from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Csv,
    /// Anything calamine opens: xlsx, xlsm, xls, ods
    Workbook,
}

impl SheetFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(SheetFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "ods" => Some(SheetFormat::Workbook),
            _ => None,
        }
    }
}

/// Read the column labels from a spreadsheet's header row
pub fn read_column_labels<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let format =
        SheetFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat(path.to_path_buf()))?;

    let labels = match format {
        SheetFormat::Csv => read_csv_header(path)?,
        SheetFormat::Workbook => read_workbook_header(path)?,
    };

    info!(path = %path.display(), columns = labels.len(), "read header");
    Ok(labels)
}

/// Read column labels from CSV content (useful for testing)
pub fn read_column_labels_str(content: &str, source_name: &str) -> Result<Vec<String>> {
    let path = Path::new(source_name);
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = csv_reader.headers().map_err(|e| Error::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;

    labels_or_no_header(headers.iter().map(str::to_string).collect(), path)
}

fn read_csv_header(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| Error::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = csv_reader.headers().map_err(|e| Error::Csv {
        path: path.to_path_buf(),
        source: e,
    })?;

    labels_or_no_header(headers.iter().map(str::to_string).collect(), path)
}

fn read_workbook_header(path: &Path) -> Result<Vec<String>> {
    let workbook_err = |e: calamine::Error| Error::Workbook {
        path: path.to_path_buf(),
        source: e,
    };

    let mut workbook = open_workbook_auto(path).map_err(workbook_err)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::NoHeader(path.to_path_buf()))?
        .map_err(workbook_err)?;

    // Cells render through Display so numeric headers (e.g. a bare 2023) survive
    let labels = range
        .rows()
        .next()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .unwrap_or_default();

    labels_or_no_header(labels, path)
}

fn labels_or_no_header(labels: Vec<String>, path: &Path) -> Result<Vec<String>> {
    if labels.is_empty() || labels.iter().all(|l| l.is_empty()) {
        return Err(Error::NoHeader(path.to_path_buf()));
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_header_from_str() {
        let csv = "Account Number,Owner Name,Total Due\n1001,SMITH JOHN,1520.33\n";
        let labels = read_column_labels_str(csv, "roll.csv").unwrap();
        assert_eq!(labels, vec!["Account Number", "Owner Name", "Total Due"]);
    }

    #[test]
    fn test_header_keeps_labels_verbatim() {
        let csv = "\"Account #\", Owner ,%\n";
        let labels = read_column_labels_str(csv, "roll.csv").unwrap();
        assert_eq!(labels, vec!["Account #", " Owner ", "%"]);
    }

    #[test]
    fn test_header_keeps_duplicates() {
        let labels = read_column_labels_str("Owner,Owner\n", "roll.csv").unwrap();
        assert_eq!(labels, vec!["Owner", "Owner"]);
    }

    #[test]
    fn test_empty_content_has_no_header() {
        let err = read_column_labels_str("", "empty.csv").unwrap_err();
        assert!(matches!(err, Error::NoHeader(_)));
    }

    #[test]
    fn test_read_csv_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("batch_01.csv");
        fs::write(&path, "Account Number,Status\n1,ACTIVE\n").unwrap();

        let labels = read_column_labels(&path).unwrap();
        assert_eq!(labels, vec!["Account Number", "Status"]);
    }

    #[test]
    fn test_uppercase_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ROLL.CSV");
        fs::write(&path, "Status\n").unwrap();

        assert_eq!(read_column_labels(&path).unwrap(), vec!["Status"]);
    }

    #[test]
    fn test_missing_file_is_not_a_read_error() {
        let err = read_column_labels("/nonexistent/roll.xlsx").unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }

    #[test]
    fn test_unsupported_format() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roll.txt");
        fs::write(&path, "Status\n").unwrap();

        let err = read_column_labels(&path).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_corrupt_workbook_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roll.xlsx");
        fs::write(&path, "not a zip archive").unwrap();

        let err = read_column_labels(&path).unwrap_err();
        assert!(matches!(err, Error::Workbook { .. }));
    }

    fn fixture(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    #[test]
    fn test_read_workbook_header() {
        let labels = read_column_labels(fixture("tax_roll.xlsx")).unwrap();
        assert_eq!(
            labels,
            vec!["Account Number", "Owner Name", "Property Address", "Total Due", "2023"]
        );
    }

    #[test]
    fn test_numeric_workbook_header_stays_unmatched() {
        let labels = read_column_labels(fixture("tax_roll.xlsx")).unwrap();
        let result = crate::mapper::match_columns(&labels, &crate::aliases::AliasTable::default());

        assert_eq!(result.mapped.len(), 4);
        assert_eq!(result.unmatched, vec!["2023"]);
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(SheetFormat::from_path(Path::new("a.csv")), Some(SheetFormat::Csv));
        assert_eq!(SheetFormat::from_path(Path::new("a.xlsx")), Some(SheetFormat::Workbook));
        assert_eq!(SheetFormat::from_path(Path::new("a.Ods")), Some(SheetFormat::Workbook));
        assert_eq!(SheetFormat::from_path(Path::new("a")), None);
    }
}
